//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y normalización de coordenadas.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    /// Formato de nombre de geocerca: ORG-{type}-{location}
    pub static ref GEOFENCE_NAME_REGEX: Regex =
        Regex::new(r"^ORG-[a-zA-Z]+-[a-zA-Z0-9]+$").expect("geofence name pattern is valid");

    /// Color CSS hexadecimal de 6 dígitos
    static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid");
}

/// Decimales conservados en coordenadas provenientes del mapa
pub const COORDINATE_PRECISION: i32 = 6;

/// Validar formato de nombre de geocerca (ej. `ORG-Warehouse-NYC01`)
pub fn validate_geofence_name(value: &str) -> Result<(), ValidationError> {
    if !GEOFENCE_NAME_REGEX.is_match(value) {
        let mut error = ValidationError::new("geofence_name");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"ORG-{type}-{location}".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar color en formato `#rrggbb`
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR_REGEX.is_match(value) {
        let mut error = ValidationError::new("hex_color");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"#rrggbb".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico
pub fn validate_range<T: PartialOrd + std::fmt::Display + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Redondear una coordenada a 6 decimales, como la entrega el mapa
pub fn round_coordinate(value: f64) -> f64 {
    let factor = 10f64.powi(COORDINATE_PRECISION);
    (value * factor).round() / factor
}

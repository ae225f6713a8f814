//! Modelo de Geofence
//!
//! Borrador de geocerca que el usuario edita en el panel lateral
//! mientras dibuja formas en el mapa.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::geojson::FeatureCollection;
use crate::utils::validation::validate_hex_color;

/// Cuándo dispara alertas la geocerca
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlertType {
    Entry,
    Exit,
    #[default]
    Both,
}

/// Estilo visual aplicado a las formas dibujadas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StyleSettings {
    #[validate(custom = "validate_hex_color")]
    pub fill_color: String,

    #[validate(range(min = 0.0, max = 1.0))]
    pub fill_opacity: f64,

    #[validate(custom = "validate_hex_color")]
    pub stroke_color: String,

    #[validate(range(min = 1, max = 10))]
    pub stroke_width: u8,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            fill_color: "#3064ec".to_string(),
            fill_opacity: 0.3,
            stroke_color: "#3064ec".to_string(),
            stroke_width: 2,
        }
    }
}

/// Borrador de geocerca. `geometry` es `None` exactamente cuando no hay
/// formas en el mapa.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceDraft {
    pub name: String,
    pub alert_type: AlertType,
    /// Sin duplicados, en el orden en que se seleccionaron
    pub categories: Vec<String>,
    pub style_settings: StyleSettings,
    #[serde(rename = "geojson")]
    pub geometry: Option<FeatureCollection>,
}

impl GeofenceDraft {
    /// Agregar la categoría si no está, quitarla si ya está.
    /// Devuelve `true` si la categoría queda seleccionada.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        match self.categories.iter().position(|selected| selected == category) {
            Some(index) => {
                self.categories.remove(index);
                false
            }
            None => {
                self.categories.push(category.to_string());
                true
            }
        }
    }
}

/// Errores de formulario por campo: `name`, `geojson`, `categories`.
/// Vacío implica borrador válido.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

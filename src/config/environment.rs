//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del dashboard. Todas las variables
//! son opcionales; si faltan se usan los valores por defecto.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::Level;

use crate::services::area_estimator::AreaUnit;
use crate::services::geometry_accumulator::AreaScope;
use crate::utils::errors::{config_error, AppResult};
use crate::utils::validation::validate_range;

/// Tamaño de página de la tabla de vehículos
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Intervalo de inactividad antes de aplicar la búsqueda
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
/// Retraso simulado de la "API" de vehículos
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 800;
/// Un registro sin actualizar en 5 minutos se considera obsoleto
pub const DEFAULT_STALE_AFTER_SECS: i64 = 300;

/// Configuración del dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub page_size: usize,
    pub search_debounce: Duration,
    pub refresh_delay: Duration,
    pub area_unit: AreaUnit,
    pub area_scope: AreaScope,
    pub stale_after: chrono::Duration,
    pub log_level: Level,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            refresh_delay: Duration::from_millis(DEFAULT_REFRESH_DELAY_MS),
            area_unit: AreaUnit::SquareKilometers,
            area_scope: AreaScope::LastTouched,
            stale_after: chrono::Duration::seconds(DEFAULT_STALE_AFTER_SECS),
            log_level: Level::INFO,
        }
    }
}

impl DashboardConfig {
    /// Cargar configuración desde `.env` y variables de entorno
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_size: usize = parse_or(&lookup, "DASHBOARD_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        validate_range(page_size, 1, 500)
            .map_err(|_| config_error("DASHBOARD_PAGE_SIZE", &page_size.to_string()))?;

        let debounce_ms: u64 =
            parse_or(&lookup, "DASHBOARD_SEARCH_DEBOUNCE_MS", DEFAULT_SEARCH_DEBOUNCE_MS)?;
        let refresh_ms: u64 =
            parse_or(&lookup, "DASHBOARD_REFRESH_DELAY_MS", DEFAULT_REFRESH_DELAY_MS)?;
        let stale_secs: i64 =
            parse_or(&lookup, "DASHBOARD_STALE_AFTER_SECS", DEFAULT_STALE_AFTER_SECS)?;

        let area_unit = match lookup("DASHBOARD_AREA_UNIT").as_deref() {
            None | Some("km2") => AreaUnit::SquareKilometers,
            Some("raw") => AreaUnit::Raw,
            Some(other) => return Err(config_error("DASHBOARD_AREA_UNIT", other)),
        };

        let area_scope = match lookup("DASHBOARD_AREA_SCOPE").as_deref() {
            None | Some("last") => AreaScope::LastTouched,
            Some("all") => AreaScope::AllShapes,
            Some(other) => return Err(config_error("DASHBOARD_AREA_SCOPE", other)),
        };

        let log_level = match lookup("DASHBOARD_LOG_LEVEL") {
            None => Level::INFO,
            Some(raw) => Level::from_str(&raw).map_err(|_| config_error("DASHBOARD_LOG_LEVEL", &raw))?,
        };

        Ok(Self {
            page_size,
            search_debounce: Duration::from_millis(debounce_ms),
            refresh_delay: Duration::from_millis(refresh_ms),
            area_unit,
            area_scope,
            stale_after: chrono::Duration::seconds(stale_secs),
            log_level,
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| config_error(key, &raw)),
    }
}

//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del dashboard.
//! Los errores de formulario de geocercas NO pasan por aquí: se devuelven
//! como `ValidationErrors` en línea (ver `services::geofence_validator`).

use serde::Serialize;
use thiserror::Error;

use crate::models::notification::Notification;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Map unavailable: {0}")]
    MapUnavailable(String),

    #[error("Vehicle source error: {0}")]
    Source(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Resumen serializable de un error, pensado para la capa de presentación
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorSummary {
    pub error: String,
    pub message: String,
    pub code: String,
}

impl AppError {
    /// Código estable para la UI
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Configuration(_) => "CONFIG_ERROR",
            AppError::MapUnavailable(_) => "MAP_UNAVAILABLE",
            AppError::Source(_) => "SOURCE_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
        }
    }

    /// Convertir el error en un resumen visible y descartable por el usuario.
    /// Ningún error es fatal para la aplicación completa.
    pub fn summary(&self) -> ErrorSummary {
        let (error, message) = match self {
            AppError::Validation(_) => ("Validation Error", "The provided data is invalid".to_string()),
            AppError::Configuration(msg) => ("Configuration Error", msg.clone()),
            AppError::MapUnavailable(_) => (
                "Map Loading Failed",
                "Unable to load the map component. This could be due to network issues or browser compatibility."
                    .to_string(),
            ),
            AppError::Source(_) => ("Refresh Failed", "There was an error loading vehicle data".to_string()),
            AppError::BadRequest(msg) => ("Bad Request", msg.clone()),
        };

        ErrorSummary {
            error: error.to_string(),
            message,
            code: self.code().to_string(),
        }
    }

    /// Notificación genérica de fallo a partir del resumen
    pub fn notification(&self) -> Notification {
        let summary = self.summary();
        Notification::failure(summary.error, summary.message)
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

/// Función helper para crear errores de configuración
pub fn config_error(variable: &str, value: &str) -> AppError {
    AppError::Configuration(format!("{} has an invalid value: '{}'", variable, value))
}

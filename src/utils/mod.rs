//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y temporización (debounce).

pub mod debounce;
pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult};

//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno del dashboard
//! y la inicialización del logging.

pub mod environment;
pub mod logging;

pub use environment::*;

//! Fleet dashboard
//!
//! Lógica del panel de monitoreo de flota: tabla de vehículos con filtros,
//! orden y paginación, y la herramienta de dibujo de geocercas.

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use config::environment::DashboardConfig;
pub use state::{AppState, RefreshOutcome};
pub use utils::errors::{AppError, AppResult};

//! Configuración de logging
//!
//! Inicializa el subscriber de `tracing` con el nivel configurado.

use tracing::info;

use crate::config::environment::DashboardConfig;

/// Instalar el subscriber global. Si ya existe uno, no hace nada
/// y devuelve `false`.
pub fn init_tracing(config: &DashboardConfig) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        info!("🚚 Fleet dashboard - logging inicializado ({})", config.log_level);
    }
    installed
}

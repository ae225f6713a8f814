//! Envío de geocercas
//!
//! Todo o nada: si el validador devuelve errores no se envía nada.
//! No hay backend; el envío queda registrado en el log.

use serde::Serialize;
use tracing::{info, warn};

use crate::models::geofence::{GeofenceDraft, ValidationErrors};
use crate::models::notification::Notification;
use crate::services::geofence_validator::validate_draft;

/// Tamaño de pantalla en el que corre el editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Móvil: el panel lateral ocupa toda la pantalla
    Compact,
    Wide,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Accepted {
        notification: Notification,
        /// Cerrar el panel lateral tras el envío (solo en móvil)
        close_panel: bool,
    },
    Rejected(ValidationErrors),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }
}

pub fn submit_geofence(draft: &GeofenceDraft, viewport: Viewport) -> SubmissionOutcome {
    let errors = validate_draft(draft);
    if !errors.is_empty() {
        warn!(
            "❌ Geocerca rechazada: {} errores ({})",
            errors.len(),
            errors.fields().collect::<Vec<_>>().join(", ")
        );
        return SubmissionOutcome::Rejected(errors);
    }

    let payload = serde_json::to_string(draft).unwrap_or_else(|e| format!("<unserializable: {}>", e));
    info!(geofence = %draft.name, "📤 Submitting geofence data: {}", payload);

    SubmissionOutcome::Accepted {
        notification: Notification::success(
            "Geofence Created",
            format!("Successfully created geofence: {}", draft.name),
        ),
        close_panel: viewport == Viewport::Compact,
    }
}

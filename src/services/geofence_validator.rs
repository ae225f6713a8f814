//! Validación del formulario de geocercas
//!
//! Se ejecuta solo al enviar. Las tres reglas se evalúan siempre y se
//! acumulan todos los mensajes.

use crate::models::geofence::{GeofenceDraft, ValidationErrors};
use crate::utils::validation::validate_geofence_name;

pub const NAME_FIELD: &str = "name";
pub const GEOMETRY_FIELD: &str = "geojson";
pub const CATEGORIES_FIELD: &str = "categories";

pub const NAME_MESSAGE: &str = "Name must match format: ORG-{type}-{location}";
pub const GEOMETRY_MESSAGE: &str = "Please draw at least one valid shape on the map";
pub const CATEGORIES_MESSAGE: &str = "Please select at least one category";

pub fn validate_draft(draft: &GeofenceDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if validate_geofence_name(&draft.name).is_err() {
        errors.insert(NAME_FIELD, NAME_MESSAGE);
    }

    if draft.geometry.is_none() {
        errors.insert(GEOMETRY_FIELD, GEOMETRY_MESSAGE);
    }

    if draft.categories.is_empty() {
        errors.insert(CATEGORIES_FIELD, CATEGORIES_MESSAGE);
    }

    errors
}

//! Services module
//!
//! Este módulo contiene la lógica del dashboard: el pipeline de la tabla
//! de vehículos y el flujo de dibujo, validación y envío de geocercas.

pub mod area_estimator;
pub mod geofence_editor;
pub mod geofence_submission;
pub mod geofence_validator;
pub mod geometry_accumulator;
pub mod map_service;
pub mod vehicle_query;
pub mod vehicle_source;
pub mod vehicle_table;

pub use area_estimator::{estimate_area, planar_area, AreaUnit};
pub use geofence_editor::{GeofenceEditor, MapState};
pub use geofence_submission::{submit_geofence, SubmissionOutcome, Viewport};
pub use geofence_validator::validate_draft;
pub use geometry_accumulator::{AreaScope, GeometryAccumulator};
pub use map_service::{MapHandle, MapService, ShapeEvent, ShapeListener};
pub use vehicle_source::{InMemoryVehicleSource, VehicleSource};
pub use vehicle_table::VehicleTable;

//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del dashboard: vehículos,
//! geocercas, formas del mapa y GeoJSON.

pub mod fleet_stats;
pub mod geofence;
pub mod geojson;
pub mod notification;
pub mod shape;
pub mod vehicle;

pub use fleet_stats::FleetStats;
pub use geofence::{AlertType, GeofenceDraft, StyleSettings, ValidationErrors};
pub use geojson::{Feature, FeatureCollection, Geometry, Position};
pub use notification::Notification;
pub use shape::{Shape, ShapeId, ShapeKind};
pub use vehicle::{
    FilterCriteria, RegionFilter, SortDirection, SortField, SortSpec, StatusFilter, VehicleRecord,
    VehicleStatus,
};

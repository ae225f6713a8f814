//! Modelo de Vehicle
//!
//! Este módulo contiene el registro de vehículo que muestra la tabla de
//! monitoreo, junto con los criterios de filtro y orden.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::errors::{bad_request_error, AppError};

/// Regiones conocidas de la flota, en el orden del selector de filtros
pub const KNOWN_REGIONS: [&str; 7] = [
    "North", "South", "East", "West", "Central", "Downtown", "Suburbs",
];

/// Estado del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Idle,
    Alarm,
    Warning,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Idle => "idle",
            VehicleStatus::Alarm => "alarm",
            VehicleStatus::Warning => "warning",
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, VehicleStatus::Alarm | VehicleStatus::Warning)
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(VehicleStatus::Active),
            "idle" => Ok(VehicleStatus::Idle),
            "alarm" => Ok(VehicleStatus::Alarm),
            "warning" => Ok(VehicleStatus::Warning),
            other => Err(bad_request_error(&format!("unknown vehicle status '{}'", other))),
        }
    }
}

/// Banda de velocidad usada para colorear la barra de velocidad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedBand {
    Low,
    Medium,
    High,
}

/// Registro de vehículo. Inmutable: un refresh reemplaza el conjunto completo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub plate_number: String,
    pub speed: u32,
    pub location: String,
    pub region: String,
    pub last_update: DateTime<Utc>,
    pub status: VehicleStatus,
}

impl VehicleRecord {
    /// Sin actualización dentro de `threshold` respecto a `now`
    pub fn is_stale(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        self.last_update < now - threshold
    }

    pub fn speed_band(&self) -> SpeedBand {
        match self.speed {
            s if s > 80 => SpeedBand::High,
            s if s > 40 => SpeedBand::Medium,
            _ => SpeedBand::Low,
        }
    }
}

/// Filtro de estado: "all" o un estado concreto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(VehicleStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: VehicleStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        // El selector original usaba "" como sinónimo de "all"
        match value.as_str() {
            "all" | "" => Ok(StatusFilter::All),
            other => other.parse().map(StatusFilter::Only),
        }
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::All => "all".to_string(),
            StatusFilter::Only(status) => status.as_str().to_string(),
        }
    }
}

/// Filtro de región: "all" o una región concreta
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionFilter {
    #[default]
    All,
    Only(String),
}

impl RegionFilter {
    pub fn accepts(&self, region: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(expected) => expected == region,
        }
    }
}

impl From<String> for RegionFilter {
    fn from(value: String) -> Self {
        match value.as_str() {
            "all" | "" => RegionFilter::All,
            _ => RegionFilter::Only(value),
        }
    }
}

impl From<RegionFilter> for String {
    fn from(filter: RegionFilter) -> Self {
        match filter {
            RegionFilter::All => "all".to_string(),
            RegionFilter::Only(region) => region,
        }
    }
}

/// Criterios de filtro de la tabla de vehículos
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub status: StatusFilter,
    pub region: RegionFilter,
    pub search: String,
}

impl FilterCriteria {
    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// Número de filtros distintos del valor por defecto (para el badge)
    pub fn active_filter_count(&self) -> usize {
        [
            self.status != StatusFilter::All,
            self.region != RegionFilter::All,
            !self.search.is_empty(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }
}

/// Columnas ordenables de la tabla
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    PlateNumber,
    Speed,
    Location,
    Region,
    LastUpdate,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::PlateNumber,
            direction: SortDirection::Asc,
        }
    }
}

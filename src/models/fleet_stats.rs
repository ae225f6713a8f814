//! Estadísticas de la flota
//!
//! Resumen que alimenta las tarjetas superiores del dashboard. Se calcula
//! siempre sobre el conjunto completo, no sobre el filtrado.

use serde::Serialize;

use crate::models::vehicle::{VehicleRecord, VehicleStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetStats {
    pub total: usize,
    pub active: usize,
    pub idle: usize,
    pub alarm: usize,
    pub warning: usize,
}

impl FleetStats {
    pub fn from_records(records: &[VehicleRecord]) -> Self {
        records.iter().fold(
            FleetStats {
                total: records.len(),
                ..FleetStats::default()
            },
            |mut stats, record| {
                match record.status {
                    VehicleStatus::Active => stats.active += 1,
                    VehicleStatus::Idle => stats.idle += 1,
                    VehicleStatus::Alarm => stats.alarm += 1,
                    VehicleStatus::Warning => stats.warning += 1,
                }
                stats
            },
        )
    }

    pub fn alerts(&self) -> usize {
        self.alarm + self.warning
    }

    pub fn active_percentage(&self) -> u32 {
        percentage(self.active, self.total)
    }

    pub fn idle_percentage(&self) -> u32 {
        percentage(self.idle, self.total)
    }

    pub fn alert_percentage(&self) -> u32 {
        percentage(self.alerts(), self.total)
    }

    /// Texto de detalle de la tarjeta de alertas
    pub fn alert_detail(&self) -> String {
        format!("{} critical, {} warnings", self.alarm, self.warning)
    }
}

/// Porcentaje redondeado al entero más cercano; 0 si no hay vehículos
fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

//! Fuente de datos de vehículos
//!
//! El proveedor real de datos es un colaborador externo; el dashboard solo
//! necesita un conjunto completo de registros, sin paginar ni filtrar.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::vehicle::VehicleRecord;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait VehicleSource: Send + Sync {
    /// Carga inicial
    async fn load(&self) -> AppResult<Vec<VehicleRecord>>;

    /// Refresco manual; recibe el conjunto mostrado actualmente
    async fn refresh(&self, _current: &[VehicleRecord]) -> AppResult<Vec<VehicleRecord>> {
        self.load().await
    }
}

/// Fuente en memoria con una instantánea reemplazable
#[derive(Debug, Clone, Default)]
pub struct InMemoryVehicleSource {
    snapshot: Arc<RwLock<Vec<VehicleRecord>>>,
}

impl InMemoryVehicleSource {
    pub fn new(records: Vec<VehicleRecord>) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(records)),
        }
    }

    /// Publicar una instantánea nueva para el próximo refresco
    pub async fn publish(&self, records: Vec<VehicleRecord>) {
        *self.snapshot.write().await = records;
    }
}

#[async_trait]
impl VehicleSource for InMemoryVehicleSource {
    async fn load(&self) -> AppResult<Vec<VehicleRecord>> {
        Ok(self.snapshot.read().await.clone())
    }
}

//! Shared dashboard state
//!
//! Este módulo define el estado compartido del panel de vehículos: la tabla,
//! la fuente de datos, el indicador de carga y la búsqueda con debounce.
//!
//! Cada carga o refresco recibe un ticket; al completarse solo se aplica si
//! sigue siendo el más reciente. Las respuestas superadas se descartan.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::config::environment::DashboardConfig;
use crate::models::fleet_stats::FleetStats;
use crate::models::notification::Notification;
use crate::models::vehicle::VehicleRecord;
use crate::services::vehicle_source::VehicleSource;
use crate::services::vehicle_table::VehicleTable;
use crate::utils::debounce::Debouncer;
use crate::utils::errors::AppResult;

/// Resultado de una carga o refresco
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Applied {
        records: usize,
        notification: Option<Notification>,
    },
    /// Otra petición más reciente tomó su lugar
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    Initial,
    Refresh,
}

/// Resuelve el ticket al soltarse, también si la petición se cancela a mitad
struct SettleGuard<'a> {
    issued: &'a AtomicU64,
    settled: &'a AtomicU64,
    ticket: u64,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        if self.issued.load(Ordering::SeqCst) == self.ticket {
            self.settled.fetch_max(self.ticket, Ordering::SeqCst);
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: DashboardConfig,
    table: Arc<RwLock<VehicleTable>>,
    source: Arc<dyn VehicleSource>,
    issued: Arc<AtomicU64>,
    settled: Arc<AtomicU64>,
    search: Arc<Mutex<Debouncer>>,
}

impl AppState {
    pub fn new(config: DashboardConfig, source: Arc<dyn VehicleSource>) -> Self {
        let table = VehicleTable::new(config.page_size);
        let search = Debouncer::new(config.search_debounce);
        Self {
            config,
            table: Arc::new(RwLock::new(table)),
            source,
            issued: Arc::new(AtomicU64::new(0)),
            settled: Arc::new(AtomicU64::new(0)),
            search: Arc::new(Mutex::new(search)),
        }
    }

    /// Carga inicial tras el retraso simulado
    pub async fn load_initial(&self) -> AppResult<RefreshOutcome> {
        self.fetch(FetchKind::Initial).await
    }

    /// Refresco manual tras el retraso simulado
    pub async fn refresh(&self) -> AppResult<RefreshOutcome> {
        self.fetch(FetchKind::Refresh).await
    }

    /// Lanzar un refresco en segundo plano
    pub fn spawn_refresh(&self) -> JoinHandle<AppResult<RefreshOutcome>> {
        let state = self.clone();
        tokio::spawn(async move { state.refresh().await })
    }

    /// Refresco lanzado desde la UI: siempre termina en una notificación,
    /// salvo que otra petición más reciente lo haya superado
    pub async fn refresh_and_notify(&self) -> Option<Notification> {
        match self.refresh().await {
            Ok(RefreshOutcome::Applied { notification, .. }) => notification,
            Ok(RefreshOutcome::Superseded) => None,
            Err(e) => Some(e.notification()),
        }
    }

    /// Hay alguna petición pendiente de completarse
    pub fn is_loading(&self) -> bool {
        self.settled.load(Ordering::SeqCst) < self.issued.load(Ordering::SeqCst)
    }

    /// Búsqueda libre: se aplica cuando el texto deja de cambiar
    pub async fn search(&self, text: impl Into<String>) {
        let text = text.into();
        let table = self.table.clone();
        self.search.lock().await.call(move || async move {
            info!("🔍 Aplicando búsqueda: '{}'", text);
            table.write().await.set_search(text);
        });
    }

    pub async fn search_pending(&self) -> bool {
        self.search.lock().await.is_pending()
    }

    /// Ejecutar una operación sobre la tabla (filtros, orden, paginación)
    pub async fn with_table<R>(&self, f: impl FnOnce(&mut VehicleTable) -> R) -> R {
        let mut table = self.table.write().await;
        f(&mut table)
    }

    /// Copia de la tabla para presentación
    pub async fn snapshot(&self) -> VehicleTable {
        self.table.read().await.clone()
    }

    pub async fn stats(&self) -> FleetStats {
        self.table.read().await.stats()
    }

    /// Vehículos sin actualización dentro del umbral configurado
    pub async fn stale_vehicles(&self, now: DateTime<Utc>) -> Vec<VehicleRecord> {
        self.table.read().await.stale(now, self.config.stale_after)
    }

    async fn fetch(&self, kind: FetchKind) -> AppResult<RefreshOutcome> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = SettleGuard {
            issued: &self.issued,
            settled: &self.settled,
            ticket,
        };
        info!("🔄 Petición de vehículos #{} ({:?})", ticket, kind);

        tokio::time::sleep(self.config.refresh_delay).await;

        let result = match kind {
            FetchKind::Initial => self.source.load().await,
            FetchKind::Refresh => {
                let current: Vec<VehicleRecord> = self.table.read().await.records().to_vec();
                self.source.refresh(&current).await
            }
        };

        let mut table = self.table.write().await;
        if self.issued.load(Ordering::SeqCst) != ticket {
            info!("⏭️ Petición #{} superada, se descarta", ticket);
            return Ok(RefreshOutcome::Superseded);
        }
        self.settled.fetch_max(ticket, Ordering::SeqCst);

        let records = result.map_err(|e| {
            error!("❌ Error obteniendo vehículos: {}", e);
            e
        })?;

        let count = records.len();
        table.replace_records(records);
        info!("✅ {} vehículos cargados", count);

        let notification = match kind {
            FetchKind::Initial => None,
            FetchKind::Refresh => Some(Notification::success(
                "Data refreshed",
                "Vehicle data has been updated",
            )),
        };

        Ok(RefreshOutcome::Applied {
            records: count,
            notification,
        })
    }
}

//! Editor de geocercas
//!
//! Coordina el borrador del formulario, el acumulador de geometría y el
//! mapa montado. Los eventos del mapa se encolan en un canal y se procesan
//! de uno en uno con `pump`, cada uno hasta completarse.

use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info};
use validator::Validate;

use crate::config::environment::DashboardConfig;
use crate::models::geofence::{AlertType, GeofenceDraft, StyleSettings, ValidationErrors};
use crate::models::shape::ShapeKind;
use crate::services::area_estimator::AreaUnit;
use crate::services::geofence_submission::{submit_geofence, SubmissionOutcome, Viewport};
use crate::services::geometry_accumulator::GeometryAccumulator;
use crate::services::map_service::{MapHandle, MapService, ShapeEvent};
use crate::utils::errors::{AppError, AppResult, ErrorSummary};
use crate::utils::validation::round_coordinate;

/// Estado del widget de mapa
pub enum MapState<M: MapService> {
    Unmounted,
    Ready {
        handle: MapHandle<M>,
        events: UnboundedReceiver<ShapeEvent>,
    },
    /// Vista de respaldo con acción de recarga manual
    Fallback(ErrorSummary),
}

pub struct GeofenceEditor<M: MapService> {
    draft: GeofenceDraft,
    geometry: GeometryAccumulator,
    /// Última posición del puntero como `(lat, lng)`
    pointer: Option<(f64, f64)>,
    errors: ValidationErrors,
    viewport: Viewport,
    panel_open: bool,
    map: MapState<M>,
}

impl<M: MapService> GeofenceEditor<M> {
    pub fn new(config: &DashboardConfig, viewport: Viewport) -> Self {
        Self {
            draft: GeofenceDraft::default(),
            geometry: GeometryAccumulator::new(config.area_unit, config.area_scope),
            pointer: None,
            errors: ValidationErrors::new(),
            viewport,
            panel_open: viewport == Viewport::Wide,
            map: MapState::Unmounted,
        }
    }

    /// Montar el mapa. Si la inicialización falla se pasa a la vista de
    /// respaldo; no hay reintento automático.
    ///
    /// Un widget nuevo empieza sin capas, así que las formas acumuladas
    /// del montaje anterior se descartan.
    pub fn mount<F>(&mut self, init: F) -> AppResult<()>
    where
        F: FnOnce() -> AppResult<M>,
    {
        self.unmount();
        if !self.geometry.is_empty() {
            info!("🧹 Descartando {} formas del mapa anterior", self.geometry.len());
            self.geometry.clear();
            self.draft.geometry = None;
        }

        match init() {
            Ok(service) => {
                let (handle, events) = MapHandle::attach(service, &self.draft.style_settings);
                self.map = MapState::Ready { handle, events };
                Ok(())
            }
            Err(e) => {
                error!("❌ Error inicializando el mapa: {}", e);
                let summary = match &e {
                    AppError::MapUnavailable(_) => e.summary(),
                    other => AppError::MapUnavailable(other.to_string()).summary(),
                };
                self.map = MapState::Fallback(summary);
                Err(e)
            }
        }
    }

    /// Acción manual de la vista de respaldo
    pub fn reload<F>(&mut self, init: F) -> AppResult<()>
    where
        F: FnOnce() -> AppResult<M>,
    {
        info!("🔄 Recargando mapa");
        self.mount(init)
    }

    /// Desmontar el mapa (destruye el widget)
    pub fn unmount(&mut self) {
        if let MapState::Ready { handle, .. } = std::mem::replace(&mut self.map, MapState::Unmounted) {
            handle.release();
        }
    }

    pub fn map_state(&self) -> &MapState<M> {
        &self.map
    }

    pub fn map(&self) -> Option<&M> {
        match &self.map {
            MapState::Ready { handle, .. } => Some(handle.service()),
            _ => None,
        }
    }

    pub fn fallback(&self) -> Option<&ErrorSummary> {
        match &self.map {
            MapState::Fallback(summary) => Some(summary),
            _ => None,
        }
    }

    /// Procesar los eventos de mapa pendientes. Devuelve cuántos se aplicaron.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let event = match &mut self.map {
                MapState::Ready { events, .. } => match events.try_recv() {
                    Ok(event) => event,
                    Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                },
                _ => break,
            };
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    pub fn handle_event(&mut self, event: ShapeEvent) {
        match event {
            ShapeEvent::Created(shape) => {
                let style = self.draft.style_settings.clone();
                self.draft.geometry = self.geometry.shape_created(shape, &style);
            }
            ShapeEvent::Edited(shapes) => {
                self.draft.geometry = self.geometry.shapes_edited(shapes);
            }
            ShapeEvent::Deleted(ids) => {
                self.draft.geometry = self.geometry.shapes_deleted(&ids);
            }
            ShapeEvent::PointerMoved { lng, lat } => {
                self.pointer = Some((round_coordinate(lat), round_coordinate(lng)));
            }
        }
    }

    /// Activar una herramienta de dibujo en el mapa
    pub fn start_drawing(&mut self, kind: ShapeKind) -> AppResult<()> {
        match &mut self.map {
            MapState::Ready { handle, .. } => handle.service_mut().draw_shape(kind),
            _ => Err(AppError::MapUnavailable("map is not mounted".to_string())),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_alert_type(&mut self, alert_type: AlertType) {
        self.draft.alert_type = alert_type;
    }

    pub fn toggle_category(&mut self, category: &str) -> bool {
        self.draft.toggle_category(category)
    }

    /// Cambiar el estilo; se valida y se propaga a todas las formas
    pub fn update_style(&mut self, style: StyleSettings) -> AppResult<()> {
        style.validate()?;

        self.geometry.restyle(&style);
        if let MapState::Ready { handle, .. } = &mut self.map {
            handle.service_mut().set_style(&style);
        }
        debug!("🎨 Estilo actualizado: {:?}", style);
        self.draft.style_settings = style;
        Ok(())
    }

    /// Validar y enviar. Los errores anteriores se reemplazan por completo.
    pub fn submit(&mut self) -> SubmissionOutcome {
        let outcome = submit_geofence(&self.draft, self.viewport);
        match &outcome {
            SubmissionOutcome::Accepted { close_panel, .. } => {
                self.errors = ValidationErrors::new();
                if *close_panel {
                    self.panel_open = false;
                }
            }
            SubmissionOutcome::Rejected(errors) => self.errors = errors.clone(),
        }
        outcome
    }

    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.panel_open
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn draft(&self) -> &GeofenceDraft {
        &self.draft
    }

    pub fn geometry(&self) -> &GeometryAccumulator {
        &self.geometry
    }

    pub fn area(&self) -> Option<f64> {
        self.geometry.area()
    }

    pub fn area_unit(&self) -> AreaUnit {
        self.geometry.area_unit()
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}

//! Servicio de mapa
//!
//! El widget de mapa es un colaborador externo con estado propio. Se
//! abstrae detrás de `MapService` y se posee mediante `MapHandle`, que
//! garantiza que `destroy` se llama exactamente una vez al soltarlo.

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

use crate::models::geofence::StyleSettings;
use crate::models::shape::{Shape, ShapeId, ShapeKind};
use crate::utils::errors::AppResult;

/// Eventos emitidos por el mapa
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEvent {
    Created(Shape),
    Edited(Vec<Shape>),
    Deleted(Vec<ShapeId>),
    PointerMoved { lng: f64, lat: f64 },
}

pub type ShapeListener = Box<dyn FnMut(ShapeEvent) + Send + 'static>;

pub trait MapService: Send {
    /// Activar la herramienta de dibujo indicada
    fn draw_shape(&mut self, kind: ShapeKind) -> AppResult<()>;

    /// Registrar el receptor de eventos de formas y puntero
    fn on_shape_event(&mut self, listener: ShapeListener);

    /// Aplicar el estilo a todas las capas dibujadas y a las futuras
    fn set_style(&mut self, style: &StyleSettings);

    /// Liberar recursos del widget
    fn destroy(&mut self);
}

/// Propiedad exclusiva de un `MapService` montado
pub struct MapHandle<M: MapService> {
    service: M,
}

impl<M: MapService> MapHandle<M> {
    /// Montar el servicio: conecta sus eventos a un canal y aplica el estilo
    pub fn attach(mut service: M, style: &StyleSettings) -> (Self, UnboundedReceiver<ShapeEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        service.on_shape_event(Box::new(move |event| {
            if sender.send(event).is_err() {
                debug!("🗺️ Evento de mapa descartado: receptor cerrado");
            }
        }));
        service.set_style(style);
        info!("🗺️ Mapa montado");

        (Self { service }, receiver)
    }

    pub fn service(&self) -> &M {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut M {
        &mut self.service
    }

    /// Desmontar explícitamente; `destroy` corre al soltar el handle
    pub fn release(self) {
        debug!("🗺️ Liberando mapa");
    }
}

impl<M: MapService> Drop for MapHandle<M> {
    fn drop(&mut self) {
        self.service.destroy();
        info!("🗺️ Mapa desmontado");
    }
}

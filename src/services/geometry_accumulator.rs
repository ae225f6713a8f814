//! Acumulador de geometría
//!
//! Mantiene las formas dibujadas como una única FeatureCollection que
//! refleja el estado actual del mapa, y la estimación de área asociada.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::geofence::StyleSettings;
use crate::models::geojson::FeatureCollection;
use crate::models::shape::{Shape, ShapeId};
use crate::services::area_estimator::{estimate_area, AreaUnit};

/// Sobre qué formas se recalcula el área tras cada cambio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaScope {
    /// Solo la última forma afectada (creada, primera editada, primera restante)
    LastTouched,
    /// Suma de todos los polígonos presentes
    AllShapes,
}

#[derive(Debug, Clone)]
struct DrawnShape {
    shape: Shape,
    style: StyleSettings,
}

#[derive(Debug, Clone)]
pub struct GeometryAccumulator {
    shapes: Vec<DrawnShape>,
    area_unit: AreaUnit,
    area_scope: AreaScope,
    area: Option<f64>,
}

impl GeometryAccumulator {
    pub fn new(area_unit: AreaUnit, area_scope: AreaScope) -> Self {
        Self {
            shapes: Vec::new(),
            area_unit,
            area_scope,
            area: None,
        }
    }

    /// Nueva forma dibujada; recibe el estilo vigente
    pub fn shape_created(&mut self, shape: Shape, style: &StyleSettings) -> Option<FeatureCollection> {
        debug!("✏️ Forma creada: {:?} ({})", shape.id, shape.kind.as_str());

        let drawn = DrawnShape {
            shape: shape.clone(),
            style: style.clone(),
        };
        match self.position(shape.id) {
            Some(index) => {
                warn!("⚠️ Forma {:?} ya existía, se reemplaza", shape.id);
                self.shapes[index] = drawn;
            }
            None => self.shapes.push(drawn),
        }

        self.recompute_area(Some(&shape));
        self.collection()
    }

    /// Formas editadas: la geometría nueva reemplaza a la anterior
    pub fn shapes_edited(&mut self, edited: Vec<Shape>) -> Option<FeatureCollection> {
        let mut first_touched = None;

        for shape in edited {
            match self.position(shape.id) {
                Some(index) => {
                    self.shapes[index].shape = shape;
                    first_touched.get_or_insert(index);
                }
                None => warn!("⚠️ Edición de forma desconocida {:?}, ignorada", shape.id),
            }
        }

        if let Some(index) = first_touched {
            let touched = self.shapes[index].shape.clone();
            self.recompute_area(Some(&touched));
        }
        self.collection()
    }

    /// Formas borradas; sin formas restantes la geometría pasa a `None`
    pub fn shapes_deleted(&mut self, ids: &[ShapeId]) -> Option<FeatureCollection> {
        let before = self.shapes.len();
        self.shapes.retain(|drawn| !ids.contains(&drawn.shape.id));
        debug!("🗑️ {} formas borradas, quedan {}", before - self.shapes.len(), self.shapes.len());

        let first_remaining = self.shapes.first().map(|drawn| drawn.shape.clone());
        self.recompute_area(first_remaining.as_ref());
        self.collection()
    }

    /// Aplicar un estilo nuevo a todas las formas presentes
    pub fn restyle(&mut self, style: &StyleSettings) {
        for drawn in &mut self.shapes {
            drawn.style = style.clone();
        }
    }

    /// Olvidar todas las formas y el área
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.area = None;
    }

    /// Colección actual; `None` cuando no hay formas (nunca vacía)
    pub fn collection(&self) -> Option<FeatureCollection> {
        if self.shapes.is_empty() {
            return None;
        }
        Some(FeatureCollection {
            features: self.shapes.iter().map(|drawn| drawn.shape.to_feature()).collect(),
        })
    }

    pub fn area(&self) -> Option<f64> {
        self.area
    }

    pub fn area_unit(&self) -> AreaUnit {
        self.area_unit
    }

    pub fn style_of(&self, id: ShapeId) -> Option<&StyleSettings> {
        self.position(id).map(|index| &self.shapes[index].style)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().map(|drawn| &drawn.shape)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn position(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|drawn| drawn.shape.id == id)
    }

    fn recompute_area(&mut self, touched: Option<&Shape>) {
        self.area = match self.area_scope {
            AreaScope::LastTouched => {
                touched.and_then(|shape| estimate_area(&shape.geometry, self.area_unit))
            }
            AreaScope::AllShapes => self
                .shapes
                .iter()
                .filter_map(|drawn| estimate_area(&drawn.shape.geometry, self.area_unit))
                .fold(None, |total, area| Some(total.unwrap_or(0.0) + area)),
        };
    }
}

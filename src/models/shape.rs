//! Formas dibujadas en el mapa
//!
//! Una forma es la representación que entrega el widget del mapa para
//! cada capa dibujada, identificada por un id estable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::geojson::{Feature, Geometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

/// Herramientas de dibujo disponibles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Polygon,
    Rectangle,
    Circle,
    Polyline,
    Marker,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Polygon => "polygon",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Polyline => "polyline",
            ShapeKind::Marker => "marker",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub geometry: Geometry,
    /// Radio en metros, solo para círculos (GeoJSON no tiene círculos)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl Shape {
    /// Convertir a Feature GeoJSON con coordenadas a 6 decimales
    pub fn to_feature(&self) -> Feature {
        let mut properties = Map::new();
        properties.insert("shape".to_string(), Value::from(self.kind.as_str()));
        if let Some(radius) = self.radius {
            properties.insert("radius".to_string(), Value::from(radius));
        }

        Feature {
            geometry: self.geometry.rounded(),
            properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_feature_keeps_radius() {
        let circle = Shape {
            id: ShapeId(7),
            kind: ShapeKind::Circle,
            geometry: Geometry::Point {
                coordinates: [-74.0000001, 40.0],
            },
            radius: Some(250.0),
        };

        let feature = circle.to_feature();
        assert_eq!(feature.properties["shape"], "circle");
        assert_eq!(feature.properties["radius"], 250.0);
        assert_eq!(
            feature.geometry,
            Geometry::Point {
                coordinates: [-74.0, 40.0]
            }
        );
    }
}

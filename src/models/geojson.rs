//! Tipos GeoJSON mínimos para las formas dibujadas en el mapa
//!
//! Las posiciones son `[longitude, latitude]`, igual que en GeoJSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::validation::round_coordinate;

/// Posición `[longitude, latitude]`
pub type Position = [f64; 2];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    /// Primer anillo = contorno exterior, el resto son huecos
    Polygon { coordinates: Vec<Vec<Position>> },
}

impl Geometry {
    pub fn is_polygon(&self) -> bool {
        matches!(self, Geometry::Polygon { .. })
    }

    /// Anillo exterior de un polígono
    pub fn outer_ring(&self) -> Option<&[Position]> {
        match self {
            Geometry::Polygon { coordinates } => coordinates.first().map(|ring| ring.as_slice()),
            _ => None,
        }
    }

    /// Copia con todas las coordenadas redondeadas a 6 decimales
    pub fn rounded(&self) -> Geometry {
        fn round(position: &Position) -> Position {
            [round_coordinate(position[0]), round_coordinate(position[1])]
        }

        match self {
            Geometry::Point { coordinates } => Geometry::Point {
                coordinates: round(coordinates),
            },
            Geometry::LineString { coordinates } => Geometry::LineString {
                coordinates: coordinates.iter().map(round).collect(),
            },
            Geometry::Polygon { coordinates } => Geometry::Polygon {
                coordinates: coordinates
                    .iter()
                    .map(|ring| ring.iter().map(round).collect())
                    .collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

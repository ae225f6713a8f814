//! Estimación de área de polígonos
//!
//! Fórmula del shoelace sobre coordenadas lon/lat tratadas como planas.
//! No es geodésicamente correcta; es la aproximación que muestra el panel.

use serde::{Deserialize, Serialize};

use crate::models::geojson::{Geometry, Position};

/// Kilómetros por grado (aprox. en el ecuador)
pub const KM_PER_DEGREE: f64 = 111.32;

/// Unidad del área estimada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    /// Unidades planas crudas (grados²)
    Raw,
    /// Grados² escalados por 111.32²
    SquareKilometers,
}

impl AreaUnit {
    fn scale(&self) -> f64 {
        match self {
            AreaUnit::Raw => 1.0,
            AreaUnit::SquareKilometers => KM_PER_DEGREE * KM_PER_DEGREE,
        }
    }
}

/// Área plana de un anillo. Menos de 3 vértices devuelve 0.
/// No valida cierre ni orientación del anillo.
pub fn planar_area(ring: &[Position]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let twice_area: f64 = ring
        .iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| a[0] * b[1] - b[0] * a[1])
        .sum();

    twice_area.abs() / 2.0
}

/// Área aproximada de una geometría. Puntos y líneas no tienen área.
pub fn estimate_area(geometry: &Geometry, unit: AreaUnit) -> Option<f64> {
    match geometry {
        Geometry::Polygon { coordinates } => {
            let ring = coordinates.first().map(Vec::as_slice).unwrap_or(&[]);
            Some(planar_area(ring) * unit.scale())
        }
        Geometry::Point { .. } | Geometry::LineString { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const UNIT_SQUARE: [Position; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    #[test]
    fn test_unit_square_raw_area() {
        assert_eq!(planar_area(&UNIT_SQUARE), 1.0);
    }

    #[test]
    fn test_closed_ring_and_reversed_winding() {
        let mut closed = UNIT_SQUARE.to_vec();
        closed.push([0.0, 0.0]);
        assert_eq!(planar_area(&closed), 1.0);

        let mut reversed = UNIT_SQUARE.to_vec();
        reversed.reverse();
        assert_eq!(planar_area(&reversed), 1.0);
    }

    #[test]
    fn test_degenerate_rings() {
        assert_eq!(planar_area(&[]), 0.0);
        assert_eq!(planar_area(&[[1.0, 1.0]]), 0.0);
        assert_eq!(planar_area(&[[0.0, 0.0], [3.0, 4.0]]), 0.0);
    }

    #[test]
    fn test_triangle() {
        let triangle = [[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]];
        assert_eq!(planar_area(&triangle), 6.0);
    }

    #[test]
    fn test_estimate_area_units() {
        let square = Geometry::Polygon {
            coordinates: vec![UNIT_SQUARE.to_vec()],
        };
        assert_eq!(estimate_area(&square, AreaUnit::Raw), Some(1.0));

        let km2 = estimate_area(&square, AreaUnit::SquareKilometers).unwrap();
        assert!((km2 - 12392.1424).abs() < 1e-6);
    }

    #[test]
    fn test_non_polygons_have_no_area() {
        let point = Geometry::Point { coordinates: [1.0, 2.0] };
        let line = Geometry::LineString {
            coordinates: vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]],
        };
        assert_eq!(estimate_area(&point, AreaUnit::Raw), None);
        assert_eq!(estimate_area(&line, AreaUnit::SquareKilometers), None);

        let empty = Geometry::Polygon { coordinates: vec![] };
        assert_eq!(estimate_area(&empty, AreaUnit::Raw), Some(0.0));
    }

    proptest! {
        /// El área nunca es negativa
        #[test]
        fn area_is_never_negative(
            ring in prop::collection::vec((-180.0f64..180.0, -90.0f64..90.0), 0..12)
        ) {
            let ring: Vec<Position> = ring.into_iter().map(|(x, y)| [x, y]).collect();
            prop_assert!(planar_area(&ring) >= 0.0);
        }

        /// Un rectángulo alineado a los ejes mide ancho × alto
        #[test]
        fn axis_aligned_rectangle(
            x in -100.0f64..100.0,
            y in -80.0f64..80.0,
            w in 0.001f64..50.0,
            h in 0.001f64..50.0
        ) {
            let ring = [[x, y], [x + w, y], [x + w, y + h], [x, y + h]];
            let area = planar_area(&ring);
            prop_assert!((area - w * h).abs() < 1e-6 * (1.0 + w * h));
        }
    }
}

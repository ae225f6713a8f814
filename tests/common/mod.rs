#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{Duration, TimeZone, Utc};
use fleet_dashboard::models::geojson::Geometry;
use fleet_dashboard::models::shape::{Shape, ShapeId, ShapeKind};
use fleet_dashboard::models::vehicle::{VehicleRecord, VehicleStatus, KNOWN_REGIONS};
use fleet_dashboard::models::StyleSettings;
use fleet_dashboard::services::{MapService, ShapeEvent, ShapeListener};
use fleet_dashboard::AppResult;

/// Estado observable del mapa falso
#[derive(Default)]
pub struct FakeMapInner {
    pub listener: Option<ShapeListener>,
    pub styles: Vec<StyleSettings>,
    pub tools: Vec<ShapeKind>,
    pub destroyed: usize,
}

#[derive(Clone, Default)]
pub struct FakeMap {
    pub inner: Arc<Mutex<FakeMapInner>>,
}

impl FakeMap {
    /// Simular un evento emitido por el widget
    pub fn emit(&self, event: ShapeEvent) {
        let mut inner = self.inner.lock().unwrap();
        let listener = inner.listener.as_mut().expect("listener registered");
        listener(event);
    }

    pub fn destroyed(&self) -> usize {
        self.inner.lock().unwrap().destroyed
    }
}

impl MapService for FakeMap {
    fn draw_shape(&mut self, kind: ShapeKind) -> AppResult<()> {
        self.inner.lock().unwrap().tools.push(kind);
        Ok(())
    }

    fn on_shape_event(&mut self, listener: ShapeListener) {
        self.inner.lock().unwrap().listener = Some(listener);
    }

    fn set_style(&mut self, style: &StyleSettings) {
        self.inner.lock().unwrap().styles.push(style.clone());
    }

    fn destroy(&mut self) {
        let mut inner = self.inner.lock().unwrap();
        inner.listener = None;
        inner.destroyed += 1;
    }
}

pub fn square(id: u64, side: f64) -> Shape {
    Shape {
        id: ShapeId(id),
        kind: ShapeKind::Polygon,
        geometry: Geometry::Polygon {
            coordinates: vec![vec![
                [0.0, 0.0],
                [side, 0.0],
                [side, side],
                [0.0, side],
                [0.0, 0.0],
            ]],
        },
        radius: None,
    }
}

/// Flota determinista de `count` vehículos
pub fn fleet(count: usize) -> Vec<VehicleRecord> {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    (1..=count)
        .map(|i| VehicleRecord {
            id: format!("vehicle-{}", i),
            plate_number: format!("{}{}{} {:04}", letter(i), letter(i * 7), letter(i * 13), (i * 37) % 10_000),
            speed: ((i * 53) % 120) as u32,
            location: format!("{} St, Springfield", ["Main", "Oak", "Maple", "Lincoln"][i % 4]),
            region: KNOWN_REGIONS[i % KNOWN_REGIONS.len()].to_string(),
            last_update: base - Duration::seconds((i * 97) as i64),
            status: match i % 10 {
                0 => VehicleStatus::Alarm,
                1 => VehicleStatus::Warning,
                2 | 3 => VehicleStatus::Idle,
                _ => VehicleStatus::Active,
            },
        })
        .collect()
}

fn letter(i: usize) -> char {
    const LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
    LETTERS[i % LETTERS.len()] as char
}

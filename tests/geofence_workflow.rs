mod common;

use common::{square, FakeMap};
use fleet_dashboard::models::geojson::Geometry;
use fleet_dashboard::models::shape::{Shape, ShapeId, ShapeKind};
use fleet_dashboard::models::{AlertType, StyleSettings};
use fleet_dashboard::services::{
    AreaScope, AreaUnit, GeofenceEditor, MapState, ShapeEvent, SubmissionOutcome, Viewport,
};
use fleet_dashboard::{AppError, DashboardConfig};

fn raw_config() -> DashboardConfig {
    DashboardConfig {
        area_unit: AreaUnit::Raw,
        area_scope: AreaScope::LastTouched,
        ..DashboardConfig::default()
    }
}

fn mounted(viewport: Viewport) -> (GeofenceEditor<FakeMap>, FakeMap) {
    let map = FakeMap::default();
    let mut editor = GeofenceEditor::new(&raw_config(), viewport);
    let service = map.clone();
    editor.mount(move || Ok(service)).unwrap();
    (editor, map)
}

#[test]
fn test_draw_edit_delete_cycle() {
    let (mut editor, map) = mounted(Viewport::Wide);

    map.emit(ShapeEvent::Created(square(1, 2.0)));
    assert_eq!(editor.pump(), 1);
    assert_eq!(editor.draft().geometry.as_ref().map(|g| g.len()), Some(1));
    assert_eq!(editor.area(), Some(4.0));

    map.emit(ShapeEvent::Edited(vec![square(1, 3.0)]));
    editor.pump();
    assert_eq!(editor.area(), Some(9.0));

    map.emit(ShapeEvent::Deleted(vec![ShapeId(1)]));
    editor.pump();
    assert_eq!(editor.draft().geometry, None);
    assert_eq!(editor.area(), None);
}

#[test]
fn test_pointer_is_rounded_and_stored_lat_first() {
    let (mut editor, map) = mounted(Viewport::Wide);

    map.emit(ShapeEvent::PointerMoved {
        lng: -74.50000049,
        lat: 40.1234567,
    });
    editor.pump();

    assert_eq!(editor.pointer(), Some((40.123457, -74.5)));
}

#[test]
fn test_full_submission_on_compact_viewport() {
    let (mut editor, map) = mounted(Viewport::Compact);
    assert!(!editor.panel_open());
    assert!(editor.toggle_panel());

    // Primer intento: todo vacío
    match editor.submit() {
        SubmissionOutcome::Rejected(errors) => assert_eq!(errors.len(), 3),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(editor.errors().len(), 3);

    editor.set_name("ORG-Warehouse-NYC01");
    editor.set_alert_type(AlertType::Entry);
    editor.toggle_category("Warehouse");

    match editor.submit() {
        SubmissionOutcome::Rejected(errors) => {
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["geojson"]);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(editor.panel_open());

    map.emit(ShapeEvent::Created(square(1, 1.0)));
    editor.pump();

    let outcome = editor.submit();
    assert!(outcome.is_accepted());
    assert!(editor.errors().is_empty());
    assert!(!editor.panel_open());
}

#[test]
fn test_style_updates_are_validated_and_propagated() {
    let (mut editor, map) = mounted(Viewport::Wide);
    map.emit(ShapeEvent::Created(square(1, 1.0)));
    editor.pump();

    let invalid = StyleSettings {
        stroke_width: 11,
        ..StyleSettings::default()
    };
    assert!(matches!(editor.update_style(invalid), Err(AppError::Validation(_))));

    let orange = StyleSettings {
        fill_color: "#ff8800".to_string(),
        fill_opacity: 0.6,
        ..StyleSettings::default()
    };
    editor.update_style(orange.clone()).unwrap();

    assert_eq!(editor.draft().style_settings, orange);
    assert_eq!(editor.geometry().style_of(ShapeId(1)), Some(&orange));

    // Estilo inicial al montar + actualización válida
    let styles = map.inner.lock().unwrap().styles.clone();
    assert_eq!(styles, vec![StyleSettings::default(), orange]);
}

#[test]
fn test_created_shape_gets_current_style() {
    let (mut editor, map) = mounted(Viewport::Wide);
    let thick = StyleSettings {
        stroke_width: 8,
        ..StyleSettings::default()
    };
    editor.update_style(thick.clone()).unwrap();

    map.emit(ShapeEvent::Created(Shape {
        id: ShapeId(5),
        kind: ShapeKind::Marker,
        geometry: Geometry::Point { coordinates: [1.0, 1.0] },
        radius: None,
    }));
    editor.pump();

    assert_eq!(editor.geometry().style_of(ShapeId(5)), Some(&thick));
    // Un marcador no tiene área
    assert_eq!(editor.area(), None);
}

#[test]
fn test_map_failure_falls_back_until_manual_reload() {
    let mut editor: GeofenceEditor<FakeMap> = GeofenceEditor::new(&raw_config(), Viewport::Wide);

    let result = editor.mount(|| Err(AppError::MapUnavailable("draw plugin missing".to_string())));
    assert!(result.is_err());

    let fallback = editor.fallback().expect("fallback view");
    assert_eq!(fallback.error, "Map Loading Failed");
    assert!(matches!(
        editor.start_drawing(ShapeKind::Polygon),
        Err(AppError::MapUnavailable(_))
    ));

    let map = FakeMap::default();
    let service = map.clone();
    editor.reload(move || Ok(service)).unwrap();
    assert!(matches!(editor.map_state(), MapState::Ready { .. }));

    editor.start_drawing(ShapeKind::Rectangle).unwrap();
    assert_eq!(map.inner.lock().unwrap().tools, vec![ShapeKind::Rectangle]);
}

#[test]
fn test_map_is_destroyed_exactly_once() {
    let (mut editor, map) = mounted(Viewport::Wide);
    assert_eq!(map.destroyed(), 0);

    editor.unmount();
    assert_eq!(map.destroyed(), 1);

    editor.unmount();
    drop(editor);
    assert_eq!(map.destroyed(), 1);

    let (editor, second) = mounted(Viewport::Wide);
    drop(editor);
    assert_eq!(second.destroyed(), 1);
}

#[test]
fn test_events_after_unmount_are_not_applied() {
    let (mut editor, map) = mounted(Viewport::Wide);
    let listener_alive = map.inner.lock().unwrap().listener.is_some();
    assert!(listener_alive);

    editor.unmount();
    assert!(map.inner.lock().unwrap().listener.is_none());
    assert_eq!(editor.pump(), 0);
}

#[test]
fn test_all_shapes_scope_in_square_kilometers() {
    let config = DashboardConfig {
        area_scope: AreaScope::AllShapes,
        ..DashboardConfig::default()
    };
    let map = FakeMap::default();
    let mut editor = GeofenceEditor::new(&config, Viewport::Wide);
    let service = map.clone();
    editor.mount(move || Ok(service)).unwrap();

    map.emit(ShapeEvent::Created(square(1, 1.0)));
    map.emit(ShapeEvent::Created(square(2, 1.0)));
    assert_eq!(editor.pump(), 2);

    let area = editor.area().unwrap();
    assert!((area - 2.0 * 111.32 * 111.32).abs() < 1e-6);
    assert_eq!(editor.area_unit(), AreaUnit::SquareKilometers);
}

#[test]
fn test_reload_starts_with_empty_geometry() {
    let (mut editor, map) = mounted(Viewport::Wide);
    map.emit(ShapeEvent::Created(square(1, 2.0)));
    editor.pump();
    assert!(editor.draft().geometry.is_some());

    let fresh = FakeMap::default();
    let service = fresh.clone();
    editor.reload(move || Ok(service)).unwrap();

    assert_eq!(map.destroyed(), 1);
    assert!(editor.geometry().is_empty());
    assert_eq!(editor.draft().geometry, None);
    assert_eq!(editor.area(), None);

    // El widget nuevo sigue alimentando el borrador
    fresh.emit(ShapeEvent::Created(square(2, 1.0)));
    assert_eq!(editor.pump(), 1);
    assert_eq!(editor.draft().geometry.as_ref().map(|g| g.len()), Some(1));
    assert_eq!(editor.area(), Some(1.0));
}

//! Filtro, orden y paginación de vehículos
//!
//! Pipeline puro: `filter_vehicles` → `sort_vehicles` → `paginate`.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::vehicle::{FilterCriteria, SortDirection, SortField, SortSpec, VehicleRecord};

/// Registros que cumplen estado Y región Y búsqueda
pub fn filter_vehicles(records: &[VehicleRecord], criteria: &FilterCriteria) -> Vec<VehicleRecord> {
    let search = criteria.search.to_lowercase();

    records
        .iter()
        .filter(|record| criteria.status.accepts(record.status))
        .filter(|record| criteria.region.accepts(&record.region))
        .filter(|record| {
            search.is_empty()
                || record.plate_number.to_lowercase().contains(&search)
                || record.location.to_lowercase().contains(&search)
        })
        .cloned()
        .collect()
}

/// Valor de una columna para comparar
#[derive(Debug, Clone, Copy, PartialEq)]
enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
    Instant(DateTime<Utc>),
}

fn sort_value(record: &VehicleRecord, field: SortField) -> SortValue<'_> {
    match field {
        SortField::Id => SortValue::Text(&record.id),
        SortField::PlateNumber => SortValue::Text(&record.plate_number),
        SortField::Speed => SortValue::Number(record.speed as f64),
        SortField::Location => SortValue::Text(&record.location),
        SortField::Region => SortValue::Text(&record.region),
        SortField::LastUpdate => SortValue::Instant(record.last_update),
        SortField::Status => SortValue::Text(record.status.as_str()),
    }
}

fn compare_values(a: SortValue<'_>, b: SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Number(a), SortValue::Number(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (SortValue::Text(a), SortValue::Text(b)) => locale_compare(a, b),
        (SortValue::Instant(a), SortValue::Instant(b)) => a.cmp(&b),
        // Tipos distintos: sin orden definido
        _ => Ordering::Equal,
    }
}

/// Letras base en minúscula, sin marcas diacríticas (NFD)
fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Comparación de texto aproximando la colación de la UI: primero letras
/// base sin acentos ni mayúsculas, luego sin acento antes que con acento,
/// y por último minúsculas antes que mayúsculas.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    folded(a)
        .cmp(folded(b))
        .then_with(|| {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                })
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        })
}

/// Orden estable por la columna elegida
pub fn sort_vehicles(records: &mut [VehicleRecord], spec: SortSpec) {
    records.sort_by(|a, b| {
        let ordering = compare_values(sort_value(a, spec.field), sort_value(b, spec.field));
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Número de páginas para `len` elementos (0 si no hay elementos)
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    (len + page_size - 1) / page_size
}

/// Página de resultados (1-based)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T: Serialize> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<'a, T: Serialize> Page<'a, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Cortar la página `page` (1-based). Fuera de rango devuelve una página vacía.
pub fn paginate<T: Serialize>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        items: &items[start..end],
        page,
        total_pages: total_pages(items.len(), page_size),
        total_items: items.len(),
    }
}

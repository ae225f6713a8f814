//! Estado de la tabla de vehículos
//!
//! Guarda registros, filtros, orden y página actual, y re-deriva la lista
//! visible cada vez que cambia cualquiera de ellos. Todo cambio de filtro,
//! de orden o de registros vuelve a la página 1.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::models::fleet_stats::FleetStats;
use crate::models::vehicle::{
    FilterCriteria, RegionFilter, SortField, SortSpec, StatusFilter, VehicleRecord,
};
use crate::services::vehicle_query::{filter_vehicles, paginate, sort_vehicles, total_pages, Page};

#[derive(Debug, Clone)]
pub struct VehicleTable {
    records: Vec<VehicleRecord>,
    criteria: FilterCriteria,
    sort: SortSpec,
    page: usize,
    page_size: usize,
    visible: Vec<VehicleRecord>,
}

impl VehicleTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            page: 1,
            page_size: page_size.max(1),
            visible: Vec::new(),
        }
    }

    /// Reemplazar el conjunto completo de registros
    pub fn replace_records(&mut self, records: Vec<VehicleRecord>) {
        self.records = records;
        self.rederive();
    }

    pub fn set_filters(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.rederive();
    }

    pub fn reset_filters(&mut self) {
        self.set_filters(FilterCriteria::default());
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.criteria.status = status;
        self.rederive();
    }

    pub fn set_region_filter(&mut self, region: RegionFilter) {
        self.criteria.region = region;
        self.rederive();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.rederive();
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.rederive();
    }

    /// Mismo campo invierte la dirección; campo nuevo empieza ascendente
    pub fn toggle_sort(&mut self, field: SortField) {
        let sort = if field == self.sort.field {
            SortSpec {
                field,
                direction: self.sort.direction.toggled(),
            }
        } else {
            SortSpec {
                field,
                ..SortSpec::default()
            }
        };
        self.set_sort(sort);
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible.len(), self.page_size)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Devuelve `false` (sin cambios) si el control está deshabilitado
    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Ir a una página concreta; fuera de rango se ignora
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn page(&self) -> Page<'_, VehicleRecord> {
        paginate(&self.visible, self.page, self.page_size)
    }

    pub fn page_rows(&self) -> &[VehicleRecord] {
        self.page().items
    }

    /// Lista completa filtrada y ordenada
    pub fn visible(&self) -> &[VehicleRecord] {
        &self.visible
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn stats(&self) -> FleetStats {
        FleetStats::from_records(&self.records)
    }

    /// Registros (sin filtrar) sin actualización dentro de `threshold`
    pub fn stale(&self, now: DateTime<Utc>, threshold: Duration) -> Vec<VehicleRecord> {
        self.records
            .iter()
            .filter(|record| record.is_stale(now, threshold))
            .cloned()
            .collect()
    }

    /// Regiones presentes en los registros, ordenadas
    pub fn regions(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.region.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn rederive(&mut self) {
        let mut visible = filter_vehicles(&self.records, &self.criteria);
        sort_vehicles(&mut visible, self.sort);
        self.visible = visible;
        self.page = 1;
        debug!(
            "📋 Tabla re-derivada: {}/{} visibles, {} páginas",
            self.visible.len(),
            self.records.len(),
            self.total_pages()
        );
    }
}

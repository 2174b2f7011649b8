//! Índice de matrículas
//!
//! Propietario de todas las estancias. Cada matrícula apunta a la lista de
//! sus estancias en orden de entrada; los parques solo guardan `StayId`.

use std::collections::HashMap;

use crate::models::lot::LotId;
use crate::models::stay::{StayId, StayRecord};

#[derive(Debug, Default)]
pub struct PlateRepository {
    records: HashMap<StayId, StayRecord>,
    by_plate: HashMap<String, Vec<StayId>>,
    next_stay_id: u64,
}

impl PlateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reservar el identificador de la próxima estancia
    pub fn allocate_id(&mut self) -> StayId {
        self.next_stay_id += 1;
        StayId(self.next_stay_id)
    }

    /// Estancias de la matrícula en orden de entrada (vacío si no hay)
    pub fn lookup(&self, plate: &str) -> Vec<&StayRecord> {
        self.by_plate
            .get(plate)
            .map(|ids| ids.iter().filter_map(|id| self.records.get(id)).collect())
            .unwrap_or_default()
    }

    /// Última estancia de la matrícula
    pub fn most_recent(&self, plate: &str) -> Option<&StayRecord> {
        self.by_plate
            .get(plate)
            .and_then(|ids| ids.last())
            .and_then(|id| self.records.get(id))
    }

    /// Estancia abierta de la matrícula, si existe
    pub fn current_stay(&self, plate: &str) -> Option<&StayRecord> {
        self.most_recent(plate).filter(|record| record.is_open())
    }

    pub fn get(&self, id: StayId) -> Option<&StayRecord> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: StayId) -> Option<&mut StayRecord> {
        self.records.get_mut(&id)
    }

    pub fn insert(&mut self, record: StayRecord) {
        self.by_plate
            .entry(record.plate.clone())
            .or_default()
            .push(record.id);
        self.records.insert(record.id, record);
    }

    /// Borrar todas las estancias de un parque; devuelve cuántas se borraron
    pub fn remove_all_for_lot(&mut self, lot_id: LotId) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| record.lot_id != lot_id);

        let records = &self.records;
        self.by_plate.retain(|_, ids| {
            ids.retain(|id| records.contains_key(id));
            !ids.is_empty()
        });

        before - self.records.len()
    }

    /// Número de matrículas con al menos una estancia
    pub fn plate_count(&self) -> usize {
        self.by_plate.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

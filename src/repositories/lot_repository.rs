use crate::models::lot::{Lot, LotId};
use crate::utils::errors::{AppError, AppResult};

/// Número máximo de parques por defecto
pub const DEFAULT_MAX_LOTS: usize = 20;

/// Registro de parques en orden de creación
#[derive(Debug)]
pub struct LotRepository {
    lots: Vec<Lot>,
    max_lots: usize,
}

impl Default for LotRepository {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOTS)
    }
}

impl LotRepository {
    pub fn new(max_lots: usize) -> Self {
        Self {
            lots: Vec::new(),
            max_lots,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn is_at_limit(&self) -> bool {
        self.lots.len() >= self.max_lots
    }

    pub fn find(&self, name: &str) -> Option<&Lot> {
        self.lots.iter().find(|lot| lot.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Lot> {
        self.lots.iter_mut().find(|lot| lot.name == name)
    }

    pub fn find_by_id(&self, id: LotId) -> Option<&Lot> {
        self.lots.iter().find(|lot| lot.id == id)
    }

    pub fn insert(&mut self, lot: Lot) -> AppResult<&Lot> {
        if self.contains(&lot.name) {
            return Err(AppError::DuplicateLot(lot.name));
        }
        if self.is_at_limit() {
            return Err(AppError::RegistryFull);
        }
        self.lots.push(lot);
        self.lots
            .last()
            .ok_or_else(|| AppError::Internal("lot registry is empty after insert".to_string()))
    }

    /// Quitar el parque del registro; las estancias se borran aparte
    pub fn remove(&mut self, name: &str) -> AppResult<Lot> {
        let position = self
            .lots
            .iter()
            .position(|lot| lot.name == name)
            .ok_or_else(|| AppError::LotNotFound(name.to_string()))?;
        Ok(self.lots.remove(position))
    }

    /// Parques en orden de creación
    pub fn list_by_insertion(&self) -> &[Lot] {
        &self.lots
    }

    /// Parques ordenados por nombre (orden estable)
    pub fn list_sorted(&self) -> Vec<&Lot> {
        let mut sorted: Vec<&Lot> = self.lots.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }
}

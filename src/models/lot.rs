//! Modelo de Lot (parque de estacionamiento)
//!
//! Un parque tiene capacidad fija, tres tarifas y su propio historial de
//! estancias cerradas, que son referencias no propietarias al índice de
//! matrículas.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::stay::StayId;

/// Identificador numérico asignado al crear el parque
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LotId(pub u32);

/// Tarifas del parque
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceTiers {
    /// Precio por bloque de 15 minutos durante la primera hora
    pub tier1: Decimal,
    /// Precio por bloque de 15 minutos después de la primera hora
    pub tier2: Decimal,
    /// Máximo cobrable por cada periodo de 24 horas
    pub daily_cap: Decimal,
}

#[derive(Debug, Clone)]
pub struct Lot {
    pub id: LotId,
    pub name: String,
    pub capacity: u32,
    pub occupancy: u32,
    pub tiers: PriceTiers,
    /// Estancias cerradas en orden de salida
    pub history: Vec<StayId>,
}

impl Lot {
    pub fn new(id: LotId, name: String, capacity: u32, tiers: PriceTiers) -> Self {
        Self {
            id,
            name,
            capacity,
            occupancy: 0,
            tiers,
            history: Vec::new(),
        }
    }

    pub fn free_spaces(&self) -> u32 {
        self.capacity - self.occupancy
    }

    pub fn is_full(&self) -> bool {
        self.occupancy >= self.capacity
    }
}

//! Modelo de estancia de vehículo
//!
//! Una estancia se crea en la entrada y se modifica una única vez, en la
//! salida, para fijar la hora de salida y el importe cobrado.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::lot::LotId;
use crate::utils::calendar::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StayId(pub u64);

/// Estado de la estancia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StayStatus {
    Parked,
    Completed,
}

#[derive(Debug, Clone)]
pub struct StayRecord {
    pub id: StayId,
    pub plate: String,
    pub lot_id: LotId,
    pub entry: Timestamp,
    /// `None` mientras el vehículo sigue estacionado
    pub exit: Option<Timestamp>,
    pub paid: Decimal,
}

impl StayRecord {
    pub fn open(id: StayId, plate: String, lot_id: LotId, entry: Timestamp) -> Self {
        Self {
            id,
            plate,
            lot_id,
            entry,
            exit: None,
            paid: Decimal::ZERO,
        }
    }

    pub fn is_open(&self) -> bool {
        self.exit.is_none()
    }

    pub fn status(&self) -> StayStatus {
        if self.is_open() {
            StayStatus::Parked
        } else {
            StayStatus::Completed
        }
    }

    /// Cerrar la estancia; solo se llama una vez
    pub fn close(&mut self, exit: Timestamp, paid: Decimal) {
        self.exit = Some(exit);
        self.paid = paid;
    }
}

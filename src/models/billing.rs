//! Modelos de facturación
//!
//! Vistas derivadas del historial de un parque: totales por día de salida
//! y cobros individuales de un día concreto.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::calendar::{DayOrdinal, MinuteOfDay};

/// Total cobrado en un día de salida
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub day: DayOrdinal,
    pub amount: Decimal,
}

/// Cobro de una estancia cerrada en un día concreto
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCharge {
    pub plate: String,
    pub exit_minute: MinuteOfDay,
    pub amount: Decimal,
}

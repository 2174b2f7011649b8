//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos en memoria: parques,
//! estancias de vehículos y totales de facturación.

pub mod billing;
pub mod lot;
pub mod stay;

pub use billing::{DailyTotal, DayCharge};
pub use lot::{Lot, LotId, PriceTiers};
pub use stay::{StayId, StayRecord, StayStatus};

use rust_decimal::Decimal;
use serde::Serialize;
use validator::Validate;

use crate::models::stay::{StayRecord, StayStatus};
use crate::utils::calendar::Timestamp;
use crate::utils::validation::validate_license_plate;

// Request de entrada o salida de un vehículo
#[derive(Debug, Clone, Validate)]
pub struct VehicleMovementRequest {
    pub lot_name: String,

    #[validate(custom = "validate_license_plate")]
    pub plate: String,

    pub date: String,
    pub time: String,
}

// Response de entrada: plazas libres tras entrar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryResponse {
    pub lot_name: String,
    pub free_spaces: u32,
}

// Response de salida con el importe cobrado
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExitResponse {
    pub plate: String,
    pub entry: Timestamp,
    pub exit: Timestamp,
    pub paid: Decimal,
}

// Estancia de una matrícula con el nombre de su parque
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateStayResponse {
    pub lot_name: String,
    pub status: StayStatus,
    pub entry: Timestamp,
    pub exit: Option<Timestamp>,
}

impl PlateStayResponse {
    pub fn from_record(record: &StayRecord, lot_name: String) -> Self {
        Self {
            lot_name,
            status: record.status(),
            entry: record.entry,
            exit: record.exit,
        }
    }
}

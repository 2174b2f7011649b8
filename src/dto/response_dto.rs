//! Respuestas de comandos
//!
//! Resultado estructurado de cada comando y su representación en texto
//! (una línea por elemento) o en JSON.

use serde::Serialize;

use crate::dto::lot_dto::LotSummary;
use crate::dto::stay_dto::{EntryResponse, ExitResponse, PlateStayResponse};
use crate::models::billing::{DailyTotal, DayCharge};
use crate::utils::calendar::{format_date, format_time};
use crate::utils::errors::{AppError, ErrorResponse};

/// Resultado de un comando aceptado
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "items", rename_all = "snake_case")]
pub enum CommandOutput {
    LotCreated,
    Lots(Vec<LotSummary>),
    Entry(EntryResponse),
    Exit(ExitResponse),
    PlateHistory(Vec<PlateStayResponse>),
    DailyTotals(Vec<DailyTotal>),
    DayCharges(Vec<DayCharge>),
    RemainingLots(Vec<String>),
}

impl CommandOutput {
    /// Líneas de texto en el formato clásico de salida
    pub fn render_lines(&self) -> Vec<String> {
        match self {
            CommandOutput::LotCreated => Vec::new(),
            CommandOutput::Lots(lots) => lots
                .iter()
                .map(|lot| format!("{} {} {}", lot.name, lot.capacity, lot.free_spaces))
                .collect(),
            CommandOutput::Entry(entry) => vec![format!("{} {}", entry.lot_name, entry.free_spaces)],
            CommandOutput::Exit(exit) => vec![format!(
                "{} {} {} {} {} {:.2}",
                exit.plate,
                format_date(exit.entry.day),
                format_time(exit.entry.minute),
                format_date(exit.exit.day),
                format_time(exit.exit.minute),
                exit.paid
            )],
            CommandOutput::PlateHistory(stays) => stays
                .iter()
                .map(|stay| {
                    let entry = format!(
                        "{} {} {}",
                        stay.lot_name,
                        format_date(stay.entry.day),
                        format_time(stay.entry.minute)
                    );
                    match stay.exit {
                        Some(exit) => format!("{} {} {}", entry, format_date(exit.day), format_time(exit.minute)),
                        None => entry,
                    }
                })
                .collect(),
            CommandOutput::DailyTotals(totals) => totals
                .iter()
                .map(|total| format!("{} {:.2}", format_date(total.day), total.amount))
                .collect(),
            CommandOutput::DayCharges(charges) => charges
                .iter()
                .map(|charge| format!("{} {} {:.2}", charge.plate, format_time(charge.exit_minute), charge.amount))
                .collect(),
            CommandOutput::RemainingLots(names) => names.clone(),
        }
    }
}

// Response genérica para la salida JSON
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: &AppError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_response()),
        }
    }
}

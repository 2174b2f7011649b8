//! Comandos de entrada
//!
//! Una línea por comando: el primer carácter elige la operación y el resto
//! son argumentos separados por espacios. Un argumento entre comillas
//! dobles puede contener espacios.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::dto::lot_dto::CreateLotRequest;
use crate::dto::stay_dto::VehicleMovementRequest;
use crate::utils::errors::{bad_request_error, AppResult};

pub const CM_QUIT: char = 'q';
pub const CM_LOTS: char = 'p';
pub const CM_ENTRY: char = 'e';
pub const CM_EXIT: char = 's';
pub const CM_PLATE_HISTORY: char = 'v';
pub const CM_BILLING: char = 'f';
pub const CM_REMOVE_LOT: char = 'r';

#[derive(Debug, Clone)]
pub enum Command {
    Quit,
    ListLots,
    CreateLot(CreateLotRequest),
    Entry(VehicleMovementRequest),
    Exit(VehicleMovementRequest),
    PlateHistory { plate: String },
    Billing { lot_name: String, date: Option<String> },
    RemoveLot { lot_name: String },
}

impl Command {
    /// Parsear una línea. `Ok(None)` para líneas vacías o comandos desconocidos.
    pub fn parse(line: &str) -> AppResult<Option<Command>> {
        let mut chars = line.chars();
        let command = match chars.next() {
            Some(c) if !c.is_whitespace() => c,
            _ => return Ok(None),
        };
        let args = tokenize(chars.as_str())?;

        let parsed = match (command, args.as_slice()) {
            (CM_QUIT, _) => Command::Quit,
            (CM_LOTS, []) => Command::ListLots,
            (CM_LOTS, [name, capacity, tier1, tier2, daily_cap]) => Command::CreateLot(CreateLotRequest {
                name: name.clone(),
                capacity: parse_number(capacity, "capacity")?,
                tier1: parse_price(tier1)?,
                tier2: parse_price(tier2)?,
                daily_cap: parse_price(daily_cap)?,
            }),
            (CM_ENTRY, [lot_name, plate, date, time]) => Command::Entry(movement(lot_name, plate, date, time)),
            (CM_EXIT, [lot_name, plate, date, time]) => Command::Exit(movement(lot_name, plate, date, time)),
            (CM_PLATE_HISTORY, [plate]) => Command::PlateHistory { plate: plate.clone() },
            (CM_BILLING, [lot_name]) => Command::Billing {
                lot_name: lot_name.clone(),
                date: None,
            },
            (CM_BILLING, [lot_name, date]) => Command::Billing {
                lot_name: lot_name.clone(),
                date: Some(date.clone()),
            },
            (CM_REMOVE_LOT, [lot_name]) => Command::RemoveLot {
                lot_name: lot_name.clone(),
            },
            (CM_LOTS | CM_ENTRY | CM_EXIT | CM_PLATE_HISTORY | CM_BILLING | CM_REMOVE_LOT, _) => {
                return Err(bad_request_error(&format!(
                    "wrong number of arguments for '{}': {}",
                    command,
                    args.len()
                )));
            }
            _ => {
                log::warn!("⚠️ Comando desconocido ignorado: '{}'", command);
                return Ok(None);
            }
        };

        Ok(Some(parsed))
    }
}

fn movement(lot_name: &str, plate: &str, date: &str, time: &str) -> VehicleMovementRequest {
    VehicleMovementRequest {
        lot_name: lot_name.to_string(),
        plate: plate.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    }
}

fn parse_number<T: FromStr>(value: &str, field: &str) -> AppResult<T> {
    value
        .parse::<T>()
        .map_err(|_| bad_request_error(&format!("{} is not a valid number: '{}'", field, value)))
}

fn parse_price(value: &str) -> AppResult<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| bad_request_error(&format!("price is not a valid decimal: '{}'", value)))
}

/// Separar argumentos por espacios respetando comillas dobles
pub fn tokenize(args: &str) -> AppResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = args.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut token = String::new();
        if c == '"' {
            chars.next();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '"' {
                    closed = true;
                    break;
                }
                token.push(c);
            }
            if !closed {
                return Err(bad_request_error("unterminated quoted argument"));
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
        }
        tokens.push(token);
    }

    Ok(tokens)
}

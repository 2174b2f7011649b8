//! Codec temporal
//!
//! Convierte fechas `dd-mm-aaaa` y horas `hh:mm` en enteros monótonos y
//! viceversa. El calendario es fijo: meses con la duración de un año no
//! bisiesto y 365 días por año, sin día 29 de febrero.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::utils::errors::{AppError, AppResult};

/// Ordinal de día: `año * 365 + días de los meses anteriores + día`
pub type DayOrdinal = u32;

/// Minutos transcurridos desde las 00:00
pub type MinuteOfDay = u32;

pub const MINUTES_PER_DAY: i64 = 24 * 60;
pub const DAYS_PER_YEAR: u32 = 365;

const DAYS_OF_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

lazy_static! {
    static ref DATE_PATTERN: Regex = Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{1,4})$").unwrap();
    static ref TIME_PATTERN: Regex = Regex::new(r"^(\d{1,2}):(\d{1,2})$").unwrap();
}

/// Instante del reloj simulado (día + minuto del día)
///
/// El orden derivado compara primero el día y después el minuto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Timestamp {
    pub day: DayOrdinal,
    pub minute: MinuteOfDay,
}

impl Timestamp {
    pub fn new(day: DayOrdinal, minute: MinuteOfDay) -> Self {
        Self { day, minute }
    }

    /// Parsear fecha y hora; cualquier fallo es `InvalidDate`
    pub fn parse(date: &str, time: &str) -> AppResult<Self> {
        Ok(Self {
            day: parse_date(date)?,
            minute: parse_time(time)?,
        })
    }

    /// Minutos entre `earlier` y `self` (negativo si `self` es anterior)
    pub fn minutes_since(&self, earlier: &Timestamp) -> i64 {
        (self.day as i64 - earlier.day as i64) * MINUTES_PER_DAY + self.minute as i64
            - earlier.minute as i64
    }
}

fn days_of_month(month: u32) -> u32 {
    DAYS_OF_MONTH[(month - 1) as usize]
}

fn days_before_month(month: u32) -> u32 {
    (1..month).map(days_of_month).sum()
}

/// Parsear una fecha `dd-mm-aaaa` al ordinal interno
pub fn parse_date(text: &str) -> AppResult<DayOrdinal> {
    let captures = DATE_PATTERN.captures(text.trim()).ok_or(AppError::InvalidDate)?;
    let field = |i: usize| -> AppResult<u32> {
        captures[i].parse::<u32>().map_err(|_| AppError::InvalidDate)
    };
    let (day, month, year) = (field(1)?, field(2)?, field(3)?);

    if !(1..=12).contains(&month) || day < 1 || day > days_of_month(month) {
        return Err(AppError::InvalidDate);
    }

    Ok(year * DAYS_PER_YEAR + days_before_month(month) + day)
}

/// Parsear una hora `hh:mm` a minutos del día
pub fn parse_time(text: &str) -> AppResult<MinuteOfDay> {
    let captures = TIME_PATTERN.captures(text.trim()).ok_or(AppError::InvalidDate)?;
    let hours: u32 = captures[1].parse().map_err(|_| AppError::InvalidDate)?;
    let minutes: u32 = captures[2].parse().map_err(|_| AppError::InvalidDate)?;

    if hours > 23 || minutes > 59 {
        return Err(AppError::InvalidDate);
    }

    Ok(hours * 60 + minutes)
}

/// Inverso exacto de `parse_date`
pub fn format_date(ordinal: DayOrdinal) -> String {
    // El día del año va de 1 a 365, así que el 31-12 no se desborda al año siguiente
    let year = ordinal.saturating_sub(1) / DAYS_PER_YEAR;
    let mut day = ordinal - year * DAYS_PER_YEAR;
    let mut month = 1;

    while month < 12 && day > days_of_month(month) {
        day -= days_of_month(month);
        month += 1;
    }

    format!("{:02}-{:02}-{:04}", day, month, year)
}

pub fn format_time(minute: MinuteOfDay) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// `true` si el candidato no es estrictamente posterior al reloj del sistema.
/// Sin reloj registrado nada está en el pasado.
pub fn is_before_or_equal(system: Option<Timestamp>, candidate: Timestamp) -> bool {
    match system {
        None => false,
        Some(current) => candidate <= current,
    }
}

//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y el codec temporal de fechas y horas.

pub mod calendar;
pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult};

//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas para la capa de presentación.
//! El texto de cada variante es exactamente la línea que se imprime.

use serde::Serialize;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}: no such parking.")]
    LotNotFound(String),

    #[error("{0}: parking is full.")]
    LotFull(String),

    #[error("{0}: invalid licence plate.")]
    InvalidPlate(String),

    #[error("{0}: invalid vehicle entry.")]
    AlreadyParked(String),

    #[error("{0}: invalid vehicle exit.")]
    NoOpenStay(String),

    #[error("invalid date.")]
    InvalidDate,

    #[error("{0}: parking already exists.")]
    DuplicateLot(String),

    #[error("{0}: invalid capacity.")]
    InvalidCapacity(i64),

    #[error("invalid cost.")]
    InvalidCost,

    #[error("too many parks.")]
    RegistryFull,

    #[error("{0}: no entries found in any parking.")]
    NoStaysFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Respuesta de error para la salida JSON
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl AppError {
    /// Código estable para consumidores de la salida JSON
    pub fn code(&self) -> &'static str {
        match self {
            AppError::LotNotFound(_) => "LOT_NOT_FOUND",
            AppError::LotFull(_) => "LOT_FULL",
            AppError::InvalidPlate(_) => "INVALID_PLATE",
            AppError::AlreadyParked(_) => "ALREADY_PARKED",
            AppError::NoOpenStay(_) => "NO_OPEN_STAY",
            AppError::InvalidDate => "INVALID_DATE",
            AppError::DuplicateLot(_) => "DUPLICATE_LOT",
            AppError::InvalidCapacity(_) => "INVALID_CAPACITY",
            AppError::InvalidCost => "INVALID_COST",
            AppError::RegistryFull => "REGISTRY_FULL",
            AppError::NoStaysFound(_) => "NO_STAYS_FOUND",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}

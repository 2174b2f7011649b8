//! Facturación de una flota de parques de estacionamiento
//!
//! Intérprete de comandos por líneas: registra parques con capacidad y
//! tarifas, entradas y salidas de vehículos por matrícula, y calcula la
//! facturación diaria de cada parque. Todo el estado vive en memoria.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;

pub use config::environment::{EnvironmentConfig, OutputFormat};
pub use controllers::{CommandController, LineOutcome};
pub use state::SystemState;
pub use utils::errors::{AppError, AppResult};

//! Controllers
//!
//! Despachador de comandos: parsea cada línea, invoca el servicio
//! correspondiente y entrega el resultado renderizado.

pub mod command_controller;

pub use command_controller::{CommandController, LineOutcome};

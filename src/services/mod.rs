//! Services module
//!
//! Este módulo contiene la lógica de negocio: alta y baja de parques,
//! ciclo de vida de las estancias, cálculo de tarifas y facturación.
//! Cada operación recibe el `SystemState` de forma explícita.

pub mod billing_service;
pub mod lot_service;
pub mod pricing_service;
pub mod stay_service;

//! Repositorios en memoria
//!
//! Registro de parques (orden de inserción) e índice de matrículas, que es
//! el propietario de todas las estancias.

pub mod lot_repository;
pub mod plate_repository;

pub use lot_repository::LotRepository;
pub use plate_repository::PlateRepository;

//! Servicio de parques
//!
//! Alta, baja (con borrado en cascada de estancias) y listados del
//! registro de parques.

use validator::Validate;

use crate::dto::lot_dto::{CreateLotRequest, LotSummary};
use crate::models::lot::Lot;
use crate::state::SystemState;
use crate::utils::errors::{AppError, AppResult};

/// Crear un parque
///
/// Orden de validación: nombre duplicado, capacidad, tarifas, límite de
/// parques. El identificador solo se consume si todo es válido.
pub fn create_lot(state: &mut SystemState, request: CreateLotRequest) -> AppResult<LotSummary> {
    if state.lots.contains(&request.name) {
        return Err(AppError::DuplicateLot(request.name));
    }

    if let Err(errors) = request.validate() {
        if errors.field_errors().contains_key("capacity") {
            return Err(AppError::InvalidCapacity(request.capacity.into()));
        }
        return Err(AppError::InvalidCost);
    }

    if state.lots.is_at_limit() {
        return Err(AppError::RegistryFull);
    }

    let capacity = u32::try_from(request.capacity)
        .map_err(|_| AppError::InvalidCapacity(request.capacity.into()))?;
    let tiers = request.tiers();
    let id = state.allocate_lot_id();
    let lot = state.lots.insert(Lot::new(id, request.name, capacity, tiers))?;

    log::info!("🅿️ Parque creado: '{}' (id {}, capacidad {})", lot.name, lot.id.0, lot.capacity);
    Ok(LotSummary::from(lot))
}

/// Eliminar un parque y todas sus estancias; devuelve los parques restantes
/// ordenados por nombre
pub fn remove_lot(state: &mut SystemState, name: &str) -> AppResult<Vec<String>> {
    let lot = state.lots.remove(name)?;
    let removed = state.plates.remove_all_for_lot(lot.id);

    log::info!(
        "🗑️ Parque eliminado: '{}' ({} estancias borradas, {} matrículas con historial)",
        lot.name,
        removed,
        state.plates.plate_count()
    );
    if state.lots.is_empty() {
        log::debug!("📭 No quedan parques registrados");
    }
    Ok(state
        .lots
        .list_sorted()
        .into_iter()
        .map(|lot| lot.name.clone())
        .collect())
}

/// Parques en orden de creación con sus plazas libres
pub fn list_lots(state: &SystemState) -> Vec<LotSummary> {
    state
        .lots
        .list_by_insertion()
        .iter()
        .map(LotSummary::from)
        .collect()
}

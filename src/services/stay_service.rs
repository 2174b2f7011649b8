//! Servicio de estancias
//!
//! Entrada y salida de vehículos. Todas las validaciones se hacen antes de
//! tocar el estado: o se aplican todos los efectos del comando (ocupación,
//! reloj, índice, historial del parque) o ninguno.

use validator::Validate;

use crate::dto::stay_dto::{EntryResponse, ExitResponse, PlateStayResponse, VehicleMovementRequest};
use crate::models::stay::StayRecord;
use crate::services::pricing_service;
use crate::state::SystemState;
use crate::utils::calendar::Timestamp;
use crate::utils::errors::{internal_error, AppError, AppResult};
use crate::utils::validation::validate_license_plate;

/// Validar fecha y hora del comando contra el reloj del sistema
fn movement_time(state: &SystemState, request: &VehicleMovementRequest) -> AppResult<Timestamp> {
    let at = Timestamp::parse(&request.date, &request.time)?;
    if state.is_in_past(at) {
        return Err(AppError::InvalidDate);
    }
    Ok(at)
}

/// Registrar la entrada de un vehículo
pub fn register_entry(state: &mut SystemState, request: VehicleMovementRequest) -> AppResult<EntryResponse> {
    let lot = state
        .lots
        .find(&request.lot_name)
        .ok_or_else(|| AppError::LotNotFound(request.lot_name.clone()))?;

    if lot.is_full() {
        return Err(AppError::LotFull(request.lot_name));
    }

    if request.validate().is_err() {
        return Err(AppError::InvalidPlate(request.plate));
    }

    if state.plates.current_stay(&request.plate).is_some() {
        return Err(AppError::AlreadyParked(request.plate));
    }

    let entry = movement_time(state, &request)?;
    let lot_id = lot.id;

    // Todo validado: aplicar efectos
    let lot = state
        .lots
        .find_mut(&request.lot_name)
        .ok_or_else(|| internal_error("lot vanished during entry"))?;
    lot.occupancy += 1;
    let response = EntryResponse {
        lot_name: lot.name.clone(),
        free_spaces: lot.free_spaces(),
    };

    state.advance_clock(entry);
    let id = state.plates.allocate_id();
    state
        .plates
        .insert(StayRecord::open(id, request.plate.clone(), lot_id, entry));

    log::info!("🚗 Entrada: {} en '{}' ({} plazas libres)", request.plate, response.lot_name, response.free_spaces);
    Ok(response)
}

/// Registrar la salida de un vehículo y cobrar la estancia
pub fn register_exit(state: &mut SystemState, request: VehicleMovementRequest) -> AppResult<ExitResponse> {
    let lot = state
        .lots
        .find(&request.lot_name)
        .ok_or_else(|| AppError::LotNotFound(request.lot_name.clone()))?;

    if request.validate().is_err() {
        return Err(AppError::InvalidPlate(request.plate));
    }

    let stay = match state.plates.current_stay(&request.plate) {
        Some(stay) if stay.lot_id == lot.id => stay,
        _ => return Err(AppError::NoOpenStay(request.plate)),
    };

    let exit = movement_time(state, &request)?;
    let stay_id = stay.id;
    let entry = stay.entry;
    let paid = pricing_service::price(&lot.tiers, entry, exit);

    // Todo validado: aplicar efectos
    let record = state
        .plates
        .get_mut(stay_id)
        .ok_or_else(|| internal_error("stay vanished during exit"))?;
    record.close(exit, paid);

    let lot = state
        .lots
        .find_mut(&request.lot_name)
        .ok_or_else(|| internal_error("lot vanished during exit"))?;
    lot.occupancy -= 1;
    lot.history.push(stay_id);

    state.advance_clock(exit);

    log::info!("🏁 Salida: {} de '{}' pagó {:.2}", request.plate, request.lot_name, paid);
    Ok(ExitResponse {
        plate: request.plate,
        entry,
        exit,
        paid,
    })
}

/// Todas las estancias de una matrícula, ordenadas (estable) por nombre de parque
pub fn history_for_plate(state: &SystemState, plate: &str) -> AppResult<Vec<PlateStayResponse>> {
    if validate_license_plate(plate).is_err() {
        return Err(AppError::InvalidPlate(plate.to_string()));
    }

    let mut stays: Vec<PlateStayResponse> = state
        .plates
        .lookup(plate)
        .into_iter()
        .filter_map(|record| {
            let lot = state.lots.find_by_id(record.lot_id);
            if lot.is_none() {
                log::warn!("⚠️ Estancia {:?} sin parque asociado", record.id);
            }
            lot.map(|lot| PlateStayResponse::from_record(record, lot.name.clone()))
        })
        .collect();

    if stays.is_empty() {
        return Err(AppError::NoStaysFound(plate.to_string()));
    }

    stays.sort_by(|a, b| a.lot_name.cmp(&b.lot_name));
    Ok(stays)
}

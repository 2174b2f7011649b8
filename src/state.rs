//! Estado del sistema
//!
//! Este módulo define el estado compartido que recibe cada operación de
//! forma explícita: registro de parques, índice de matrículas, reloj
//! simulado y contador de identificadores de parque.

use crate::models::lot::LotId;
use crate::repositories::{LotRepository, PlateRepository};
use crate::utils::calendar::{self, DayOrdinal, Timestamp};

#[derive(Debug)]
pub struct SystemState {
    pub lots: LotRepository,
    pub plates: PlateRepository,
    /// Fecha/hora del último comando de entrada o salida aceptado
    clock: Option<Timestamp>,
    next_lot_id: u32,
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new(crate::repositories::lot_repository::DEFAULT_MAX_LOTS)
    }
}

impl SystemState {
    pub fn new(max_lots: usize) -> Self {
        Self {
            lots: LotRepository::new(max_lots),
            plates: PlateRepository::new(),
            clock: None,
            next_lot_id: 1,
        }
    }

    pub fn clock(&self) -> Option<Timestamp> {
        self.clock
    }

    pub fn current_day(&self) -> Option<DayOrdinal> {
        self.clock.map(|now| now.day)
    }

    /// `true` si el instante no es estrictamente posterior al reloj
    pub fn is_in_past(&self, candidate: Timestamp) -> bool {
        calendar::is_before_or_equal(self.clock, candidate)
    }

    /// Avanzar el reloj; solo se llama tras validar el comando entero
    pub fn advance_clock(&mut self, now: Timestamp) {
        log::debug!("🕒 Reloj del sistema: {} {}", calendar::format_date(now.day), calendar::format_time(now.minute));
        self.clock = Some(now);
    }

    /// Asignar el siguiente identificador de parque (post-incremento)
    pub fn allocate_lot_id(&mut self) -> LotId {
        let id = LotId(self.next_lot_id);
        self.next_lot_id += 1;
        id
    }
}

//! DTOs
//!
//! Peticiones ya tokenizadas que consume el núcleo y respuestas que
//! entrega a la capa de presentación.

pub mod command_dto;
pub mod lot_dto;
pub mod response_dto;
pub mod stay_dto;

pub use command_dto::Command;
pub use lot_dto::{CreateLotRequest, LotSummary};
pub use response_dto::{ApiResponse, CommandOutput};
pub use stay_dto::{EntryResponse, ExitResponse, PlateStayResponse, VehicleMovementRequest};

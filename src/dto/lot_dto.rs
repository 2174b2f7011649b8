use rust_decimal::Decimal;
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::models::lot::{Lot, PriceTiers};
use crate::utils::validation::validate_tier_order;

// Request para crear un parque
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_price_tiers"))]
pub struct CreateLotRequest {
    pub name: String,

    #[validate(range(min = 1))]
    pub capacity: i32,

    pub tier1: Decimal,
    pub tier2: Decimal,
    pub daily_cap: Decimal,
}

impl CreateLotRequest {
    pub fn tiers(&self) -> PriceTiers {
        PriceTiers {
            tier1: self.tier1,
            tier2: self.tier2,
            daily_cap: self.daily_cap,
        }
    }
}

fn validate_price_tiers(request: &CreateLotRequest) -> Result<(), ValidationError> {
    validate_tier_order(request.tier1, request.tier2, request.daily_cap)
}

// Response de parque para el listado
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotSummary {
    pub name: String,
    pub capacity: u32,
    pub free_spaces: u32,
}

impl From<&Lot> for LotSummary {
    fn from(lot: &Lot) -> Self {
        Self {
            name: lot.name.clone(),
            capacity: lot.capacity,
            free_spaces: lot.free_spaces(),
        }
    }
}

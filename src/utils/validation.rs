//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de entrada (matrículas, capacidades, tarifas).

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    /// Tope de cualquier tarifa. Con años de cuatro cifras una estancia dura
    /// como mucho ~3.65e6 días, así que importes y totales diarios quedan muy
    /// por debajo de `Decimal::MAX`.
    pub static ref MAX_TIER_PRICE: Decimal = Decimal::from(1_000_000_000_000i64);
    static ref PLATE_PATTERN: Regex = Regex::new(r"^([A-Z]{2}|[0-9]{2})-([A-Z]{2}|[0-9]{2})-([A-Z]{2}|[0-9]{2})$").unwrap();
}

/// Validar formato de matrícula de vehículo
///
/// Formato `XX-XX-XX`: cada par son dos mayúsculas o dos dígitos, con al
/// menos un par de cada tipo.
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let valid = PLATE_PATTERN.captures(value).map_or(false, |captures| {
        let letter_pairs = (1..=3)
            .filter(|&i| captures[i].starts_with(|c: char| c.is_ascii_uppercase()))
            .count();
        letter_pairs >= 1 && letter_pairs <= 2
    });

    if !valid {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"XX-XX-XX".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar el orden de las tarifas: `0 < tier1 <= tier2 <= daily_cap <= MAX_TIER_PRICE`
pub fn validate_tier_order(
    tier1: Decimal,
    tier2: Decimal,
    daily_cap: Decimal,
) -> Result<(), ValidationError> {
    validate_positive(tier1)?;
    if tier2 < tier1 || daily_cap < tier2 || daily_cap > *MAX_TIER_PRICE {
        let mut error = ValidationError::new("price_tiers");
        error.add_param("tier1".into(), &tier1.to_string());
        error.add_param("tier2".into(), &tier2.to_string());
        error.add_param("daily_cap".into(), &daily_cap.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("AA-11-BB").is_ok());
        assert!(validate_license_plate("11-AA-22").is_ok());
        assert!(validate_license_plate("AB-12-34").is_ok());
        assert!(validate_license_plate("11-11-11").is_err());
        assert!(validate_license_plate("AA-AA-AA").is_err());
        assert!(validate_license_plate("aa-11-BB").is_err());
        assert!(validate_license_plate("A1-11-BB").is_err());
        assert!(validate_license_plate("AA-11-BB-").is_err());
        assert!(validate_license_plate("AA11BB").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }

    #[test]
    fn test_validate_tier_order() {
        let d = |v: i64| Decimal::new(v, 1);
        assert!(validate_tier_order(d(10), d(15), d(100)).is_ok());
        assert!(validate_tier_order(d(10), d(10), d(10)).is_ok());
        assert!(validate_tier_order(d(0), d(15), d(100)).is_err());
        assert!(validate_tier_order(d(20), d(15), d(100)).is_err());
        assert!(validate_tier_order(d(10), d(15), d(12)).is_err());
    }

    #[test]
    fn test_validate_tier_order_upper_bound() {
        assert!(validate_tier_order(Decimal::ONE, Decimal::ONE, *MAX_TIER_PRICE).is_ok());
        let huge: Decimal = "70000000000000000000000000000".parse().unwrap();
        assert!(validate_tier_order(huge, huge, huge).is_err());
        assert!(validate_tier_order(Decimal::ONE, Decimal::TWO, *MAX_TIER_PRICE + Decimal::ONE).is_err());
    }
}

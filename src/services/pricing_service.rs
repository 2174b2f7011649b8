//! Cálculo de tarifas
//!
//! Cada periodo completo de 24 horas cuesta el máximo diario. El resto se
//! cobra en bloques de 15 minutos (redondeando hacia arriba): los cuatro
//! primeros a `tier1`, los siguientes a `tier2`, con el máximo diario como
//! tope del resto.

use rust_decimal::Decimal;

use crate::models::lot::PriceTiers;
use crate::utils::calendar::{Timestamp, MINUTES_PER_DAY};

const BLOCK_MINUTES: i64 = 15;
const FIRST_HOUR_BLOCKS: i64 = 4;

/// Importe de una estancia entre `entry` y `exit`
pub fn price(tiers: &PriceTiers, entry: Timestamp, exit: Timestamp) -> Decimal {
    let total_minutes = exit.minutes_since(&entry).max(0);
    let days = total_minutes / MINUTES_PER_DAY;
    let remainder = total_minutes % MINUTES_PER_DAY;
    let blocks = (remainder + BLOCK_MINUTES - 1) / BLOCK_MINUTES;

    let partial = if blocks > FIRST_HOUR_BLOCKS {
        Decimal::from(FIRST_HOUR_BLOCKS) * tiers.tier1
            + Decimal::from(blocks - FIRST_HOUR_BLOCKS) * tiers.tier2
    } else {
        Decimal::from(blocks) * tiers.tier1
    };

    Decimal::from(days) * tiers.daily_cap + partial.min(tiers.daily_cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers(tier1: &str, tier2: &str, daily_cap: &str) -> PriceTiers {
        PriceTiers {
            tier1: tier1.parse().unwrap(),
            tier2: tier2.parse().unwrap(),
            daily_cap: daily_cap.parse().unwrap(),
        }
    }

    fn at(date: &str, time: &str) -> Timestamp {
        Timestamp::parse(date, time).unwrap()
    }

    #[test]
    fn test_partial_block_rounds_up() {
        let amount = price(&tiers("1.0", "1.5", "10.0"), at("01-01-2024", "10:00"), at("01-01-2024", "10:17"));
        assert_eq!(amount, Decimal::from(2));
    }

    #[test]
    fn test_second_tier_capped_by_daily_max() {
        let amount = price(&tiers("1.0", "1.5", "6.0"), at("01-01-2024", "10:00"), at("01-01-2024", "11:20"));
        assert_eq!(amount, Decimal::from(6));

        let uncapped = price(&tiers("1.0", "1.5", "10.0"), at("01-01-2024", "10:00"), at("01-01-2024", "11:20"));
        assert_eq!(uncapped, Decimal::from(7));
    }

    #[test]
    fn test_multi_day_stay() {
        let amount = price(&tiers("1.0", "1.5", "10.0"), at("01-01-2024", "23:00"), at("03-01-2024", "01:00"));
        // 2 días completos + 120 minutos (8 bloques = 10.0, sin superar el tope)
        assert_eq!(amount, Decimal::from(30));
    }

    #[test]
    fn test_exit_time_of_day_before_entry() {
        // 22 horas y 30 minutos: no llega a un día completo
        let amount = price(&tiers("0.25", "0.5", "20.0"), at("01-01-2024", "12:00"), at("02-01-2024", "10:30"));
        assert_eq!(amount, Decimal::from(20));
        let short = price(&tiers("0.25", "0.5", "20.0"), at("01-01-2024", "23:50"), at("02-01-2024", "00:10"));
        assert_eq!(short, Decimal::new(50, 2));
    }

    #[test]
    fn test_zero_duration_is_free() {
        let moment = at("01-01-2024", "10:00");
        assert_eq!(price(&tiers("1.0", "1.5", "10.0"), moment, moment), Decimal::ZERO);
    }

    #[test]
    fn test_largest_accepted_tiers_over_longest_stay() {
        let max = *crate::utils::validation::MAX_TIER_PRICE;
        let tiers = PriceTiers {
            tier1: max,
            tier2: max,
            daily_cap: max,
        };
        let amount = price(&tiers, at("01-01-0000", "00:00"), at("31-12-9999", "23:59"));
        assert!(amount > Decimal::ZERO);
        assert!(amount <= Decimal::from(10_000i64 * 365) * max);
    }

    #[test]
    fn test_exact_days_charge_daily_max_only() {
        let amount = price(&tiers("1.0", "1.5", "10.0"), at("01-01-2024", "08:00"), at("02-01-2024", "08:00"));
        assert_eq!(amount, Decimal::from(10));
    }

    #[test]
    fn test_price_is_bounded_by_daily_max_per_started_day() {
        let tiers = tiers("0.5", "2.0", "9.0");
        let entry = at("01-01-2024", "00:00");
        for minutes in [1u32, 59, 61, 600, 1439] {
            let exit = Timestamp::new(entry.day, minutes);
            let amount = price(&tiers, entry, exit);
            assert!(amount >= Decimal::ZERO);
            assert!(amount <= tiers.daily_cap);
        }
    }
}

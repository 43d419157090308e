//! Intake totals and per-hour rates.
//!
//! Pure aggregation over assignments for a single stage or the whole race.
//! No rounding is applied while accumulating; display rounding to one or
//! two decimals happens at render time and is never written back to state.

use std::collections::HashMap;

use super::nutrition::{Assignment, Product, Stage, Unit};

/// Summed intake over one scope (a stage or the whole race) together with
/// the per-hour rates for that scope's duration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// Grams of carbohydrate.
    pub carbs: f64,
    /// Grams of salt.
    pub salt: f64,
    /// Liters of fluid; only quantities of [`Unit::Liter`] products
    /// accumulate here.
    pub fluid: f64,
    pub carbs_per_hour: f64,
    pub salt_per_hour: f64,
    pub fluid_per_hour: f64,
}

/// Whole-race rollup: summed intake plus the total race duration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RaceTotals {
    pub intake: Totals,
    /// Sum of every stage's duration in minutes, transitions included.
    pub total_minutes: u32,
}

/// Computes intake totals and hourly rates for one stage.
///
/// Each assignment contributes `product.carbs * quantity` grams of
/// carbohydrate and `product.salt * quantity` grams of salt; the quantity
/// itself accumulates into fluid only when the product's unit is
/// [`Unit::Liter`]. An assignment whose product is no longer in the library
/// contributes nothing. The cascade in the reducer keeps that from
/// happening, but aggregation must stay well-defined on inconsistent data
/// mid-transition.
///
/// Rates are totals divided by `duration_minutes / 60`. A zero duration
/// yields rates of exactly zero, never NaN or infinity.
pub fn stage_totals(
    assignments: &[Assignment],
    products: &[Product],
    duration_minutes: u32,
) -> Totals {
    let mut carbs = 0.0;
    let mut salt = 0.0;
    let mut fluid = 0.0;

    for assignment in assignments {
        let Some(product) = products.iter().find(|p| p.id == assignment.product_id) else {
            continue;
        };
        carbs += product.carbs * assignment.quantity;
        salt += product.salt * assignment.quantity;
        if product.unit == Unit::Liter {
            fluid += assignment.quantity;
        }
    }

    with_rates(carbs, salt, fluid, duration_minutes)
}

/// Computes whole-race intake totals and hourly rates.
///
/// Every stage participates uniformly: transitions count toward the total
/// race duration and their assignments (if any) count toward the nutrient
/// totals. Rates use the summed duration with the same zero-duration guard
/// as [`stage_totals`].
pub fn race_totals(
    assignments: &HashMap<i64, Vec<Assignment>>,
    products: &[Product],
    stages: &[Stage],
) -> RaceTotals {
    let mut carbs = 0.0;
    let mut salt = 0.0;
    let mut fluid = 0.0;
    let mut total_minutes: u32 = 0;

    for stage in stages {
        let assigned = assignments
            .get(&stage.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let totals = stage_totals(assigned, products, stage.duration);
        carbs += totals.carbs;
        salt += totals.salt;
        fluid += totals.fluid;
        total_minutes = total_minutes.saturating_add(stage.duration);
    }

    RaceTotals {
        intake: with_rates(carbs, salt, fluid, total_minutes),
        total_minutes,
    }
}

fn with_rates(carbs: f64, salt: f64, fluid: f64, duration_minutes: u32) -> Totals {
    let hours = f64::from(duration_minutes) / 60.0;
    let rate = |total: f64| if duration_minutes == 0 { 0.0 } else { total / hours };

    Totals {
        carbs,
        salt,
        fluid,
        carbs_per_hour: rate(carbs),
        salt_per_hour: rate(salt),
        fluid_per_hour: rate(fluid),
    }
}

//! End-to-end plan scenarios: actions dispatched through the reducer and
//! totals computed from the resulting state, the way the UI drives both.

use musette::client::store::{reduce, PlanAction};
use musette::model::totals::{race_totals, stage_totals};

use super::race_state;

/// Tests a single liter product assigned over a one-hour stage.
///
/// Two units of a 50 g carb / 1 g salt liter product on the one-hour bike
/// leg give totals of 100 g carbs, 2 g salt, and 2 L fluid; over exactly
/// one hour each rate equals its total.
///
/// Expected: totals 100/2/2 and rates 100/2/2
#[test]
fn one_hour_stage_totals() {
    let state = reduce(
        race_state(),
        PlanAction::AssignProduct {
            stage_id: 3,
            product_id: 1,
            quantity: 2.0,
        },
    );

    let totals = stage_totals(state.assignments_for(3), &state.products, 60);

    assert_eq!(totals.carbs, 100.0);
    assert_eq!(totals.salt, 2.0);
    assert_eq!(totals.fluid, 2.0);
    assert_eq!(totals.carbs_per_hour, 100.0);
    assert_eq!(totals.salt_per_hour, 2.0);
    assert_eq!(totals.fluid_per_hour, 2.0);
}

/// Tests rate scaling on the half-hour swim stage.
///
/// One unit on a 30-minute stage totals 50 g carbs but doubles to a
/// 100 g/h rate.
///
/// Expected: total 50, rate 100
#[test]
fn half_hour_stage_doubles_rate() {
    let state = reduce(
        race_state(),
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 1,
            quantity: 1.0,
        },
    );

    let totals = stage_totals(state.assignments_for(1), &state.products, 30);

    assert_eq!(totals.carbs, 50.0);
    assert_eq!(totals.carbs_per_hour, 100.0);
}

/// Tests the whole-race rollup of an empty plan.
///
/// Stages Swim:30, T1:4, Bike:60, T2:2, Run:42 with nothing assigned sum
/// to 138 minutes and zero everywhere else.
///
/// Expected: totalMinutes 138, all totals and rates 0
#[test]
fn empty_race_rollup() {
    let state = race_state();

    let totals = race_totals(&state.assignments, &state.products, &state.stages);

    assert_eq!(totals.total_minutes, 138);
    assert_eq!(totals.intake.carbs, 0.0);
    assert_eq!(totals.intake.salt, 0.0);
    assert_eq!(totals.intake.fluid, 0.0);
    assert_eq!(totals.intake.carbs_per_hour, 0.0);
    assert_eq!(totals.intake.salt_per_hour, 0.0);
    assert_eq!(totals.intake.fluid_per_hour, 0.0);
}

/// Tests that repeated assignment upserts rather than duplicating.
///
/// Assigning product 1 to the swim stage twice leaves exactly one
/// assignment carrying the later quantity.
///
/// Expected: one assignment, quantity 5
#[test]
fn repeated_assignment_upserts() {
    let mut state = race_state();
    state = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 1,
            quantity: 3.0,
        },
    );
    state = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 1,
            quantity: 5.0,
        },
    );

    assert_eq!(state.assignments_for(1).len(), 1);
    assert_eq!(state.assignments_for(1)[0].quantity, 5.0);
}

/// Tests that a quantity update without an assignment changes nothing.
///
/// Expected: state unchanged
#[test]
fn quantity_update_without_assignment_is_noop() {
    let state = race_state();

    let next = reduce(
        state.clone(),
        PlanAction::UpdateProductQuantity {
            stage_id: 1,
            product_id: 1,
            quantity: 2.0,
        },
    );

    assert_eq!(next, state);
}

/// Tests the library-removal cascade through a whole plan.
///
/// A product assigned on several stages disappears from every one of them
/// when removed from the library, and the race totals drop to zero.
///
/// Expected: no stage references the product; race totals all 0
#[test]
fn library_removal_cascades_through_race() {
    let mut state = race_state();
    for stage_id in [1, 3, 5] {
        state = reduce(
            state,
            PlanAction::AssignProduct {
                stage_id,
                product_id: 1,
                quantity: 1.0,
            },
        );
    }

    state = reduce(state, PlanAction::RemoveProductFromLibrary(1));

    assert!(state
        .assignments
        .values()
        .flatten()
        .all(|a| a.product_id != 1));
    let totals = race_totals(&state.assignments, &state.products, &state.stages);
    assert_eq!(totals.intake.carbs, 0.0);
    assert_eq!(totals.intake.fluid, 0.0);
}

/// Tests that duration edits flow into the race rollup.
///
/// Shortening the bike leg through UpdateStage changes the total race
/// duration and therefore the average rates.
///
/// Expected: totalMinutes reflects the edit
#[test]
fn duration_edit_changes_rollup() {
    let mut state = race_state();
    let mut bike = state.stages[2].clone();
    bike.duration = 90;
    state = reduce(state, PlanAction::UpdateStage(bike));

    let totals = race_totals(&state.assignments, &state.products, &state.stages);

    assert_eq!(totals.total_minutes, 168);
}

//! Tests for the AssignProduct action.

use super::sample_state;
use crate::client::store::{reduce, PlanAction};

/// Tests appending a new assignment to a stage.
///
/// Expected: one assignment with the given quantity
#[test]
fn appends_new_assignment() {
    let state = sample_state();

    let next = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 2,
            quantity: 3.0,
        },
    );

    assert_eq!(next.assignments_for(1).len(), 1);
    assert_eq!(next.assignments_for(1)[0].product_id, 2);
    assert_eq!(next.assignments_for(1)[0].quantity, 3.0);
}

/// Tests the upsert discipline for repeated assignment.
///
/// Assigning the same (stage, product) twice must replace the quantity,
/// not grow the list.
///
/// Expected: exactly one assignment with the later quantity
#[test]
fn reassigning_replaces_quantity() {
    let mut state = sample_state();
    state = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 2,
            quantity: 3.0,
        },
    );

    let next = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 2,
            quantity: 5.0,
        },
    );

    assert_eq!(next.assignments_for(1).len(), 1);
    assert_eq!(next.assignments_for(1)[0].quantity, 5.0);
}

/// Tests that reassignment keeps the assignment's position in the list.
///
/// Expected: order of assignments unchanged after upsert
#[test]
fn reassigning_preserves_order() {
    let mut state = sample_state();
    state = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 1,
            quantity: 1.0,
        },
    );
    state = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 2,
            quantity: 2.0,
        },
    );

    let next = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 1,
            quantity: 4.0,
        },
    );

    let assigned = next.assignments_for(1);
    assert_eq!(assigned[0].product_id, 1);
    assert_eq!(assigned[0].quantity, 4.0);
    assert_eq!(assigned[1].product_id, 2);
}

/// Tests that a zero quantity stays listed as an assignment.
///
/// Zero means "assigned, shown, editable"; only RemoveProduct deletes the
/// row.
///
/// Expected: assignment present with quantity 0
#[test]
fn zero_quantity_stays_listed() {
    let state = sample_state();

    let next = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 1,
            quantity: 0.0,
        },
    );

    assert_eq!(next.assignments_for(1).len(), 1);
    assert_eq!(next.assignments_for(1)[0].quantity, 0.0);
}

/// Tests clamping of negative and non-finite quantities.
///
/// Expected: both stored as 0
#[test]
fn clamps_quantity() {
    let mut state = sample_state();
    state = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 1,
            quantity: -2.0,
        },
    );

    assert_eq!(state.assignments_for(1)[0].quantity, 0.0);

    let next = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 1,
            quantity: f64::NAN,
        },
    );

    assert_eq!(next.assignments_for(1)[0].quantity, 0.0);
}

/// Tests that assigning never mutates the stage list.
///
/// Expected: stages identical before and after
#[test]
fn leaves_stages_untouched() {
    let state = sample_state();
    let stages = state.stages.clone();

    let next = reduce(
        state,
        PlanAction::AssignProduct {
            stage_id: 1,
            product_id: 1,
            quantity: 1.0,
        },
    );

    assert_eq!(next.stages, stages);
}

//! Plan state transitions.
//!
//! Every change to the plan is expressed as a [`PlanAction`] and applied by
//! [`reduce`]. Actions are plain data; the reducer is the only interpreter.

use crate::model::nutrition::{Assignment, NutritionState, Product, Stage};

/// State-changing events dispatched by the plan components.
///
/// The enum is closed, so the reducer's match is checked for exhaustiveness
/// at compile time; there is no "unrecognized action" case to fall through.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanAction {
    /// Replace the entire product library.
    SetProducts(Vec<Product>),
    /// Append a product to the library. The caller supplies the id, taken
    /// from [`NutritionState::next_product_id`].
    AddProduct(Product),
    /// Merge changed fields into the library product with the same id.
    UpdateProduct(Product),
    /// Remove a product from the library and every assignment that
    /// references it, across all stages.
    RemoveProductFromLibrary(i64),
    /// Replace the entire stage list.
    SetStages(Vec<Stage>),
    /// Replace the stage with the same id; used to change durations.
    UpdateStage(Stage),
    /// Upsert an assignment for (stage, product) with the given quantity.
    AssignProduct {
        stage_id: i64,
        product_id: i64,
        quantity: f64,
    },
    /// Update the quantity of an existing assignment in place.
    UpdateProductQuantity {
        stage_id: i64,
        product_id: i64,
        quantity: f64,
    },
    /// Remove the assignment for (stage, product) from that stage.
    RemoveProduct { stage_id: i64, product_id: i64 },
}

/// Applies one action to the plan state and returns the next state.
///
/// Pure and total: actions naming an unknown product or stage id are silent
/// no-ops, every incoming numeric field is clamped to a finite value >= 0
/// (NaN, infinity, and negatives become 0), and nothing here panics.
///
/// Invariants maintained:
/// - at most one assignment exists per (stage, product) pair;
/// - no assignment references a product absent from the library;
/// - assignment actions never change the stage set.
pub fn reduce(mut state: NutritionState, action: PlanAction) -> NutritionState {
    match action {
        PlanAction::SetProducts(products) => {
            state.products = products;
        }
        PlanAction::AddProduct(mut product) => {
            product.carbs = clamp_non_negative(product.carbs);
            product.salt = clamp_non_negative(product.salt);
            state.next_product_id = state.next_product_id.max(product.id.saturating_add(1));
            state.products.push(product);
        }
        PlanAction::UpdateProduct(product) => {
            if let Some(existing) = state.products.iter_mut().find(|p| p.id == product.id) {
                existing.name = product.name;
                existing.carbs = clamp_non_negative(product.carbs);
                existing.salt = clamp_non_negative(product.salt);
                existing.unit = product.unit;
            }
        }
        PlanAction::RemoveProductFromLibrary(product_id) => {
            state.products.retain(|p| p.id != product_id);
            for assigned in state.assignments.values_mut() {
                assigned.retain(|a| a.product_id != product_id);
            }
        }
        PlanAction::SetStages(stages) => {
            state.stages = stages;
        }
        PlanAction::UpdateStage(stage) => {
            if let Some(existing) = state.stages.iter_mut().find(|s| s.id == stage.id) {
                *existing = stage;
            }
        }
        PlanAction::AssignProduct {
            stage_id,
            product_id,
            quantity,
        } => {
            let quantity = clamp_non_negative(quantity);
            let assigned = state.assignments.entry(stage_id).or_default();
            if let Some(existing) = assigned.iter_mut().find(|a| a.product_id == product_id) {
                existing.quantity = quantity;
            } else {
                assigned.push(Assignment {
                    product_id,
                    quantity,
                });
            }
        }
        PlanAction::UpdateProductQuantity {
            stage_id,
            product_id,
            quantity,
        } => {
            let quantity = clamp_non_negative(quantity);
            if let Some(existing) = state
                .assignments
                .get_mut(&stage_id)
                .and_then(|assigned| assigned.iter_mut().find(|a| a.product_id == product_id))
            {
                existing.quantity = quantity;
            }
        }
        PlanAction::RemoveProduct {
            stage_id,
            product_id,
        } => {
            if let Some(assigned) = state.assignments.get_mut(&stage_id) {
                assigned.retain(|a| a.product_id != product_id);
            }
        }
    }

    state
}

/// Clamps a user-entered numeric field to a finite value >= 0.
fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

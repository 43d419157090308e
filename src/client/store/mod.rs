//! Client-side plan store.
//!
//! One authoritative [`NutritionState`] lives in context as a signal.
//! Components read snapshots from it and submit [`PlanAction`]s through
//! [`dispatch`], which routes every mutation through the pure [`reduce`]
//! function and replaces the state wholesale.

use dioxus::prelude::*;
use dioxus_logger::tracing;

pub mod nutrition;


pub use nutrition::{reduce, PlanAction};

use crate::model::nutrition::NutritionState;

/// Installs the plan store into context, seeded with the default plan.
/// Called once from the root component.
pub fn use_plan_store() -> Signal<NutritionState> {
    use_context_provider(|| Signal::new(NutritionState::seed()))
}

/// Reads the shared plan store from context.
pub fn use_plan() -> Signal<NutritionState> {
    use_context::<Signal<NutritionState>>()
}

/// Applies one action to the shared plan state.
pub fn dispatch(state: &mut Signal<NutritionState>, action: PlanAction) {
    tracing::debug!("Dispatching {:?}", action);

    let next = state.with(|current| reduce(current.clone(), action));
    state.set(next);
}

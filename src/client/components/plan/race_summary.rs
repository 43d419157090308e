use dioxus::prelude::*;

use crate::client::store::use_plan;
use crate::model::totals::race_totals;

/// Whole-race rollup card: total duration, total intake, and average
/// per-hour rates across every stage, transitions included.
#[component]
pub fn RaceSummary() -> Element {
    let plan = use_plan();

    let state = plan.read();
    let totals = race_totals(&state.assignments, &state.products, &state.stages);
    drop(state);

    let hours = totals.total_minutes / 60;
    let minutes = totals.total_minutes % 60;
    let intake = totals.intake;

    rsx!(
        div { class: "card shadow-sm w-full bg-base-200",
            div { class: "card-body",
                h2 { class: "card-title",
                    "Race Summary"
                }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    div { class: "flex flex-col gap-2",
                        div { class: "font-medium", "Race Duration" }
                        div { class: "text-sm",
                            "{hours}h {minutes}m"
                        }
                    }
                    div { class: "flex flex-col gap-2",
                        div { class: "font-medium", "Per Hour (Average)" }
                        div { class: "text-sm flex flex-col gap-1",
                            div { "Carbs: {intake.carbs_per_hour:.1} g/h" }
                            div { "Salt: {intake.salt_per_hour:.1} g/h" }
                            div { "Fluid: {intake.fluid_per_hour:.1} L/h" }
                        }
                    }
                    div { class: "flex flex-col gap-2",
                        div { class: "font-medium", "Total Intake" }
                        div { class: "text-sm flex flex-col gap-1",
                            div { "Carbs: {intake.carbs:.1} g" }
                            div { "Salt: {intake.salt:.1} g" }
                            div { "Fluid: {intake.fluid:.1} L" }
                        }
                    }
                }
            }
        }
    )
}

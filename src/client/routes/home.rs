use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{
    plan::{ProductForm, ProductTable, RaceSummary, StageCard, StageDurations},
    Page,
};
use crate::client::store::use_plan;

#[component]
pub fn Home() -> Element {
    let plan = use_plan();
    let stages = plan.read().stages.clone();

    rsx!(
        Title { "Musette Race Planner" }
        Meta {
            name: "description",
            content: "Plan carbohydrate, salt, and fluid intake for every stage of a multi-stage endurance race."
        }
        Page { class: "flex flex-col items-center gap-6",
            h1 { class: "text-2xl font-bold",
                "Race Plan Builder"
            }
            StageDurations { }
            section { class: "w-full max-w-4xl flex flex-col gap-4",
                h2 { class: "text-xl font-semibold",
                    "Nutrition Products"
                }
                ProductForm { }
                ProductTable { }
            }
            div { class: "w-full max-w-4xl flex flex-col gap-6",
                for stage in stages {
                    StageCard { key: "{stage.id}", stage_id: stage.id }
                }
                RaceSummary { }
            }
        }
    )
}

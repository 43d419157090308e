use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::client::store::{dispatch, use_plan, PlanAction};
use crate::model::nutrition::{Assignment, Product, Stage};
use crate::model::time::{format_duration, parse_duration_input, refresh_duration_text};
use crate::model::totals::stage_totals;

/// One stage's intake plan: its duration field, the products assigned to
/// it, and the computed stage summary.
///
/// All stages render the same card, transitions included. Newly assigned
/// products start at quantity zero and stay listed as editable rows until
/// explicitly removed.
#[component]
pub fn StageCard(stage_id: i64) -> Element {
    let mut plan = use_plan();
    let mut time_input = use_signal(move || {
        let duration = plan
            .peek()
            .stages
            .iter()
            .find(|s| s.id == stage_id)
            .map(|s| s.duration)
            .unwrap_or(0);
        format_duration(duration)
    });
    let mut quantity_inputs = use_signal(HashMap::<i64, String>::new);

    // The same duration is editable from StageDurations; follow changes
    // committed there.
    let stored_duration = use_memo(move || {
        plan.read()
            .stages
            .iter()
            .find(|s| s.id == stage_id)
            .map(|s| s.duration)
            .unwrap_or(0)
    });
    use_effect(move || {
        let duration = stored_duration();
        let refreshed = refresh_duration_text(&time_input.peek(), duration);
        if let Some(text) = refreshed {
            time_input.set(text);
        }
    });

    let state = plan.read();
    let Some(stage) = state.stages.iter().find(|s| s.id == stage_id).cloned() else {
        return rsx! {};
    };
    let assignments = state.assignments_for(stage_id).to_vec();
    let products = state.products.clone();
    drop(state);

    let rows: Vec<(Assignment, Product)> = assignments
        .iter()
        .filter_map(|a| {
            products
                .iter()
                .find(|p| p.id == a.product_id)
                .map(|p| (*a, p.clone()))
        })
        .collect();

    let assigned_ids: Vec<i64> = assignments.iter().map(|a| a.product_id).collect();
    let available: Vec<Product> = products
        .iter()
        .filter(|p| !assigned_ids.contains(&p.id))
        .cloned()
        .collect();
    let has_available = !available.is_empty();

    let totals = stage_totals(&assignments, &products, stage.duration);

    rsx!(
        div { class: "card shadow-sm w-full",
            div { class: "card-body gap-4",
                h3 { class: "card-title",
                    "{stage.name}"
                }
                div { class: "flex items-center gap-2",
                    label { class: "text-base font-medium",
                        "Time:"
                    }
                    input {
                        class: "input input-bordered input-sm w-24",
                        placeholder: "h:mm or mm",
                        title: "Enter as h:mm or mm",
                        value: "{time_input}",
                        oninput: {
                            let stage = stage.clone();
                            move |event: FormEvent| {
                                let text = event.value();
                                time_input.set(text.clone());
                                if let Ok(minutes) = parse_duration_input(&text) {
                                    dispatch(
                                        &mut plan,
                                        PlanAction::UpdateStage(Stage {
                                            duration: minutes,
                                            ..stage.clone()
                                        }),
                                    );
                                }
                            }
                        },
                        onblur: move |_| {
                            if parse_duration_input(&time_input.read()).is_err() {
                                let duration = plan
                                    .read()
                                    .stages
                                    .iter()
                                    .find(|s| s.id == stage_id)
                                    .map(|s| s.duration)
                                    .unwrap_or(0);
                                time_input.set(format_duration(duration));
                            }
                        },
                    }
                    span { class: "text-xs",
                        "Format: h:mm (e.g., 1:30) or mm (e.g., 90)"
                    }
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Product" }
                                th { "Amount" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for (assignment, product) in rows {
                                tr { key: "{assignment.product_id}",
                                    td {
                                        div { class: "flex items-center gap-2",
                                            span { class: "font-medium",
                                                "{product.name}"
                                            }
                                            span { class: "text-xs",
                                                "{product.unit}"
                                            }
                                        }
                                    }
                                    td {
                                        input {
                                            class: "input input-bordered input-sm w-20",
                                            r#type: "number",
                                            min: "0",
                                            step: "any",
                                            value: quantity_inputs
                                                .read()
                                                .get(&assignment.product_id)
                                                .cloned()
                                                .unwrap_or_else(|| assignment.quantity.to_string()),
                                            oninput: {
                                                let product_id = assignment.product_id;
                                                move |event: FormEvent| {
                                                    let text = event.value();
                                                    quantity_inputs.write().insert(product_id, text.clone());
                                                    if let Ok(quantity) = text.parse::<f64>() {
                                                        dispatch(
                                                            &mut plan,
                                                            PlanAction::UpdateProductQuantity {
                                                                stage_id,
                                                                product_id,
                                                                quantity,
                                                            },
                                                        );
                                                    }
                                                }
                                            },
                                        }
                                    }
                                    td {
                                        button {
                                            class: "btn btn-ghost btn-sm",
                                            title: "Remove from stage",
                                            onclick: {
                                                let product_id = assignment.product_id;
                                                move |_| {
                                                    quantity_inputs.write().remove(&product_id);
                                                    dispatch(
                                                        &mut plan,
                                                        PlanAction::RemoveProduct { stage_id, product_id },
                                                    );
                                                }
                                            },
                                            Icon {
                                                width: 16,
                                                height: 16,
                                                icon: FaTrash
                                            }
                                        }
                                    }
                                }
                            }
                            if has_available {
                                tr {
                                    td { colspan: 3,
                                        select {
                                            class: "select select-bordered select-sm w-64",
                                            value: "",
                                            onchange: move |event: FormEvent| {
                                                if let Ok(product_id) = event.value().parse::<i64>() {
                                                    dispatch(
                                                        &mut plan,
                                                        PlanAction::AssignProduct {
                                                            stage_id,
                                                            product_id,
                                                            quantity: 0.0,
                                                        },
                                                    );
                                                }
                                            },
                                            option { value: "", disabled: true, selected: true,
                                                "Add product..."
                                            }
                                            for product in available {
                                                option { key: "{product.id}", value: "{product.id}",
                                                    "{product.name}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "card bg-base-200",
                    div { class: "card-body p-4",
                        h4 { class: "font-medium",
                            "Stage Summary"
                        }
                        div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 text-sm",
                            div {
                                div { class: "font-medium", "Total Carbs" }
                                div { "{totals.carbs:.1} g" }
                            }
                            div {
                                div { class: "font-medium", "Total Salt" }
                                div { "{totals.salt:.1} g" }
                            }
                            div {
                                div { class: "font-medium", "Total Fluid" }
                                div { "{totals.fluid:.2} L" }
                            }
                            div {
                                div { class: "font-medium", "Per Hour" }
                                div {
                                    "{totals.carbs_per_hour:.1} g/h carbs, {totals.salt_per_hour:.1} g/h salt, {totals.fluid_per_hour:.2} L/h fluid"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

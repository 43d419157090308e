use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::client::store::{dispatch, use_plan, PlanAction};
use crate::model::nutrition::{Product, Unit};

/// Editable view of the product library. Every edit dispatches an
/// `UpdateProduct` with the changed field merged in; removing a row
/// cascades through every stage's assignments.
#[component]
pub fn ProductTable() -> Element {
    let plan = use_plan();
    let products = plan.read().products.clone();

    if products.is_empty() {
        return rsx!(
            p { class: "text-sm",
                "No products added yet."
            }
        );
    }

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Name" }
                        th { "Carbs g/unit" }
                        th { "Salt g/unit" }
                        th { "Unit" }
                        th { "" }
                    }
                }
                tbody {
                    for product in products {
                        ProductRow { key: "{product.id}", product: product }
                    }
                }
            }
        }
    )
}

#[component]
fn ProductRow(product: Product) -> Element {
    let mut plan = use_plan();
    let product_id = product.id;

    rsx!(
        tr {
            td {
                input {
                    class: "input input-bordered input-sm w-40",
                    value: "{product.name}",
                    oninput: {
                        let product = product.clone();
                        move |event: FormEvent| {
                            let mut updated = product.clone();
                            updated.name = event.value();
                            dispatch(&mut plan, PlanAction::UpdateProduct(updated));
                        }
                    },
                }
            }
            td {
                input {
                    class: "input input-bordered input-sm w-24",
                    r#type: "number",
                    min: "0",
                    step: "any",
                    value: "{product.carbs}",
                    oninput: {
                        let product = product.clone();
                        move |event: FormEvent| {
                            let mut updated = product.clone();
                            updated.carbs = event.value().parse().unwrap_or(0.0);
                            dispatch(&mut plan, PlanAction::UpdateProduct(updated));
                        }
                    },
                }
            }
            td {
                input {
                    class: "input input-bordered input-sm w-24",
                    r#type: "number",
                    min: "0",
                    step: "any",
                    value: "{product.salt}",
                    oninput: {
                        let product = product.clone();
                        move |event: FormEvent| {
                            let mut updated = product.clone();
                            updated.salt = event.value().parse().unwrap_or(0.0);
                            dispatch(&mut plan, PlanAction::UpdateProduct(updated));
                        }
                    },
                }
            }
            td {
                select {
                    class: "select select-bordered select-sm",
                    value: "{product.unit}",
                    onchange: {
                        let product = product.clone();
                        move |event: FormEvent| {
                            let mut updated = product.clone();
                            updated.unit = Unit::from_tag(&event.value());
                            dispatch(&mut plan, PlanAction::UpdateProduct(updated));
                        }
                    },
                    option { value: "liter", "liter" }
                    option { value: "item", "item" }
                }
            }
            td {
                button {
                    class: "btn btn-ghost btn-sm",
                    title: "Remove from library",
                    onclick: move |_| {
                        dispatch(&mut plan, PlanAction::RemoveProductFromLibrary(product_id));
                    },
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaTrash
                    }
                }
            }
        }
    )
}

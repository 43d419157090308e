use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::client::store::{dispatch, use_plan, PlanAction};
use crate::model::nutrition::{Product, Unit};

/// Form for adding a product to the library. Unparseable carb and salt
/// input is coerced to zero rather than rejected; only an empty name
/// blocks submission.
#[component]
pub fn ProductForm() -> Element {
    let mut plan = use_plan();
    let mut name = use_signal(String::new);
    let mut carbs = use_signal(String::new);
    let mut salt = use_signal(String::new);
    let mut unit = use_signal(|| Unit::Liter);

    rsx!(
        form {
            class: "flex flex-wrap items-center gap-2",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                let trimmed = name.read().trim().to_string();
                if trimmed.is_empty() {
                    return;
                }

                let product = Product {
                    id: plan.read().next_product_id,
                    name: trimmed,
                    carbs: carbs.read().parse().unwrap_or(0.0),
                    salt: salt.read().parse().unwrap_or(0.0),
                    unit: *unit.read(),
                };
                dispatch(&mut plan, PlanAction::AddProduct(product));

                name.set(String::new());
                carbs.set(String::new());
                salt.set(String::new());
                unit.set(Unit::Liter);
            },
            input {
                class: "input input-bordered input-sm w-48",
                placeholder: "Product name",
                required: true,
                value: "{name}",
                oninput: move |event| name.set(event.value()),
            }
            input {
                class: "input input-bordered input-sm w-28",
                placeholder: "Carbs (g/unit)",
                r#type: "number",
                min: "0",
                step: "any",
                value: "{carbs}",
                oninput: move |event| carbs.set(event.value()),
            }
            input {
                class: "input input-bordered input-sm w-28",
                placeholder: "Salt (g/unit)",
                r#type: "number",
                min: "0",
                step: "any",
                value: "{salt}",
                oninput: move |event| salt.set(event.value()),
            }
            select {
                class: "select select-bordered select-sm",
                value: "{unit}",
                onchange: move |event| unit.set(Unit::from_tag(&event.value())),
                option { value: "liter", "liter" }
                option { value: "item", "item" }
            }
            button {
                class: "btn btn-primary btn-sm flex gap-1",
                r#type: "submit",
                Icon {
                    width: 14,
                    height: 14,
                    icon: FaPlus
                }
                p {
                    "Add Product"
                }
            }
        }
    )
}

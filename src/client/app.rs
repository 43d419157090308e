use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::store::use_plan_store;

#[component]
pub fn App() -> Element {
    use_plan_store();

    rsx!(Router::<Route> {})
}

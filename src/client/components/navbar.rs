use dioxus::prelude::*;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "Musette"
                    }
                    p { class: "text-xs",
                        "v0.1.0"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}

use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::ForecastView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ForecastView)] Forecast {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { class: "masthead-title", "Billiard Skill Level Forecast" }
                p { class: "masthead-subtitle",
                    "Analysis and forecast for improvement of billiard players with the help of a coach"
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

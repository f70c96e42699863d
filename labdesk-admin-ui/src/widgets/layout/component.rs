use dioxus::prelude::*;

use crate::Route;
use crate::widgets::header::Header;
use crate::widgets::sidebar::Sidebar;

/// Shell around the signed-in pages.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div { class: "app-shell",
            Sidebar {}
            div { class: "app-main",
                Header {}
                main { class: "app-content", Outlet::<Route> {} }
            }
        }
    }
}

use crate::widgets::server_status::ServerStatus;
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    let route = use_route::<crate::Route>();
    let current_path = route.to_string();

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                h2 { "LabDesk Admin" }
            }
            nav { class: "sidebar-nav",
                Link {
                    to: crate::Route::UserManagement {},
                    class: if current_path.contains("users") { "nav-item active" } else { "nav-item" },
                    "User Management"
                }
            }
            div { class: "sidebar-footer",
                ServerStatus {}
            }
        }
    }
}

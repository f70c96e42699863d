use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::session::use_session;
use crate::widgets::role_badge::RoleBadge;

#[component]
pub fn Header() -> Element {
    let mut session = use_session();
    let nav = navigator();

    rsx! {
        header { class: "app-header",
            h1 { class: "header-title", "Lab Management Console" }
            div { class: "header-actions",
                if let Some(current) = session.read().as_ref() {
                    span { class: "header-user", "{current.user.name}" }
                    RoleBadge { role: current.user.role.clone() }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(current) = session.write().take() {
                            info!("User {} logged out", current.user.email);
                        }
                        nav.push(crate::Route::Login {});
                    },
                    "Logout"
                }
            }
        }
    }
}

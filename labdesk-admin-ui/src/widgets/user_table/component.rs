use dioxus::prelude::*;
use labdesk::users::User;

use crate::components::button::{Button, ButtonVariant};
use crate::widgets::role_badge::RoleBadge;

#[component]
pub fn UserTable(users: Vec<User>, on_edit: EventHandler<User>, on_delete: EventHandler<User>) -> Element {
    rsx! {
        div { class: "table-container",
            table { class: "user-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Joined" }
                        th { class: "actions-column", "Actions" }
                    }
                }
                tbody {
                    for user in users {
                        UserRow {
                            key: "{user.id}",
                            user: user.clone(),
                            on_edit,
                            on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<User>) -> Element {
    let edit_target = user.clone();
    let delete_target = user.clone();

    rsx! {
        tr {
            td { class: "user-name", "{user.name}" }
            td { class: "user-email", "{user.email}" }
            td { RoleBadge { role: user.role.clone() } }
            td { class: "user-joined", "{user.joined()}" }
            td { class: "actions-column",
                Button {
                    variant: ButtonVariant::Secondary,
                    r#type: "button",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    r#type: "button",
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    "Delete"
                }
            }
        }
    }
}

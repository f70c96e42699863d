use crate::components::button::{Button, ButtonVariant};
use crate::components::modal::Modal;
use dioxus::prelude::*;
use labdesk::users::{User, delete_confirmation};

/// Asks before an account is removed
#[component]
pub fn ConfirmDeleteModal(user: User, on_confirm: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        Modal {
            open: true,
            on_close: move |_| on_cancel.call(()),
            title: "Delete User",
            actions: Some(rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    r#type: "button",
                    onclick: move |_| on_confirm.call(()),
                    "Delete"
                }
            }),
            p { "{delete_confirmation(&user.name)}" }
        }
    }
}

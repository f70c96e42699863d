use dioxus::prelude::*;
use labdesk::auth::Role;
use labdesk::users::{FormMode, UserManagement};

use crate::components::button::{Button, ButtonVariant};
use crate::components::input::Input;
use crate::components::modal::Modal;

/// Add/edit dialog bound to the page state's form.
#[component]
pub fn UserFormModal(page: Signal<UserManagement>, on_submit: EventHandler<()>) -> Element {
    let Some(mode) = page.read().modal().form_mode() else {
        return rsx! {};
    };
    let form = page.read().form().clone();
    // A role this console does not know stays selectable so it survives the edit
    let role_options: Vec<Role> = Role::assignable()
        .chain(form.role.is_unknown().then(|| form.role.clone()))
        .collect();
    let submitting = page.read().is_submitting();

    let (title, submit_label) = match mode {
        FormMode::Create => ("Add New User", "Create User"),
        FormMode::Edit => ("Edit User", "Update User"),
    };
    let password_placeholder = match mode {
        FormMode::Create => "Enter password",
        FormMode::Edit => "Leave blank to keep current password",
    };

    rsx! {
        Modal {
            open: true,
            on_close: move |_| page.write().close_modal(),
            title: "{title}",
            form {
                class: "user-form",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    on_submit.call(());
                },
                div { class: "form-group",
                    label { r#for: "user-name",
                        "Name"
                        span { class: "required", "*" }
                    }
                    Input {
                        id: "user-name",
                        r#type: "text",
                        name: "name",
                        required: true,
                        value: "{form.name}",
                        oninput: move |e: FormEvent| page.write().form_mut().name = e.value(),
                    }
                }
                div { class: "form-group",
                    label { r#for: "user-email",
                        "Email"
                        span { class: "required", "*" }
                    }
                    Input {
                        id: "user-email",
                        r#type: "email",
                        name: "email",
                        required: true,
                        value: "{form.email}",
                        oninput: move |e: FormEvent| page.write().form_mut().email = e.value(),
                    }
                }
                div { class: "form-group",
                    label { r#for: "user-password",
                        "Password"
                        if mode == FormMode::Create {
                            span { class: "required", "*" }
                        }
                    }
                    Input {
                        id: "user-password",
                        r#type: "password",
                        name: "password",
                        required: mode == FormMode::Create,
                        placeholder: password_placeholder,
                        value: "{form.password}",
                        oninput: move |e: FormEvent| page.write().form_mut().password = e.value(),
                    }
                }
                div { class: "form-group",
                    label { r#for: "user-role", "Role" }
                    select {
                        id: "user-role",
                        name: "role",
                        class: "select",
                        value: "{form.role}",
                        onchange: move |e: FormEvent| page.write().form_mut().role = Role::from(e.value()),
                        for role in role_options {
                            option {
                                value: "{role}",
                                selected: role == form.role,
                                "{role.label()}"
                            }
                        }
                    }
                }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        r#type: "button",
                        onclick: move |_| page.write().close_modal(),
                        "Cancel"
                    }
                    Button { r#type: "submit", disabled: submitting,
                        if submitting {
                            "Saving..."
                        } else {
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}

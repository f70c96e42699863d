use std::time::Duration;

use dioxus::prelude::*;

use crate::Route;
use crate::components::{button::Button, input::Input};
use crate::session::use_session;
use dioxus_primitives::toast::{ToastOptions, use_toast};
use gloo_timers::future::TimeoutFuture;
use shared_http::ApiClient;

const LOGO_SVG: Asset = asset!("/assets/logo.svg");

#[component]
pub fn Login() -> Element {
    let mut email: Signal<String> = use_signal(|| "".to_string());
    let mut password: Signal<String> = use_signal(|| "".to_string());
    let mut session = use_session();
    let api = use_context::<ApiClient>();
    let toaster = use_toast();
    let nav = navigator();

    rsx! {
        div { id: "login",
            div { class: "login-card",
                img { src: LOGO_SVG, alt: "Logo", class: "logo" }
                h1 { "Welcome to LabDesk Admin" }

                form {
                    class: "login-form",
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        let email_val = email();
                        let password_val = password();
                        let api = api.clone();

                        spawn(async move {
                            match api.login(&email_val, &password_val).await {
                                Ok(new_session) => {
                                    // Show success toast for 1 second
                                    let success_options = ToastOptions::new()
                                        .duration(Duration::from_secs(1))
                                        .permanent(false);

                                    toaster
                                        .success(
                                            format!(
                                                "Login successful! Welcome back, {}",
                                                new_session.user.name,
                                            ),
                                            success_options,
                                        );
                                    session.set(Some(new_session));
                                    TimeoutFuture::new(1000).await;
                                    nav.push(Route::UserManagement {});
                                }
                                Err(e) => {
                                    let message = e
                                        .server_message()
                                        .unwrap_or("Login failed. Invalid email or password.")
                                        .to_string();
                                    let error_options = ToastOptions::new().permanent(true);
                                    toaster.error(message, error_options);
                                }
                            }
                        });
                    },
                    div { class: "form-group",
                        label { r#for: "email",
                            "Email"
                            span { class: "required", "*" }
                        }
                        Input {
                            id: "email",
                            r#type: "email",
                            name: "email",
                            placeholder: "you@lab.example",
                            required: true,
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "password",
                            "Password"
                            span { class: "required", "*" }
                        }
                        Input {
                            id: "password",
                            r#type: "password",
                            name: "password",
                            placeholder: "Enter password",
                            required: true,
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }

                    div { align_content: "center",
                        Button { r#type: "submit", "Login" }
                    }
                }
            }
        }
    }
}

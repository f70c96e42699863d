use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_http::ApiClient;

const RECHECK_MS: u32 = 30_000;

/// Backend health dot, re-checked periodically.
#[component]
pub fn ServerStatus() -> Element {
    let api = use_context::<ApiClient>();
    let mut status = use_signal(|| None::<Result<String, String>>);

    use_future(move || {
        let api = api.clone();
        async move {
            loop {
                let result = api.check_health().await.map_err(|e| {
                    warn!("Health check failed: {}", e);
                    e.to_string()
                });
                status.set(Some(result));
                TimeoutFuture::new(RECHECK_MS).await;
            }
        }
    });

    let (dot_class, label) = match status() {
        Some(Ok(message)) => ("status-dot healthy", message),
        Some(Err(_)) => ("status-dot error", "Down".to_string()),
        None => ("status-dot loading", "Checking...".to_string()),
    };

    rsx! {
        div { class: "server-status",
            span { class: "{dot_class}" }
            span { "Server Status: {label}" }
        }
    }
}

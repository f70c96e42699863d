use dioxus::prelude::*;

/// Placeholder shown instead of an empty table. `children` holds the call
/// to action, if any.
#[component]
pub fn EmptyState(icon: String, title: String, description: String, children: Element) -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-icon", "{icon}" }
            h3 { class: "empty-title", "{title}" }
            p { class: "empty-description", "{description}" }
            div { class: "empty-action", {children} }
        }
    }
}

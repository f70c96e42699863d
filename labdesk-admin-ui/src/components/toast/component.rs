use dioxus::prelude::*;

#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        dioxus_primitives::toast::ToastProvider { {children} }
    }
}

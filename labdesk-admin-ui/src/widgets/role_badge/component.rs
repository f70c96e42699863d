use dioxus::prelude::*;
use labdesk::auth::Role;

#[component]
pub fn RoleBadge(role: Role) -> Element {
    rsx! {
        span {
            class: "role-badge px-2 inline-flex text-xs leading-5 font-semibold rounded-full {role.badge_class()}",
            "{role.label()}"
        }
    }
}

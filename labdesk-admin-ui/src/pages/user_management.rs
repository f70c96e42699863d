use dioxus::prelude::*;
use dioxus_primitives::toast::{Toasts, use_toast};
use labdesk::auth::Session;
use labdesk::users::{Modal, UserAdmin, UserManagement as UserManagementState, View};
use shared_http::ApiClient;

use crate::components::button::Button;
use crate::notify::notify;
use crate::session::{SessionSignal, use_session};
use crate::widgets::confirm_delete_modal::ConfirmDeleteModal;
use crate::widgets::empty_state::EmptyState;
use crate::widgets::user_form_modal::UserFormModal;
use crate::widgets::user_table::UserTable;

type Admin = UserAdmin<ApiClient>;

/// Fetches the list into the page, toasting on failure. Dropped if the
/// session changed while the request was in flight.
async fn refresh(
    admin: Admin,
    session: SessionSignal,
    mut page: Signal<UserManagementState>,
    toaster: Toasts,
) {
    let result = admin.list_users().await;
    if !admin.serves(session.peek().as_ref()) {
        debug!("Discarding user list fetched for a previous session");
        return;
    }
    if let Some(notice) = page.write().finish_fetch(result) {
        notify(toaster, notice);
    }
}

fn admin_for(api: &ApiClient, session: Option<Session>) -> Option<Admin> {
    session
        .filter(Session::is_admin)
        .map(|session| UserAdmin::new(api.clone(), session))
}

#[component]
pub fn UserManagement() -> Element {
    let session = use_session();
    let api = use_context::<ApiClient>();
    let toaster = use_toast();
    let mut page = use_signal(|| UserManagementState::new(session.peek().as_ref()));
    let mut fetch_task = use_signal(|| None::<Task>);

    // Re-evaluated whenever the session changes
    let effect_api = api.clone();
    use_effect(move || {
        let current = session();
        if let Some(task) = fetch_task.write().take() {
            task.cancel();
        }
        page.set(UserManagementState::new(current.as_ref()));
        if let Some(admin) = admin_for(&effect_api, current) {
            fetch_task.set(Some(spawn(refresh(admin, session, page, toaster))));
        }
    });

    let admin = admin_for(&api, session());

    let submit_admin = admin.clone();
    let on_submit = move |_: ()| {
        let Some(admin) = submit_admin.clone() else {
            return;
        };
        let modal = page.read().modal().clone();
        if modal == Modal::Closed || !page.write().begin_submit() {
            return;
        }
        let form = page.read().form().clone();

        spawn(async move {
            let outcome = match modal {
                Modal::Edit(user) => {
                    let result = admin.update_user(&user, &form).await;
                    page.write().finish_update(result)
                }
                _ => {
                    let result = admin.create_user(&form).await;
                    page.write().finish_create(result)
                }
            };
            let refresh_needed = outcome.refresh;
            notify(toaster, outcome.notice);
            if refresh_needed {
                refresh(admin, session, page, toaster).await;
            }
        });
    };

    let delete_admin = admin.clone();
    let on_confirm_delete = move |_: ()| {
        let Some(admin) = delete_admin.clone() else {
            return;
        };
        let Some(user) = page.write().take_pending_delete() else {
            return;
        };

        spawn(async move {
            let result = admin.delete_user(&user).await;
            let outcome = page.write().finish_delete(&user.name, result);
            let refresh_needed = outcome.refresh;
            notify(toaster, outcome.notice);
            if refresh_needed {
                refresh(admin, session, page, toaster).await;
            }
        });
    };

    let view = page.read().view();
    match view {
        View::AccessDenied => rsx! {
            div { class: "flex items-center justify-center min-h-screen",
                div { class: "text-center",
                    h1 { class: "text-2xl font-bold text-red-600 mb-4", "Access Denied" }
                    p { class: "text-gray-600", "You don't have permission to access this page." }
                }
            }
        },
        View::Loading => rsx! {
            div { class: "flex items-center justify-center min-h-screen",
                div { class: "animate-spin rounded-full h-32 w-32 border-b-2 border-blue-500" }
            }
        },
        View::Ready => {
            let users = page.read().users().to_vec();
            let user_count = users.len();
            let pending_delete = page.read().pending_delete().cloned();

            rsx! {
                div { class: "page-container",
                    div { class: "page-header",
                        div {
                            h1 { "User Management" }
                            p { class: "page-subtitle", "{user_count} users" }
                        }
                        Button { r#type: "button", onclick: move |_| page.write().open_add(), "Add User" }
                    }

                    div { class: "page-content",
                        if users.is_empty() {
                            EmptyState {
                                icon: "👥".to_string(),
                                title: "No users".to_string(),
                                description: "Accounts you create will be listed here with their role.".to_string(),
                                Button { r#type: "button", onclick: move |_| page.write().open_add(), "Add User" }
                            }
                        } else {
                            UserTable {
                                users: users.clone(),
                                on_edit: move |user| page.write().open_edit(user),
                                on_delete: move |user| page.write().request_delete(user),
                            }
                        }
                    }

                    UserFormModal { page, on_submit }

                    if let Some(user) = pending_delete {
                        ConfirmDeleteModal {
                            user,
                            on_confirm: on_confirm_delete,
                            on_cancel: move |_| page.write().cancel_delete(),
                        }
                    }
                }
            }
        }
    }
}

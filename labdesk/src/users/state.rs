use super::form::{FormMode, UserForm};
use super::models::User;
use super::notice::{Notice, UserOperation};
use crate::Result;
use crate::auth::{Session, can_manage_users};

/// Which dialog is open. Add and edit are exclusive, and the user being
/// edited only exists while its dialog is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal {
    #[default]
    Closed,
    Add,
    Edit(User),
}

impl Modal {
    pub fn form_mode(&self) -> Option<FormMode> {
        match self {
            Modal::Closed => None,
            Modal::Add => Some(FormMode::Create),
            Modal::Edit(_) => Some(FormMode::Edit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    AccessDenied,
    Loading,
    Ready,
}

/// Result of a finished mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Notice,
    /// The list is stale and should be fetched again
    pub refresh: bool,
}

/// State behind the user-management page
#[derive(Debug, Clone, PartialEq)]
pub struct UserManagement {
    access_granted: bool,
    users: Vec<User>,
    loading: bool,
    modal: Modal,
    form: UserForm,
    pending_delete: Option<User>,
    /// Bumped every time a dialog opens or closes
    dialog: u64,
    /// Dialog whose submission is in flight
    submitted_from: Option<u64>,
}

impl UserManagement {
    pub fn new(session: Option<&Session>) -> Self {
        Self {
            access_granted: can_manage_users(session),
            users: Vec::new(),
            loading: true,
            modal: Modal::Closed,
            form: UserForm::default(),
            pending_delete: None,
            dialog: 0,
            submitted_from: None,
        }
    }

    pub fn view(&self) -> View {
        if !self.access_granted {
            View::AccessDenied
        } else if self.loading {
            View::Loading
        } else {
            View::Ready
        }
    }

    pub fn should_fetch_on_mount(&self) -> bool {
        self.access_granted
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut UserForm {
        &mut self.form
    }

    pub fn pending_delete(&self) -> Option<&User> {
        self.pending_delete.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitted_from.is_some()
    }

    pub fn open_add(&mut self) {
        self.dialog += 1;
        self.form.reset();
        self.modal = Modal::Add;
    }

    pub fn open_edit(&mut self, user: User) {
        self.dialog += 1;
        self.form = UserForm::from_user(&user);
        self.modal = Modal::Edit(user);
    }

    pub fn close_modal(&mut self) {
        self.dialog += 1;
        self.modal = Modal::Closed;
        self.form.reset();
    }

    /// Marks the open dialog's submission as in flight. Returns false if no
    /// dialog is open or a submission already is in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.modal == Modal::Closed || self.submitted_from.is_some() {
            return false;
        }
        self.submitted_from = Some(self.dialog);
        true
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<User>>) -> Option<Notice> {
        self.loading = false;
        match result {
            Ok(users) => {
                self.users = users;
                None
            }
            Err(err) => Some(Notice::failure(UserOperation::Fetch, &err)),
        }
    }

    pub fn finish_create(&mut self, result: Result<()>) -> Outcome {
        self.finish_save(result, UserOperation::Create, "User created successfully!")
    }

    pub fn finish_update(&mut self, result: Result<()>) -> Outcome {
        self.finish_save(result, UserOperation::Update, "User updated successfully!")
    }

    fn finish_save(&mut self, result: Result<()>, operation: UserOperation, done: &str) -> Outcome {
        // A dialog opened after the submission is left alone
        let still_open = self
            .submitted_from
            .take()
            .is_none_or(|dialog| dialog == self.dialog);
        match result {
            Ok(()) => {
                if still_open {
                    self.close_modal();
                }
                Outcome {
                    notice: Notice::success(done),
                    refresh: true,
                }
            }
            Err(err) => Outcome {
                notice: Notice::failure(operation, &err),
                refresh: false,
            },
        }
    }

    pub fn request_delete(&mut self, user: User) {
        self.pending_delete = Some(user);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Hands over the user the admin just confirmed for deletion.
    pub fn take_pending_delete(&mut self) -> Option<User> {
        self.pending_delete.take()
    }

    pub fn finish_delete(&mut self, name: &str, result: Result<()>) -> Outcome {
        match result {
            Ok(()) => Outcome {
                notice: Notice::success(format!("User \"{name}\" deleted successfully!")),
                refresh: true,
            },
            Err(err) => Outcome {
                notice: Notice::failure(UserOperation::Delete, &err),
                refresh: false,
            },
        }
    }
}

/// Text of the delete confirmation dialog
pub fn delete_confirmation(name: &str) -> String {
    format!("Are you sure you want to delete user \"{name}\"? This action cannot be undone.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::auth::{CurrentUser, Role};

    fn session(role: Role) -> Session {
        Session::new(
            "tok",
            CurrentUser {
                id: "me".to_string(),
                name: "Root".to_string(),
                email: "root@lab.test".to_string(),
                role,
            },
        )
    }

    fn user(id: &str, name: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@lab.test", name.to_lowercase()),
            role,
            created_at: None,
        }
    }

    fn admin_page() -> UserManagement {
        UserManagement::new(Some(&session(Role::Admin)))
    }

    #[test]
    fn test_non_admin_is_denied_and_never_fetches() {
        let page = UserManagement::new(Some(&session(Role::Researcher)));
        assert_eq!(page.view(), View::AccessDenied);
        assert!(!page.should_fetch_on_mount());

        let page = UserManagement::new(None);
        assert_eq!(page.view(), View::AccessDenied);
        assert!(!page.should_fetch_on_mount());
    }

    #[test]
    fn test_admin_loads_then_shows_list() {
        let mut page = admin_page();
        assert!(page.should_fetch_on_mount());
        assert_eq!(page.view(), View::Loading);

        let notice = page.finish_fetch(Ok(vec![user("1", "Ada", Role::Admin)]));
        assert_eq!(notice, None);
        assert_eq!(page.view(), View::Ready);
        assert_eq!(page.users().len(), 1);
    }

    #[test]
    fn test_failed_fetch_still_stops_loading() {
        let mut page = admin_page();
        page.finish_fetch(Ok(vec![user("1", "Ada", Role::Admin)]));

        let notice = page.finish_fetch(Err(Error::Status {
            status: 500,
            message: None,
        }));
        assert_eq!(notice, Some(Notice::error("Failed to fetch users")));
        assert!(!page.is_loading());
        assert_eq!(page.users().len(), 1);

        let mut page = admin_page();
        let notice = page.finish_fetch(Err(Error::Request("offline".to_string())));
        assert_eq!(notice, Some(Notice::error("Error fetching users")));
        assert_eq!(page.view(), View::Ready);
    }

    #[test]
    fn test_add_and_edit_dialogs_are_exclusive() {
        let mut page = admin_page();
        page.open_add();
        assert_eq!(page.modal(), &Modal::Add);
        assert_eq!(page.modal().form_mode(), Some(FormMode::Create));

        let grace = user("2", "Grace", Role::Engineer);
        page.open_edit(grace.clone());
        assert_eq!(page.modal(), &Modal::Edit(grace));
        assert_eq!(page.form().name, "Grace");
        assert_eq!(page.form().role, Role::Engineer);
        assert_eq!(page.modal().form_mode(), Some(FormMode::Edit));

        page.close_modal();
        assert_eq!(page.modal(), &Modal::Closed);
        assert_eq!(page.form(), &UserForm::default());
    }

    #[test]
    fn test_open_add_clears_previous_input() {
        let mut page = admin_page();
        page.open_edit(user("2", "Grace", Role::Engineer));
        page.form_mut().password = "typed".to_string();
        page.open_add();
        assert_eq!(page.form(), &UserForm::default());
    }

    #[test]
    fn test_successful_create_closes_and_refreshes() {
        let mut page = admin_page();
        page.open_add();
        page.form_mut().name = "Ada".to_string();
        assert!(page.begin_submit());
        assert!(!page.begin_submit());

        let outcome = page.finish_create(Ok(()));
        assert_eq!(outcome.notice, Notice::success("User created successfully!"));
        assert!(outcome.refresh);
        assert_eq!(page.modal(), &Modal::Closed);
        assert_eq!(page.form(), &UserForm::default());
        assert!(!page.is_submitting());
    }

    #[test]
    fn test_failed_update_keeps_dialog_and_input() {
        let mut page = admin_page();
        let grace = user("2", "Grace", Role::Engineer);
        page.open_edit(grace.clone());
        page.form_mut().email = "taken@lab.test".to_string();
        assert!(page.begin_submit());

        let outcome = page.finish_update(Err(Error::Status {
            status: 409,
            message: Some("Email already in use".to_string()),
        }));
        assert_eq!(outcome.notice, Notice::error("Email already in use"));
        assert!(!outcome.refresh);
        assert_eq!(page.modal(), &Modal::Edit(grace));
        assert_eq!(page.form().email, "taken@lab.test");
        assert!(page.begin_submit());
    }

    #[test]
    fn test_successful_update() {
        let mut page = admin_page();
        page.open_edit(user("2", "Grace", Role::Engineer));
        assert!(page.begin_submit());
        let outcome = page.finish_update(Ok(()));
        assert_eq!(outcome.notice, Notice::success("User updated successfully!"));
        assert!(outcome.refresh);
        assert_eq!(page.modal(), &Modal::Closed);
    }

    #[test]
    fn test_submit_needs_open_dialog() {
        let mut page = admin_page();
        assert!(!page.begin_submit());
        assert!(!page.is_submitting());
    }

    #[test]
    fn test_late_create_leaves_newer_edit_dialog_open() {
        let mut page = admin_page();
        page.open_add();
        assert!(page.begin_submit());
        page.close_modal();

        let grace = user("2", "Grace", Role::Engineer);
        page.open_edit(grace.clone());
        page.form_mut().email = "typed@lab.test".to_string();
        assert!(!page.begin_submit());

        let outcome = page.finish_create(Ok(()));
        assert_eq!(outcome.notice, Notice::success("User created successfully!"));
        assert!(outcome.refresh);
        assert_eq!(page.modal(), &Modal::Edit(grace));
        assert_eq!(page.form().email, "typed@lab.test");
        assert!(!page.is_submitting());
        assert!(page.begin_submit());
    }

    #[test]
    fn test_late_create_leaves_reopened_add_dialog_open() {
        let mut page = admin_page();
        page.open_add();
        assert!(page.begin_submit());
        page.close_modal();
        page.open_add();
        page.form_mut().name = "Second".to_string();

        page.finish_create(Ok(()));
        assert_eq!(page.modal(), &Modal::Add);
        assert_eq!(page.form().name, "Second");
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut page = admin_page();
        let alan = user("3", "Alan", Role::Researcher);

        page.request_delete(alan.clone());
        assert_eq!(page.pending_delete(), Some(&alan));
        page.cancel_delete();
        assert_eq!(page.pending_delete(), None);

        page.request_delete(alan.clone());
        let confirmed = page.take_pending_delete().unwrap();
        assert_eq!(page.pending_delete(), None);

        let outcome = page.finish_delete(&confirmed.name, Ok(()));
        assert_eq!(
            outcome.notice,
            Notice::success("User \"Alan\" deleted successfully!")
        );
        assert!(outcome.refresh);

        let outcome = page.finish_delete(
            &confirmed.name,
            Err(Error::Status {
                status: 404,
                message: None,
            }),
        );
        assert_eq!(outcome.notice, Notice::error("Failed to delete user"));
        assert!(!outcome.refresh);
    }

    #[test]
    fn test_delete_confirmation_text() {
        assert_eq!(
            delete_confirmation("Alan"),
            "Are you sure you want to delete user \"Alan\"? This action cannot be undone."
        );
    }
}

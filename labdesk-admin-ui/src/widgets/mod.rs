pub mod confirm_delete_modal;
pub mod empty_state;
pub mod header;
pub mod layout;
pub mod role_badge;
pub mod server_status;
pub mod sidebar;
pub mod user_form_modal;
pub mod user_table;

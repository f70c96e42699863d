use std::time::Duration;

use dioxus_primitives::toast::{ToastOptions, Toasts};
use labdesk::users::{Notice, NoticeLevel};

/// Shows a finished request's notice. Errors stay until dismissed.
pub fn notify(toaster: Toasts, notice: Notice) {
    match notice.level {
        NoticeLevel::Success => {
            let options = ToastOptions::new()
                .duration(Duration::from_secs(3))
                .permanent(false);
            toaster.success(notice.message, options);
        }
        NoticeLevel::Error => {
            toaster.error(notice.message, ToastOptions::new().permanent(true));
        }
    }
}

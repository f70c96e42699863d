use dioxus::prelude::*;
use labdesk::auth::Session;

/// The signed-in session, shared by every page. `None` until login.
pub type SessionSignal = Signal<Option<Session>>;

pub fn use_session_provider() -> SessionSignal {
    use_context_provider(|| Signal::new(None::<Session>))
}

pub fn use_session() -> SessionSignal {
    use_context::<SessionSignal>()
}

use crate::gui::{
    content_modal::ContentModal,
    session_modal::SessionActionModal,
};

pub struct Modals {
    pub session_action: SessionActionModal,
    pub content: ContentModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { session_action: SessionActionModal::new(), content: ContentModal::new() }
    }
}

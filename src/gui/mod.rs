pub mod actions;
pub mod app;
pub mod autosave;
pub mod chapter_list;
pub mod chart_panel;
pub mod content_modal;
pub mod forms;
pub mod notifications;
pub mod plan_form;
pub mod session_cards;
pub mod session_modal;
pub mod settings;
pub mod theme;
pub mod time_display;
pub mod top_bar;

pub use app::StudydeskApp;

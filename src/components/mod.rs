//! UI Components
//!
//! Reusable Leptos components.

mod confirm_dialog;
mod layout;
mod link;
mod notice;
mod period_selector;
mod protected;
mod spinner;
mod stock_modal;

pub use confirm_dialog::ConfirmDialog;
pub use layout::Layout;
pub use link::Link;
pub use notice::{alert, confirm, Notice, NoticeBanner, NoticeKind};
pub use period_selector::PeriodSelector;
pub use protected::Protected;
pub use spinner::Spinner;
pub use stock_modal::StockModal;

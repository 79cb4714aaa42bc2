//! Tab management module
//!
//! Содержит:
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг tab.key → View
//! - `tab_labels` - заголовки табов

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_key, detail_tab_label, parse_detail_key, tab_label_for_key};

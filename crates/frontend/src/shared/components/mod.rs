pub mod data_table;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod record_details;
pub mod status_badge;

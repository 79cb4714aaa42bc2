//! Таблица с фильтрами и пагинацией поверх `contracts::shared::data_table`.

pub mod column;
pub mod custom_table;
pub mod filter_card;

pub use column::{column_specs, CellRenderer, Column};
pub use custom_table::{CustomTable, TablePagination};
pub use filter_card::FilterCard;

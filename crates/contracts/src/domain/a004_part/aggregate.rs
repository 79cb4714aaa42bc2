use crate::shared::data_table::{CellValue, DataRow};
use serde::{Deserialize, Serialize};

/// Запчасть на складе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub part_id: String,
    pub name: String,
    pub product_id: String,
    pub stock: u32,
    pub reorder_level: u32,
    pub unit_price: f64,
}

impl Part {
    pub fn needs_reorder(&self) -> bool {
        self.stock <= self.reorder_level
    }

    /// Текст колонки "Stock": остаток с пометкой о дозаказе
    pub fn stock_label(&self) -> String {
        if self.needs_reorder() {
            format!("{} (reorder)", self.stock)
        } else {
            self.stock.to_string()
        }
    }
}

impl DataRow for Part {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "partId" => Some(self.part_id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "productId" => Some(self.product_id.as_str().into()),
            "stock" => Some(self.stock.into()),
            "stockLabel" => Some(self.stock_label().into()),
            "reorderLevel" => Some(self.reorder_level.into()),
            "unitPrice" => Some(self.unit_price.into()),
            _ => None,
        }
    }
}

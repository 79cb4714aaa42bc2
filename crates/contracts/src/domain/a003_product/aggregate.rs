use crate::shared::data_table::{CellValue, DataRow};
use serde::{Deserialize, Serialize};

/// Обслуживаемое изделие (модель оборудования)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub model: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub warranty_months: u32,
}

impl DataRow for Product {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "productId" => Some(self.product_id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "model" => Some(self.model.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "price" => Some(self.price.into()),
            "warrantyMonths" => Some(self.warranty_months.into()),
            _ => None,
        }
    }
}

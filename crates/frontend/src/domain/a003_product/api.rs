use crate::shared::api_utils::{api_url, get_json};
use contracts::domain::a003_product::aggregate::Product;

/// Fetch all products
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    get_json(&api_url("/api/products")).await
}

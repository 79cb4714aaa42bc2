use crate::shared::api_utils::{api_url, get_json};
use contracts::domain::a004_part::aggregate::Part;

/// Fetch all parts
pub async fn fetch_parts() -> Result<Vec<Part>, String> {
    get_json(&api_url("/api/parts")).await
}

use crate::shared::api_utils::{api_url, get_json};
use contracts::domain::a002_technician::aggregate::Technician;

/// Fetch all technicians
pub async fn fetch_technicians() -> Result<Vec<Technician>, String> {
    get_json(&api_url("/api/technicians")).await
}

use crate::shared::api_utils::{api_url, get_json};
use contracts::domain::a001_client::aggregate::Client;

/// Fetch all clients
pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    get_json(&api_url("/api/clients")).await
}

//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/clients");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends `query` to `url` as a query string
/// (`filters[clientName]=acme` for nested maps).
pub fn with_query<Q: Serialize>(url: &str, query: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    if qs.is_empty() {
        Ok(url.to_string())
    } else {
        Ok(format!("{}?{}", url, qs))
    }
}

/// GET `url` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    log::debug!("GET {}", url);

    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {} for {}", response.status(), url));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::data_table::{FilterState, SortDirection};
    use contracts::shared::list::ListQuery;

    #[test]
    fn test_with_query_nested_filters() {
        let filter = FilterState::new()
            .with_id_sort(SortDirection::Desc)
            .with_column_filter("clientName", "acme");
        let query = ListQuery::from_filter_state(&filter, 2, 10);
        let url = with_query("/api/jobs", &query).unwrap();

        assert!(url.starts_with("/api/jobs?page=2&pageSize=10&idSort=desc"));
        assert!(url.contains("filters%5BclientName%5D=acme") || url.contains("filters[clientName]=acme"));
    }

    #[test]
    fn test_with_query_without_parameters() {
        let empty: std::collections::BTreeMap<String, String> = Default::default();
        assert_eq!(with_query("/api/clients", &empty).unwrap(), "/api/clients");
    }
}

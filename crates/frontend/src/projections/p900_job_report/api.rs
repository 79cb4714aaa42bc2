use crate::shared::api_utils::{api_url, get_json};
use serde_json::Value;

/// Отчёт по заявкам. Схема строк задаётся сервером, поэтому строки
/// остаются `serde_json::Value`.
pub async fn fetch_job_report() -> Result<Vec<Value>, String> {
    get_json(&api_url("/api/reports/jobs")).await
}

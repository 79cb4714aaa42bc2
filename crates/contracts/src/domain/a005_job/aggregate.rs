use crate::enums::{JobStatus, JobType};
use crate::shared::data_table::{CellValue, DataRow};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// DTO
// ============================================================================

/// Заявка на выезд техника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: String,
    pub client_name: String,
    /// Пусто, пока заявка не назначена
    #[serde(default)]
    pub technician_name: Option<String>,
    /// Неизвестный код или `null` дают `None`: строка остаётся в списке
    /// с пустой ячейкой.
    #[serde(default, deserialize_with = "deserialize_job_type")]
    pub job_type: Option<JobType>,
    #[serde(default, deserialize_with = "deserialize_job_status")]
    pub status: Option<JobStatus>,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub scheduled_date: Option<NaiveDate>,
}

/// Строковое значение поля; `null`, числа и прочее считаются отсутствующими.
fn lenient_str<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn deserialize_job_status<'de, D>(deserializer: D) -> Result<Option<JobStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_str(deserializer)?.and_then(|code| JobStatus::from_code(&code)))
}

fn deserialize_job_type<'de, D>(deserializer: D) -> Result<Option<JobType>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_str(deserializer)?.and_then(|code| JobType::from_code(&code)))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_str(deserializer)?
        .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()))
}

impl DataRow for Job {
    /// Status and type are exposed by display name, matching what the
    /// table shows and what the filter dropdowns offer.
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "jobId" => Some(self.job_id.as_str().into()),
            "clientName" => Some(self.client_name.as_str().into()),
            "technicianName" => self.technician_name.as_deref().map(CellValue::from),
            "jobType" => self.job_type.map(|t| t.display_name().into()),
            "status" => self.status.map(|s| s.display_name().into()),
            "scheduledDate" => self
                .scheduled_date
                .map(|d| d.format("%Y-%m-%d").to_string().into()),
            _ => None,
        }
    }
}

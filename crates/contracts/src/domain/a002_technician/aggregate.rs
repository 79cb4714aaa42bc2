use crate::shared::data_table::{CellValue, DataRow};
use serde::{Deserialize, Serialize};

/// Техник (выездной специалист)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub tech_id: String,
    pub name: String,
    pub contact_number: String,
    pub specialization: String,
    /// Active / On Leave / Inactive
    pub status: String,
    #[serde(default)]
    pub jobs_completed: u32,
}

impl DataRow for Technician {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "techId" => Some(self.tech_id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "contactNumber" => Some(self.contact_number.as_str().into()),
            "specialization" => Some(self.specialization.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "jobsCompleted" => Some(self.jobs_completed.into()),
            _ => None,
        }
    }
}

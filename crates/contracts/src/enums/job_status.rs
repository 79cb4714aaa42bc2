use serde::{Deserialize, Serialize};

/// Статусы заявки на выезд
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    /// Код статуса в API
    pub fn code(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Assigned => "assigned",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        }
    }

    /// Название статуса в таблице и в фильтре
    pub fn display_name(&self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::Assigned => "Assigned",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> Vec<JobStatus> {
        vec![
            JobStatus::Pending,
            JobStatus::Assigned,
            JobStatus::InProgress,
            JobStatus::Completed,
            JobStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.display_name() == name)
    }

    /// Display names in workflow order, for the status dropdown.
    pub fn display_names() -> Vec<String> {
        Self::all()
            .iter()
            .map(|s| s.display_name().to_string())
            .collect()
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_and_display_name_lookup() {
        for status in JobStatus::all() {
            assert_eq!(JobStatus::from_code(status.code()), Some(status));
            assert_eq!(JobStatus::from_display_name(status.display_name()), Some(status));
        }
        assert_eq!(JobStatus::from_code("In Progress"), None);
        assert_eq!(JobStatus::from_display_name("in_progress"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&JobStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let parsed: JobStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, JobStatus::Cancelled);
    }
}

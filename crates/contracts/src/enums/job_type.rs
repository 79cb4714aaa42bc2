use serde::{Deserialize, Serialize};

/// Виды выездных работ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Installation,
    Repair,
    Maintenance,
}

impl JobType {
    pub fn code(&self) -> &'static str {
        match self {
            JobType::Installation => "installation",
            JobType::Repair => "repair",
            JobType::Maintenance => "maintenance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            JobType::Installation => "Installation",
            JobType::Repair => "Repair",
            JobType::Maintenance => "Maintenance",
        }
    }

    pub fn all() -> Vec<JobType> {
        vec![JobType::Installation, JobType::Repair, JobType::Maintenance]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.display_name() == name)
    }

    pub fn display_names() -> Vec<String> {
        Self::all()
            .iter()
            .map(|t| t.display_name().to_string())
            .collect()
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

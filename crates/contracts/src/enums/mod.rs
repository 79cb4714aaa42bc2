pub mod job_status;
pub mod job_type;

pub use job_status::JobStatus;
pub use job_type::JobType;

pub mod p900_job_report;

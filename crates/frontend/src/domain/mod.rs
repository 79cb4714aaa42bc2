pub mod a001_client;
pub mod a002_technician;
pub mod a003_product;
pub mod a004_part;
pub mod a005_job;

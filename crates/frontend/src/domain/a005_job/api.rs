use crate::shared::api_utils::{api_url, get_json, with_query};
use contracts::domain::a005_job::aggregate::Job;
use contracts::domain::a005_job::query::jobs_query;
use contracts::shared::data_table::FilterState;
use contracts::shared::list::ListResponse;

/// Fetch one page of jobs; filtering and sorting happen on the server.
pub async fn fetch_jobs(
    filter: &FilterState,
    page: usize,
    page_size: usize,
) -> Result<ListResponse<Job>, String> {
    let query = jobs_query(filter, page, page_size);
    let url = with_query(&api_url("/api/jobs"), &query)?;
    get_json(&url).await
}

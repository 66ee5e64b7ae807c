use crate::shared::api_utils::{api_url, get_json};
use crate::shared::error::ApiError;
use contracts::domain::a002_customer::Customer;

/// Customer name lookup: `GET /Clientes?search=<q>`.
pub async fn search_customers(query: &str) -> Result<Vec<Customer>, ApiError> {
    let url = api_url(&format!(
        "/Clientes?search={}",
        urlencoding::encode(query)
    ));
    get_json(&url).await
}

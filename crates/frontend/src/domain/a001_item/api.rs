use crate::shared::api_utils::{api_url, get_json};
use crate::shared::error::ApiError;
use contracts::domain::a001_item::{Item, ItemDraft, ItemId};
use gloo_net::http::Request;

/// Full catalog listing.
pub async fn fetch_items() -> Result<Vec<Item>, ApiError> {
    get_json(&api_url("/Items")).await
}

/// Server-side name lookup. The catalog service also understands
/// `GET /Items/search?name=...`; the query-parameter form is the one this
/// app standardizes on.
pub async fn search_items(query: &str) -> Result<Vec<Item>, ApiError> {
    let url = api_url(&format!("/Items?search={}", urlencoding::encode(query)));
    get_json(&url).await
}

pub async fn create_item(draft: &ItemDraft) -> Result<Item, ApiError> {
    let response = Request::post(&api_url("/Items"))
        .json(draft)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    response
        .json::<Item>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn update_item(id: ItemId, draft: &ItemDraft) -> Result<Item, ApiError> {
    let url = api_url(&format!("/Items/{}", id.value()));
    let response = Request::put(&url)
        .json(draft)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    response
        .json::<Item>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn delete_item(id: ItemId) -> Result<(), ApiError> {
    let url = api_url(&format!("/Items/{}", id.value()));
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    Ok(())
}

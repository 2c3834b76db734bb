//! Item Endpoints
//!
//! Item CRUD, stock movements and per-item trends.

use reqwest::Method;

use super::{fetch_empty, fetch_json, request, with_query};
use crate::error::ApiError;
use crate::models::{ChartData, DataEnvelope, Item, ItemPayload, StockAdjustment, StockHistory, TrendPeriod};

pub async fn list_items() -> Result<Vec<Item>, ApiError> {
    let envelope: DataEnvelope<Vec<Item>> = fetch_json(request(Method::GET, "/items")).await?;
    Ok(envelope.data)
}

pub async fn get_item(id: u64) -> Result<Item, ApiError> {
    let envelope: DataEnvelope<Item> = fetch_json(request(Method::GET, &format!("/items/{}", id))).await?;
    Ok(envelope.data)
}

pub async fn create_item(payload: &ItemPayload) -> Result<(), ApiError> {
    fetch_empty(request(Method::POST, "/items").json(payload)).await
}

pub async fn update_item(id: u64, payload: &ItemPayload) -> Result<(), ApiError> {
    fetch_empty(request(Method::PUT, &format!("/items/{}", id)).json(payload)).await
}

pub async fn delete_item(id: u64) -> Result<(), ApiError> {
    fetch_empty(request(Method::DELETE, &format!("/items/{}", id))).await
}

pub async fn item_history(id: u64) -> Result<Vec<StockHistory>, ApiError> {
    let envelope: DataEnvelope<Vec<StockHistory>> =
        fetch_json(request(Method::GET, &format!("/items/{}/history", id))).await?;
    Ok(envelope.data)
}

pub async fn item_trend(id: u64, period: TrendPeriod) -> Result<ChartData, ApiError> {
    let path = with_query(&format!("/items/{}/trend", id), &[("period", period.as_str())]);
    fetch_json(request(Method::GET, &path)).await
}

/// Record a stock movement. Whether it is allowed is the server's call.
pub async fn adjust_stock(id: u64, adjustment: &StockAdjustment) -> Result<(), ApiError> {
    fetch_empty(request(Method::POST, &format!("/items/{}/stock", id)).json(adjustment)).await
}

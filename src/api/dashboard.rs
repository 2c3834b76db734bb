//! Dashboard Endpoint

use reqwest::Method;

use super::{fetch_json, request, with_query};
use crate::error::ApiError;
use crate::models::{Dashboard, TrendPeriod};

pub async fn get_dashboard(period: TrendPeriod) -> Result<Dashboard, ApiError> {
    fetch_json(request(Method::GET, &with_query("/dashboard", &[("period", period.as_str())]))).await
}

use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Bucket, DefaultBucketsResponse, PaycheckSplitRequest, PaycheckSplitResponse},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use paysplit_core::parse_bucket_records;

#[utoipa::path(
    post,
    path = "/api/v1/paycheck/split",
    request_body = PaycheckSplitRequest,
    responses(
        (status = 200, body = PaycheckSplitResponse),
        (status = 400, description = "Percentages do not sum to 100 or names repeat"),
        (status = 422, description = "Malformed bucket record")
    )
)]
pub async fn split_paycheck(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PaycheckSplitRequest>, JsonRejection>,
) -> ApiResult<Json<PaycheckSplitResponse>> {
    let Json(request) = payload?;
    let custom_buckets = request
        .custom_buckets
        .as_deref()
        .map(parse_bucket_records)
        .transpose()?;

    let split = state
        .paycheck_splitter
        .split_paycheck(request.amount, custom_buckets.as_deref())?;
    tracing::debug!(
        "Split {} into {} transfers",
        request.amount,
        split.transfer_instructions.len()
    );
    Ok(Json(split.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/paycheck/default-buckets",
    responses((status = 200, body = DefaultBucketsResponse))
)]
pub async fn get_default_buckets(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DefaultBucketsResponse>> {
    let buckets = state
        .paycheck_splitter
        .default_buckets()
        .iter()
        .map(Bucket::from)
        .collect();
    Ok(Json(DefaultBucketsResponse { buckets }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/paycheck/split", post(split_paycheck))
        .route("/paycheck/default-buckets", get(get_default_buckets))
}

//! Coffee catalog handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Extension, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{actor, CurrentUser};
use crate::api::AppState;
use common::AppResult;
use domain::{Coffee, CoffeeDraft};

/// Name and price of a coffee
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CoffeeRequest {
    #[validate(length(min = 1, message = "Coffee name is required"))]
    #[schema(example = "Espresso")]
    pub name: String,
    #[schema(value_type = f64, example = 5.0)]
    pub price: Decimal,
}

impl CoffeeRequest {
    fn into_draft(self) -> AppResult<CoffeeDraft> {
        Ok(CoffeeDraft::new(self.name, self.price)?)
    }
}

/// Discount to apply to the coffee with this name
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DiscountRequest {
    #[validate(length(min = 1, message = "Coffee name is required"))]
    #[schema(example = "Latte")]
    pub name: String,
    /// Fraction of the current price to subtract
    #[schema(value_type = f64, example = 0.1)]
    pub discount: Decimal,
}

/// Create coffee routes
pub fn coffee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/coffees",
            get(list_coffees).post(create_coffee).patch(discount_coffee),
        )
        .route(
            "/coffees/:id",
            get(get_coffee).put(update_coffee).delete(delete_coffee),
        )
}

/// List all coffees
#[utoipa::path(
    get,
    path = "/coffees",
    tag = "Coffees",
    responses(
        (status = 200, description = "All coffees ordered by id", body = Vec<Coffee>)
    )
)]
pub async fn list_coffees(State(state): State<AppState>) -> AppResult<Json<Vec<Coffee>>> {
    let coffees = state.coffee_service.list_all().await?;
    Ok(Json(coffees))
}

/// Get coffee by ID
#[utoipa::path(
    get,
    path = "/coffees/{id}",
    tag = "Coffees",
    params(("id" = i64, Path, description = "Coffee ID")),
    responses(
        (status = 200, description = "Coffee found", body = Coffee),
        (status = 404, description = "Coffee not found")
    )
)]
pub async fn get_coffee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Coffee>> {
    let coffee = state.coffee_service.find_by_id(id).await?;
    Ok(Json(coffee))
}

/// Add a coffee under an unused name
#[utoipa::path(
    post,
    path = "/coffees",
    tag = "Coffees",
    request_body = CoffeeRequest,
    responses(
        (status = 201, description = "Coffee created", body = Coffee),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Name already taken")
    ),
    security((), ("bearer_auth" = []))
)]
pub async fn create_coffee(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    ValidatedJson(payload): ValidatedJson<CoffeeRequest>,
) -> AppResult<(StatusCode, Json<Coffee>)> {
    tracing::debug!(actor = actor(&user), name = %payload.name, "Create coffee");
    let coffee = state.coffee_service.create(payload.into_draft()?).await?;
    Ok((StatusCode::CREATED, Json(coffee)))
}

/// Replace the coffee at this ID, creating it if absent
#[utoipa::path(
    put,
    path = "/coffees/{id}",
    tag = "Coffees",
    params(("id" = i64, Path, description = "Coffee ID")),
    request_body = CoffeeRequest,
    responses(
        (status = 200, description = "Coffee stored", body = Coffee),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Name taken by another coffee")
    ),
    security((), ("bearer_auth" = []))
)]
pub async fn update_coffee(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<CoffeeRequest>,
) -> AppResult<Json<Coffee>> {
    tracing::debug!(actor = actor(&user), coffee_id = id, "Update coffee");
    let coffee = state
        .coffee_service
        .update_by_id(id, payload.into_draft()?)
        .await?;
    Ok(Json(coffee))
}

/// Discount the coffee with this name
#[utoipa::path(
    patch,
    path = "/coffees",
    tag = "Coffees",
    request_body = DiscountRequest,
    responses(
        (status = 200, description = "Discount applied", body = Coffee),
        (status = 400, description = "Validation error"),
        (status = 404, description = "No coffee with this name")
    ),
    security((), ("bearer_auth" = []))
)]
pub async fn discount_coffee(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    ValidatedJson(payload): ValidatedJson<DiscountRequest>,
) -> AppResult<Json<Coffee>> {
    tracing::debug!(actor = actor(&user), name = %payload.name, "Discount coffee");
    let coffee = state
        .coffee_service
        .apply_discount(&payload.name, payload.discount)
        .await?;
    Ok(Json(coffee))
}

/// Delete coffee by ID
#[utoipa::path(
    delete,
    path = "/coffees/{id}",
    tag = "Coffees",
    params(("id" = i64, Path, description = "Coffee ID")),
    responses(
        (status = 204, description = "Coffee deleted"),
        (status = 404, description = "Coffee not found")
    ),
    security((), ("bearer_auth" = []))
)]
pub async fn delete_coffee(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    tracing::debug!(actor = actor(&user), coffee_id = id, "Delete coffee");
    state.coffee_service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::failure::Failure;
use crate::domain::payment::{Item, Payment};
use crate::presentation::AppState;
use crate::presentation::http::app_error::ApiResult;
use crate::presentation::http::translation::WireBody;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct PurchaseDto {
    #[validate(range(min = 1))]
    pub(crate) customer_id: i64,
    #[validate(range(min = 1))]
    pub(crate) item_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ItemDto {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) price_cents: i64,
    pub(crate) purchasable: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PaymentDto {
    pub(crate) id: i64,
    pub(crate) item_id: i64,
    pub(crate) customer_id: i64,
    pub(crate) amount_cents: i64,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price_cents: item.price_cents,
            purchasable: item.purchasable,
        }
    }
}

impl From<Payment> for PaymentDto {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            item_id: payment.item_id,
            customer_id: payment.customer_id,
            amount_cents: payment.amount_cents,
            created_at: payment.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/items",
    tag = "payments",
    responses(
        (status = 200, description = "Items listed", body = [ItemDto]),
        (status = 500, description = "Internal error", body = WireBody)
    )
)]
pub(crate) async fn list_items(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<Vec<ItemDto>>)> {
    let items = state
        .payments
        .intercept(state.payment_service.list_items().await)?;

    Ok((
        StatusCode::OK,
        Json(items.into_iter().map(ItemDto::from).collect()),
    ))
}

#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "payments",
    request_body = PurchaseDto,
    responses(
        (status = 201, description = "Item purchased", body = PaymentDto),
        (status = 400, description = "Validation error", body = WireBody),
        (status = 403, description = "Customer may not purchase", body = WireBody),
        (status = 404, description = "Customer or item not found", body = WireBody),
        (status = 409, description = "Item already purchased", body = WireBody),
        (status = 500, description = "Internal error", body = WireBody)
    )
)]
pub(crate) async fn purchase_item(
    State(state): State<AppState>,
    Json(dto): Json<PurchaseDto>,
) -> ApiResult<(StatusCode, Json<PaymentDto>)> {
    state
        .payments
        .intercept(dto.validate().map_err(Failure::from))?;

    let payment = state.payments.intercept(
        state
            .payment_service
            .purchase_item(dto.customer_id, dto.item_id)
            .await,
    )?;
    Ok((StatusCode::CREATED, Json(PaymentDto::from(payment))))
}

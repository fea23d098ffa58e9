use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use super::{CreatedResponse, ErrorResponse};
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderItem};
use crate::errors::AppError;
use crate::AppService;

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    /// Menu item id.
    pub menu_item_id: String,
    /// At least 1. Defaults to 1.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub address: String,
    pub phone: String,
    pub restaurant_id: String,
    pub items: Vec<OrderItemRequest>,
    pub notes: Option<String>,
    /// Order total. When omitted it is computed from current menu prices.
    pub total: Option<f64>,
}

impl TryFrom<CreateOrderRequest> for Order {
    type Error = DomainError;

    fn try_from(req: CreateOrderRequest) -> Result<Self, Self::Error> {
        Order {
            customer_name: req.customer_name,
            address: req.address,
            phone: req.phone,
            restaurant_id: req.restaurant_id,
            items: req
                .items
                .into_iter()
                .map(|i| OrderItem {
                    menu_item_id: i.menu_item_id,
                    quantity: i.quantity,
                })
                .collect(),
            notes: req.notes,
            total: req.total,
        }
        .validated()
    }
}

/// POST /orders
///
/// Computes the total from menu prices unless the caller supplied one, then
/// stores the order. Unknown or malformed menu item ids reject the request
/// and nothing is stored.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = CreatedResponse),
        (status = 400, description = "Malformed or unknown menu item id", body = ErrorResponse),
        (status = 422, description = "Invalid order", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order = Order::try_from(body.into_inner())?;

    let id = web::block(move || service.create_order(order))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CreatedResponse { id: id.to_string() }))
}

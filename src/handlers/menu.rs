use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{effective_limit, CreatedResponse, ErrorResponse};
use crate::application::Stored;
use crate::domain::errors::DomainError;
use crate::domain::menu_item::MenuItem;
use crate::errors::AppError;
use crate::AppService;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMenuItemRequest {
    /// Id of the restaurant serving this dish.
    pub restaurant_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Price in dollars, at least 0.
    pub price: f64,
    pub image: Option<String>,
    #[serde(default = "default_flag")]
    pub vegetarian: Option<bool>,
    #[serde(default = "default_flag")]
    pub spicy: Option<bool>,
}

fn default_flag() -> Option<bool> {
    Some(false)
}

impl TryFrom<CreateMenuItemRequest> for MenuItem {
    type Error = DomainError;

    fn try_from(req: CreateMenuItemRequest) -> Result<Self, Self::Error> {
        MenuItem {
            restaurant_id: req.restaurant_id,
            name: req.name,
            description: req.description,
            price: req.price,
            image: req.image,
            vegetarian: req.vegetarian,
            spicy: req.spicy,
        }
        .validated()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub vegetarian: Option<bool>,
    pub spicy: Option<bool>,
}

impl From<Stored<MenuItem>> for MenuItemResponse {
    fn from(stored: Stored<MenuItem>) -> Self {
        let m = stored.record;
        Self {
            id: stored.id.to_string(),
            restaurant_id: m.restaurant_id,
            name: m.name,
            description: m.description,
            price: m.price,
            image: m.image,
            vegetarian: m.vegetarian,
            spicy: m.spicy,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMenuParams {
    /// Only return dishes of this restaurant.
    pub restaurant_id: Option<String>,
    /// Maximum number of dishes. Defaults to 50; 0 returns every dish.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// GET /menu
#[utoipa::path(
    get,
    path = "/menu",
    responses(
        (status = 200, description = "Menu items in creation order", body = Vec<MenuItemResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "menu"
)]
pub async fn list_menu(
    service: web::Data<AppService>,
    query: web::Query<ListMenuParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let limit = effective_limit(params.limit);

    let items = web::block(move || service.list_menu(params.restaurant_id, limit))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<MenuItemResponse> = items.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /menu
#[utoipa::path(
    post,
    path = "/menu",
    request_body = CreateMenuItemRequest,
    responses(
        (status = 201, description = "Menu item created", body = CreatedResponse),
        (status = 422, description = "Invalid menu item", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "menu"
)]
pub async fn create_menu_item(
    service: web::Data<AppService>,
    body: web::Json<CreateMenuItemRequest>,
) -> Result<HttpResponse, AppError> {
    let item = MenuItem::try_from(body.into_inner())?;

    let id = web::block(move || service.create_menu_item(item))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CreatedResponse { id: id.to_string() }))
}

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{effective_limit, CreatedResponse, ErrorResponse};
use crate::application::Stored;
use crate::domain::errors::DomainError;
use crate::domain::restaurant::{Restaurant, DEFAULT_DELIVERY_TIME, DEFAULT_RATING};
use crate::errors::AppError;
use crate::AppService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub description: Option<String>,
    /// Cover image URL
    pub image: Option<String>,
    /// Cuisine type, e.g. "Italian"
    pub cuisine: Option<String>,
    /// Average rating between 0 and 5. Defaults to 4.5.
    #[serde(default = "default_rating")]
    pub rating: Option<f64>,
    /// Estimated delivery time. Defaults to "25-35 min".
    #[serde(default = "default_delivery_time")]
    pub delivery_time: Option<String>,
}

fn default_rating() -> Option<f64> {
    Some(DEFAULT_RATING)
}

fn default_delivery_time() -> Option<String> {
    Some(DEFAULT_DELIVERY_TIME.to_string())
}

impl TryFrom<CreateRestaurantRequest> for Restaurant {
    type Error = DomainError;

    fn try_from(req: CreateRestaurantRequest) -> Result<Self, Self::Error> {
        Restaurant {
            name: req.name,
            description: req.description,
            image: req.image,
            cuisine: req.cuisine,
            rating: req.rating,
            delivery_time: req.delivery_time,
        }
        .validated()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub delivery_time: Option<String>,
}

impl From<Stored<Restaurant>> for RestaurantResponse {
    fn from(stored: Stored<Restaurant>) -> Self {
        let r = stored.record;
        Self {
            id: stored.id.to_string(),
            name: r.name,
            description: r.description,
            image: r.image,
            cuisine: r.cuisine,
            rating: r.rating,
            delivery_time: r.delivery_time,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRestaurantsParams {
    /// Maximum number of restaurants. Defaults to 20; 0 returns every restaurant.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    20
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /restaurants
#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "Restaurants in creation order", body = Vec<RestaurantResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "restaurants"
)]
pub async fn list_restaurants(
    service: web::Data<AppService>,
    query: web::Query<ListRestaurantsParams>,
) -> Result<HttpResponse, AppError> {
    let limit = effective_limit(query.limit);

    let restaurants = web::block(move || service.list_restaurants(limit))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<RestaurantResponse> = restaurants.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /restaurants
#[utoipa::path(
    post,
    path = "/restaurants",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created", body = CreatedResponse),
        (status = 422, description = "Invalid restaurant", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "restaurants"
)]
pub async fn create_restaurant(
    service: web::Data<AppService>,
    body: web::Json<CreateRestaurantRequest>,
) -> Result<HttpResponse, AppError> {
    let restaurant = Restaurant::try_from(body.into_inner())?;

    let id = web::block(move || service.create_restaurant(restaurant))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CreatedResponse { id: id.to_string() }))
}

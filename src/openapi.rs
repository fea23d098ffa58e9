use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Food Delivery API", version = "1.0.0"),
    paths(
        handlers::root::index,
        handlers::root::diagnostics,
        handlers::restaurants::list_restaurants,
        handlers::restaurants::create_restaurant,
        handlers::menu::list_menu,
        handlers::menu::create_menu_item,
        handlers::orders::create_order,
    ),
    tags(
        (name = "status", description = "Liveness and store diagnostics"),
        (name = "restaurants", description = "Restaurant catalogue"),
        (name = "menu", description = "Dishes offered by restaurants"),
        (name = "orders", description = "Order placement and pricing"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in ["/", "/test", "/restaurants", "/menu", "/orders"] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}

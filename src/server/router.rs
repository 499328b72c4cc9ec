use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

// `routes!` needs each handler's generated `__path_*` type in scope as well
use crate::server::{
    controller::{item::*, member::*, order::*, simple_order::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Shop API",
    description = "Members, items and orders, with order listings contrasting query strategies"
))]
struct ApiDoc;

/// Builds every API route plus Swagger UI at `/swagger-ui`.
///
/// `routes!` groups handlers sharing one path.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(save_member_v1, members_v1))
        .routes(routes!(save_member_v2, members_v2))
        .routes(routes!(update_member_v2, member_v2))
        .routes(routes!(create_item, list_items))
        .routes(routes!(get_item, update_item))
        .routes(routes!(place_order, orders_v1))
        .routes(routes!(cancel_order))
        .routes(routes!(orders_v2))
        .routes(routes!(orders_v3))
        .routes(routes!(orders_v3_page))
        .routes(routes!(orders_v4))
        .routes(routes!(orders_v5))
        .routes(routes!(orders_v6))
        .routes(routes!(simple_orders_v1))
        .routes(routes!(simple_orders_v2))
        .routes(routes!(simple_orders_v3))
        .routes(routes!(simple_orders_v4))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

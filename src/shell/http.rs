use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::response::Html;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::hotel::adapters::inbound::rest::{guests, reservations, rooms};
use crate::shell::graphql::AppSchema;
use crate::shell::state::AppState;

pub fn router(state: AppState, schema: AppSchema) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/guests", get(guests::list).post(guests::create))
        .route(
            "/guests/{id}",
            get(guests::get).put(guests::update).delete(guests::delete),
        )
        .route("/rooms", get(rooms::list).post(rooms::create))
        .route(
            "/rooms/{id}",
            get(rooms::get).put(rooms::update).delete(rooms::delete),
        )
        .route(
            "/reservations",
            get(reservations::list).post(reservations::create),
        )
        .route(
            "/reservations/{id}",
            get(reservations::get)
                .put(reservations::update)
                .delete(reservations::delete),
        )
        .route("/graphql", get(graphiql).post(graphql))
        .with_state(state)
        .layer(Extension(schema))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

async fn graphql(
    Extension(schema): Extension<AppSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

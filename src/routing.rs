//! Application router configuration with session-scoped and open route definitions.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState, Error, endpoints,
    session::session_guard,
    transaction::{
        create_transaction_endpoint, get_summary_endpoint, get_transaction_endpoint,
        get_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    // The summary route is matched before the `{transaction_id}` parameter
    // since static segments take priority.
    let session_routes = Router::new()
        .route(endpoints::TRANSACTIONS, get(get_transactions_endpoint))
        .route(endpoints::TRANSACTIONS_SUMMARY, get(get_summary_endpoint))
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint))
        .route_layer(middleware::from_fn(session_guard));

    // Creating a transaction starts a session if the client does not have one.
    let open_routes =
        Router::new().route(endpoints::TRANSACTIONS, post(create_transaction_endpoint));

    session_routes
        .merge(open_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}

//! Defines the endpoint for listing a session's transactions.

use axum::{
    Extension, Json,
    extract::State,
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::SessionId,
    transaction::{Transaction, core::get_transactions, state::TransactionState},
};

/// The response body for listing transactions.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// The session's transactions in the order they were created.
    pub transactions: Vec<Transaction>,
}

/// A route handler that returns every transaction of the caller's session.
///
/// Must be behind [session_guard](crate::session::session_guard).
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<TransactionsResponse>, Error> {
    let connection = state.connection()?;
    let transactions = get_transactions(session_id, &connection)?;

    Ok(Json(TransactionsResponse { transactions }))
}

//! Defines the endpoint for getting a single transaction.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::SessionId,
    transaction::{
        Transaction, core::get_transaction, form::parse_transaction_id, state::TransactionState,
    },
};

/// The response body for getting a single transaction.
///
/// The `transaction` key is left out when there is no matching transaction.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// The requested transaction, if it exists in the caller's session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
}

/// A route handler that returns the transaction `transaction_id` from the caller's session.
///
/// Responds with an empty object, not a 404, when the transaction does not
/// exist or belongs to another session.
///
/// Must be behind [session_guard](crate::session::session_guard).
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
    Path(transaction_id): Path<String>,
) -> Result<Json<TransactionResponse>, Error> {
    let id = parse_transaction_id(&transaction_id)?;

    let connection = state.connection()?;
    let transaction = get_transaction(id, session_id, &connection)?;

    Ok(Json(TransactionResponse { transaction }))
}

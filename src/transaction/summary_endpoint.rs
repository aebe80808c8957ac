//! Defines the endpoint for the balance of a session.

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::SessionId,
    transaction::{Summary, core::get_summary, state::TransactionState},
};

/// The response body for the balance summary.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The balance of the caller's session.
    pub summary: Summary,
}

/// A route handler that returns the sum of the caller's transactions.
///
/// Must be behind [session_guard](crate::session::session_guard).
pub async fn get_summary_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<SummaryResponse>, Error> {
    let connection = state.connection()?;
    let summary = get_summary(session_id, &connection)?;

    Ok(Json(SummaryResponse { summary }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Extension, extract::State};
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        session::SessionId,
        transaction::{
            NewTransaction, Summary, TransactionType, create_transaction, get_summary_endpoint,
            state::TransactionState,
        },
    };

    fn get_test_state() -> TransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        TransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn empty_session_has_zero_balance() {
        let state = get_test_state();

        let response = get_summary_endpoint(State(state), Extension(SessionId::new()))
            .await
            .unwrap();

        assert_eq!(response.0.summary, Summary { amount: 0.0 });
    }

    #[tokio::test]
    async fn balance_sums_signed_amounts() {
        let state = get_test_state();
        let session_id = SessionId::new();
        {
            let connection = state.db_connection.lock().unwrap();
            for (amount, transaction_type) in [
                (10.0, TransactionType::Credit),
                (2.5, TransactionType::Debit),
                (0.5, TransactionType::Debit),
            ] {
                create_transaction(
                    NewTransaction::new("test", amount, transaction_type).unwrap(),
                    session_id,
                    &connection,
                )
                .unwrap();
            }
        }

        let response = get_summary_endpoint(State(state), Extension(session_id))
            .await
            .unwrap();

        assert_eq!(response.0.summary, Summary { amount: 7.0 });
    }
}

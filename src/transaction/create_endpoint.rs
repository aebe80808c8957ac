//! Defines the endpoint for creating a new transaction.

use axum::{body::Bytes, extract::State, http::StatusCode};
use axum_extra::extract::CookieJar;

use crate::{
    Error,
    session::{SessionId, get_session_id, set_session_cookie},
    transaction::{
        core::create_transaction, form::CreateTransactionForm, state::TransactionState,
    },
};

/// A route handler for creating a new transaction, responds with 201 Created and an empty body.
///
/// The body is validated before anything else happens, so an invalid request
/// neither writes to the database nor starts a session. A client without a
/// session is given a new session cookie. An existing session cookie is left
/// untouched.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, StatusCode), Error> {
    let new_transaction = CreateTransactionForm::from_json(&body)?.validate()?;

    let (session_id, jar) = match get_session_id(&jar) {
        Some(session_id) => (session_id, jar),
        None => {
            let session_id = SessionId::new();
            tracing::debug!("Starting new session {session_id}");
            (session_id, set_session_cookie(jar, session_id))
        }
    };

    let connection = state.connection()?;
    create_transaction(new_transaction, session_id, &connection)?;

    Ok((jar, StatusCode::CREATED))
}

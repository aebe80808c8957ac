//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, OptionalExtension, Row, types::Type};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, session::SessionId, transaction::form::NewTransaction};

// ============================================================================
// MODELS
// ============================================================================

/// A credit or debit recorded against a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, generated by the server.
    pub id: Uuid,
    /// A text description of what the transaction was for.
    pub title: String,
    /// The signed amount of the transaction.
    ///
    /// Positive values are credits, negative values are debits.
    pub amount: f64,
    /// The session that created the transaction.
    pub session_id: SessionId,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Whether a transaction adds money to or removes money from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Credit,
    /// Money going out.
    Debit,
}

impl TransactionType {
    /// Fold the transaction type into the sign of `magnitude`.
    ///
    /// `magnitude` is expected to be non-negative.
    pub fn signed_amount(self, magnitude: f64) -> f64 {
        match self {
            TransactionType::Credit => magnitude,
            TransactionType::Debit => -magnitude,
        }
    }
}

/// The balance of a session, i.e. credits minus debits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of the signed amounts of the session's transactions.
    pub amount: f64,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Record a new transaction for `session_id`.
///
/// The ID and creation time are generated here and the amount is stored with
/// the sign given by the transaction's type.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    session_id: SessionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let id = Uuid::new_v4();
    let amount = new_transaction
        .transaction_type
        .signed_amount(new_transaction.amount);

    let transaction = connection
        .prepare(
            "INSERT INTO transactions (id, title, amount, session_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, title, amount, session_id, created_at",
        )?
        .query_row(
            (
                id.to_string(),
                new_transaction.title,
                amount,
                session_id.to_string(),
                OffsetDateTime::now_utc(),
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve every transaction created by `session_id`, in the order they were stored.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transactions(
    session_id: SessionId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, title, amount, session_id, created_at FROM transactions
             WHERE session_id = :session_id
             ORDER BY rowid",
        )?
        .query_map(
            &[(":session_id", &session_id.to_string())],
            map_transaction_row,
        )?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve the transaction `id` if it belongs to `session_id`.
///
/// Returns `None` both when no transaction has the ID and when the
/// transaction belongs to another session, so callers cannot probe for IDs
/// outside their own session.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transaction(
    id: Uuid,
    session_id: SessionId,
    connection: &Connection,
) -> Result<Option<Transaction>, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, title, amount, session_id, created_at FROM transactions
             WHERE id = :id AND session_id = :session_id",
        )?
        .query_row(
            &[
                (":id", &id.to_string()),
                (":session_id", &session_id.to_string()),
            ],
            map_transaction_row,
        )
        .optional()?;

    Ok(transaction)
}

/// Sum the amounts of every transaction created by `session_id`.
///
/// A session without transactions has a balance of zero.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_summary(session_id: SessionId, connection: &Connection) -> Result<Summary, Error> {
    // SUM over zero rows is NULL, not zero.
    let total: Option<f64> = connection.query_row(
        "SELECT SUM(amount) FROM transactions WHERE session_id = :session_id",
        &[(":session_id", &session_id.to_string())],
        |row| row.get(0),
    )?;

    Ok(Summary {
        amount: total.unwrap_or(0.0),
    })
}

/// Create the transactions table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                session_id TEXT NOT NULL,
                created_at TEXT NOT NULL
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_session_id ON transactions(session_id);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = parse_uuid_column(row, 0)?;
    let title = row.get(1)?;
    let amount = row.get(2)?;
    let session_id = SessionId::from(parse_uuid_column(row, 3)?);
    let created_at = row.get(4)?;

    Ok(Transaction {
        id,
        title,
        amount,
        session_id,
        created_at,
    })
}

fn parse_uuid_column(row: &Row, index: usize) -> Result<Uuid, rusqlite::Error> {
    let text: String = row.get(index)?;

    Uuid::parse_str(&text)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error)))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use uuid::Uuid;

    use crate::{
        db::initialize,
        session::SessionId,
        transaction::{
            NewTransaction, Summary, TransactionType, create_transaction, get_summary,
            get_transaction, get_transactions,
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn new_transaction(amount: f64, transaction_type: TransactionType) -> NewTransaction {
        NewTransaction::new("test transaction", amount, transaction_type).unwrap()
    }

    #[test]
    fn credit_is_stored_as_positive_amount() {
        let conn = get_test_connection();

        let transaction = create_transaction(
            new_transaction(12.3, TransactionType::Credit),
            SessionId::new(),
            &conn,
        )
        .unwrap();

        assert_eq!(transaction.amount, 12.3);
    }

    #[test]
    fn debit_is_stored_as_negative_amount() {
        let conn = get_test_connection();

        let transaction = create_transaction(
            new_transaction(12.3, TransactionType::Debit),
            SessionId::new(),
            &conn,
        )
        .unwrap();

        assert_eq!(transaction.amount, -12.3);
    }

    #[test]
    fn create_assigns_session_and_unique_ids() {
        let conn = get_test_connection();
        let session_id = SessionId::new();

        let first = create_transaction(
            new_transaction(1.0, TransactionType::Credit),
            session_id,
            &conn,
        )
        .unwrap();
        let second = create_transaction(
            new_transaction(1.0, TransactionType::Credit),
            session_id,
            &conn,
        )
        .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.session_id, session_id);
        assert_eq!(second.session_id, session_id);
    }

    #[test]
    fn get_transactions_returns_only_own_session_in_storage_order() {
        let conn = get_test_connection();
        let session_id = SessionId::new();
        let other_session_id = SessionId::new();
        let mut want = Vec::new();
        for i in 1..=5 {
            want.push(
                create_transaction(
                    new_transaction(i as f64, TransactionType::Credit),
                    session_id,
                    &conn,
                )
                .unwrap(),
            );
            create_transaction(
                new_transaction(i as f64, TransactionType::Debit),
                other_session_id,
                &conn,
            )
            .unwrap();
        }

        let got = get_transactions(session_id, &conn).unwrap();

        assert_eq!(got, want);
    }

    #[test]
    fn get_transactions_for_unknown_session_is_empty() {
        let conn = get_test_connection();
        create_transaction(
            new_transaction(1.0, TransactionType::Credit),
            SessionId::new(),
            &conn,
        )
        .unwrap();

        let got = get_transactions(SessionId::new(), &conn).unwrap();

        assert_eq!(got, vec![]);
    }

    #[test]
    fn get_transaction_from_own_session() {
        let conn = get_test_connection();
        let session_id = SessionId::new();
        let want = create_transaction(
            new_transaction(42.0, TransactionType::Debit),
            session_id,
            &conn,
        )
        .unwrap();

        let got = get_transaction(want.id, session_id, &conn).unwrap();

        assert_eq!(got, Some(want));
    }

    #[test]
    fn get_transaction_from_other_session_looks_like_missing_id() {
        let conn = get_test_connection();
        let transaction = create_transaction(
            new_transaction(42.0, TransactionType::Debit),
            SessionId::new(),
            &conn,
        )
        .unwrap();
        let other_session_id = SessionId::new();

        let wrong_session = get_transaction(transaction.id, other_session_id, &conn).unwrap();
        let missing_id = get_transaction(Uuid::new_v4(), other_session_id, &conn).unwrap();

        assert_eq!(wrong_session, None);
        assert_eq!(wrong_session, missing_id);
    }

    #[test]
    fn summary_of_empty_session_is_zero() {
        let conn = get_test_connection();

        let summary = get_summary(SessionId::new(), &conn).unwrap();

        assert_eq!(summary, Summary { amount: 0.0 });
    }

    #[test]
    fn summary_is_credits_minus_debits() {
        let conn = get_test_connection();
        let session_id = SessionId::new();
        create_transaction(
            new_transaction(100.0, TransactionType::Credit),
            session_id,
            &conn,
        )
        .unwrap();
        create_transaction(
            new_transaction(30.0, TransactionType::Debit),
            session_id,
            &conn,
        )
        .unwrap();
        create_transaction(
            new_transaction(500.0, TransactionType::Credit),
            SessionId::new(),
            &conn,
        )
        .unwrap();

        let summary = get_summary(session_id, &conn).unwrap();

        assert_eq!(summary, Summary { amount: 70.0 });
    }
}

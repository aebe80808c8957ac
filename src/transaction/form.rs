//! Validation of client input for transactions.
//!
//! Request bodies and path parameters are turned into typed values here,
//! before anything touches the database.

use serde::Deserialize;
use uuid::Uuid;

use crate::{Error, transaction::TransactionType};

/// The JSON body for creating a transaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateTransactionForm {
    /// Text detailing the transaction.
    pub title: String,
    /// The size of the transaction, without a sign.
    pub amount: f64,
    /// Whether the amount is added to or removed from the balance.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl CreateTransactionForm {
    /// Parse a JSON request body into a form.
    ///
    /// # Errors
    /// Returns an [Error::Validation] if the body is not JSON, or if a field
    /// is missing or has the wrong type.
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|error| Error::Validation(error.to_string()))
    }

    /// Check the form's field values.
    ///
    /// # Errors
    /// Returns an [Error::Validation] under the same conditions as [NewTransaction::new].
    pub fn validate(self) -> Result<NewTransaction, Error> {
        NewTransaction::new(&self.title, self.amount, self.transaction_type)
    }
}

/// A transaction that has been validated but not yet stored.
///
/// Use [NewTransaction::new] or [CreateTransactionForm::validate] to create one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub(crate) title: String,
    pub(crate) amount: f64,
    pub(crate) transaction_type: TransactionType,
}

impl NewTransaction {
    /// Create a new transaction from its fields.
    ///
    /// # Errors
    /// Returns an [Error::Validation] if:
    /// - `title` is empty,
    /// - or `amount` is negative, NaN or infinite.
    pub fn new(
        title: &str,
        amount: f64,
        transaction_type: TransactionType,
    ) -> Result<Self, Error> {
        if title.is_empty() {
            return Err(Error::Validation("title cannot be empty".to_owned()));
        }

        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::Validation(format!(
                "amount must be a non-negative number, got {amount}"
            )));
        }

        Ok(Self {
            title: title.to_owned(),
            amount,
            transaction_type,
        })
    }

    /// The text detailing the transaction.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The size of the transaction, without a sign.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Whether the amount is added to or removed from the balance.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }
}

/// Parse the transaction ID from a URL path parameter.
///
/// # Errors
/// Returns an [Error::Validation] if `id` is not a UUID.
pub fn parse_transaction_id(id: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(id).map_err(|_| Error::Validation(format!("id must be a UUID, got {id:?}")))
}

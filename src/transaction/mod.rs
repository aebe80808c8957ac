//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validated `NewTransaction` input
//! - Database functions for storing and querying a session's transactions
//! - Route handlers for the transaction API

mod core;
mod create_endpoint;
mod form;
mod get_endpoint;
mod list_endpoint;
mod state;
mod summary_endpoint;

pub use self::core::{
    Summary, Transaction, TransactionType, create_transaction, create_transaction_table,
    get_summary, get_transaction, get_transactions, map_transaction_row,
};
pub use create_endpoint::create_transaction_endpoint;
pub use form::{CreateTransactionForm, NewTransaction, parse_transaction_id};
pub use get_endpoint::{TransactionResponse, get_transaction_endpoint};
pub use list_endpoint::{TransactionsResponse, get_transactions_endpoint};
pub use state::TransactionState;
pub use summary_endpoint::{SummaryResponse, get_summary_endpoint};

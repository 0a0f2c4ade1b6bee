pub mod forms;
pub mod ledger_table;

pub use forms::{InvoicePaymentForm, TransactionForm};
pub use ledger_table::LedgerTable;

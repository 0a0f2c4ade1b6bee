use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod amount;
pub mod formatting;
pub mod invoice_payment;
pub mod options;
pub mod transaction;

pub use amount::coerce_amount;
pub use formatting::{format_amount, format_date_for_display};
pub use invoice_payment::{
    InvoicePayment, InvoicePaymentFieldUpdate, InvoicePaymentFormState, InvoicePaymentSummary, PendingInvoice,
};
pub use options::{Category, PaymentMethod, TransactionType};
pub use transaction::{FormMode, Transaction, TransactionFieldUpdate, TransactionFormState, TransactionSummary};

/// Errors raised while reading option labels coming back from the form controls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Display and diagnostics settings shared by both modals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    pub currency_symbol: String,
    pub thousands_separator: String,
    pub enable_debug_logging: bool,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            enable_debug_logging: false,
        }
    }
}

/// Visibility of a modal as driven by the host. A closed modal remembers
/// how it was last left, `None` until it has been opened once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed(Option<FormOutcome>),
    Open,
}

impl Default for FormPhase {
    fn default() -> Self {
        FormPhase::Closed(None)
    }
}

/// How a modal left the open phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Submitted,
    Cancelled,
}

impl FormPhase {
    pub fn is_open(&self) -> bool {
        matches!(self, FormPhase::Open)
    }

    /// Opening an already open modal keeps it open
    pub fn open(self) -> FormPhase {
        FormPhase::Open
    }

    /// Both submit and cancel lead back to closed
    pub fn finish(self, outcome: FormOutcome) -> FormPhase {
        FormPhase::Closed(Some(outcome))
    }

    /// Outcome of the last session; cleared while the modal is open
    pub fn last_outcome(&self) -> Option<FormOutcome> {
        match self {
            FormPhase::Closed(outcome) => *outcome,
            FormPhase::Open => None,
        }
    }
}

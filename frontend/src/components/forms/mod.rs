pub mod field_events;
pub mod invoice_payment_form;
pub mod pending_invoice_list;
pub mod transaction_form;
pub mod transaction_type_toggle;

pub use invoice_payment_form::InvoicePaymentForm;
pub use pending_invoice_list::PendingInvoiceList;
pub use transaction_form::TransactionForm;
pub use transaction_type_toggle::TransactionTypeToggle;

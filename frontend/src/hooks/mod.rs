pub mod use_invoice_payment_form;
pub mod use_transaction_form;

pub use use_invoice_payment_form::use_invoice_payment_form;
pub use use_transaction_form::use_transaction_form;

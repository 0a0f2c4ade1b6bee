use serde::{Deserialize, Serialize};

use crate::amount::coerce_amount;
use crate::options::{Category, PaymentMethod};

/// Payment of a supplier invoice, as handed to the save callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayment {
    pub invoice_number: String,
    pub supplier: String,
    pub description: String,
    /// Never negative
    pub amount: f64,
    /// ISO date (YYYY-MM-DD) or empty
    pub due_date: String,
    pub payment_method: PaymentMethod,
    pub category: Category,
    /// ISO date (YYYY-MM-DD)
    pub payment_date: String,
}

impl InvoicePayment {
    pub const DEFAULT_PAYMENT_METHOD: PaymentMethod = PaymentMethod::Transferencia;
    pub const DEFAULT_CATEGORY: Category = Category::Proveedores;

    /// Blank payment dated `today`
    pub fn new(today: &str) -> Self {
        Self {
            invoice_number: String::new(),
            supplier: String::new(),
            description: String::new(),
            amount: 0.0,
            due_date: String::new(),
            payment_method: Self::DEFAULT_PAYMENT_METHOD,
            category: Self::DEFAULT_CATEGORY,
            payment_date: today.to_string(),
        }
    }
}

/// Supplier invoice that is owed but not yet paid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingInvoice {
    pub id: String,
    pub supplier: String,
    pub description: String,
    pub amount: f64,
    pub due_date: String,
}

/// One edit to one field of the invoice payment form
#[derive(Debug, Clone, PartialEq)]
pub enum InvoicePaymentFieldUpdate {
    InvoiceNumber(String),
    Supplier(String),
    Description(String),
    /// Raw text of the amount control
    Amount(String),
    DueDate(String),
    PaymentMethod(PaymentMethod),
    Category(Category),
    PaymentDate(String),
}

/// Lines of the "Resumen del Gasto" panel
#[derive(Debug, Clone, PartialEq)]
pub struct InvoicePaymentSummary {
    pub supplier: String,
    pub amount: f64,
    pub category: Category,
    pub payment_method: PaymentMethod,
    pub payment_date: Option<String>,
}

/// Local state of an open invoice payment modal
#[derive(Debug, Clone, PartialEq)]
pub struct InvoicePaymentFormState {
    pub payment: InvoicePayment,
    /// Id of the highlighted pending invoice, compared by equality
    pub selected_pending_invoice: Option<String>,
}

impl InvoicePaymentFormState {
    pub fn new(today: &str) -> Self {
        Self {
            payment: InvoicePayment::new(today),
            selected_pending_invoice: None,
        }
    }

    pub fn reset(&mut self, today: &str) {
        *self = Self::new(today);
    }

    /// Follow the modal's `open` flag. Opening always starts from defaults,
    /// closing keeps the fields. Returns whether the fields were reset.
    pub fn on_open_change(&mut self, open: bool, today: &str) -> bool {
        if open {
            self.reset(today);
        }
        open
    }

    pub fn apply(&mut self, update: InvoicePaymentFieldUpdate) {
        let payment = &mut self.payment;
        match update {
            InvoicePaymentFieldUpdate::InvoiceNumber(value) => payment.invoice_number = value,
            InvoicePaymentFieldUpdate::Supplier(value) => payment.supplier = value,
            InvoicePaymentFieldUpdate::Description(value) => payment.description = value,
            InvoicePaymentFieldUpdate::Amount(raw) => payment.amount = coerce_amount(&raw),
            InvoicePaymentFieldUpdate::DueDate(value) => payment.due_date = value,
            InvoicePaymentFieldUpdate::PaymentMethod(method) => payment.payment_method = method,
            InvoicePaymentFieldUpdate::Category(category) => payment.category = category,
            InvoicePaymentFieldUpdate::PaymentDate(value) => payment.payment_date = value,
        }
    }

    /// Prefill from the pending invoice with the given id.
    ///
    /// Payment method, category and payment date are left alone. Returns
    /// false, changing nothing, when no invoice has that id.
    pub fn select_pending_invoice(&mut self, invoice_id: &str, pending_invoices: &[PendingInvoice]) -> bool {
        let Some(invoice) = pending_invoices.iter().find(|inv| inv.id == invoice_id) else {
            return false;
        };

        self.payment.invoice_number = invoice.id.clone();
        self.payment.supplier = invoice.supplier.clone();
        self.payment.description = invoice.description.clone();
        self.payment.amount = invoice.amount;
        self.payment.due_date = invoice.due_date.clone();
        self.selected_pending_invoice = Some(invoice.id.clone());
        true
    }

    pub fn is_selected(&self, invoice_id: &str) -> bool {
        self.selected_pending_invoice.as_deref() == Some(invoice_id)
    }

    /// Hand the current payment to `on_save`, then call `on_close`, then
    /// clear the form back to defaults dated `today`.
    pub fn submit<S, C>(&mut self, today: &str, on_save: S, on_close: C)
    where
        S: FnOnce(InvoicePayment),
        C: FnOnce(),
    {
        on_save(self.payment.clone());
        on_close();
        self.reset(today);
    }

    pub fn summary(&self) -> InvoicePaymentSummary {
        let payment = &self.payment;
        InvoicePaymentSummary {
            supplier: if payment.supplier.is_empty() {
                "No especificado".to_string()
            } else {
                payment.supplier.clone()
            },
            amount: payment.amount,
            category: payment.category,
            payment_method: payment.payment_method,
            payment_date: (!payment.payment_date.is_empty()).then(|| payment.payment_date.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const TODAY: &str = "2024-02-15";

    fn acme_gloves() -> Vec<PendingInvoice> {
        vec![PendingInvoice {
            id: "inv1".to_string(),
            supplier: "ACME".to_string(),
            description: "Gloves".to_string(),
            amount: 50000.0,
            due_date: "2024-03-01".to_string(),
        }]
    }

    #[test]
    fn test_new_form_has_defaults() {
        let state = InvoicePaymentFormState::new(TODAY);
        assert_eq!(state.payment.invoice_number, "");
        assert_eq!(state.payment.amount, 0.0);
        assert_eq!(state.payment.due_date, "");
        assert_eq!(state.payment.payment_method, PaymentMethod::Transferencia);
        assert_eq!(state.payment.category, Category::Proveedores);
        assert_eq!(state.payment.payment_date, TODAY);
        assert_eq!(state.selected_pending_invoice, None);
    }

    #[test]
    fn test_apply_updates_single_field() {
        let mut state = InvoicePaymentFormState::new(TODAY);
        state.apply(InvoicePaymentFieldUpdate::Supplier("Dental Depot".to_string()));
        state.apply(InvoicePaymentFieldUpdate::PaymentMethod(PaymentMethod::Nequi));
        state.apply(InvoicePaymentFieldUpdate::Category(Category::Seguros));
        state.apply(InvoicePaymentFieldUpdate::DueDate("2024-04-30".to_string()));

        assert_eq!(state.payment.supplier, "Dental Depot");
        assert_eq!(state.payment.payment_method, PaymentMethod::Nequi);
        assert_eq!(state.payment.category, Category::Seguros);
        assert_eq!(state.payment.due_date, "2024-04-30");
        assert_eq!(state.payment.invoice_number, "");
    }

    #[test]
    fn test_non_numeric_amount_stores_zero() {
        let mut state = InvoicePaymentFormState::new(TODAY);
        state.apply(InvoicePaymentFieldUpdate::Amount("1200".to_string()));
        assert_eq!(state.payment.amount, 1200.0);

        state.apply(InvoicePaymentFieldUpdate::Amount("lots".to_string()));
        assert_eq!(state.payment.amount, 0.0);
    }

    #[test]
    fn test_select_pending_invoice_keeps_payment_fields() {
        let mut state = InvoicePaymentFormState::new(TODAY);
        state.apply(InvoicePaymentFieldUpdate::PaymentMethod(PaymentMethod::Cheque));
        state.apply(InvoicePaymentFieldUpdate::Category(Category::Alquiler));
        state.apply(InvoicePaymentFieldUpdate::PaymentDate("2024-02-20".to_string()));

        assert!(state.select_pending_invoice("inv1", &acme_gloves()));

        assert_eq!(state.payment.invoice_number, "inv1");
        assert_eq!(state.payment.supplier, "ACME");
        assert_eq!(state.payment.description, "Gloves");
        assert_eq!(state.payment.amount, 50000.0);
        assert_eq!(state.payment.due_date, "2024-03-01");
        assert_eq!(state.payment.payment_method, PaymentMethod::Cheque);
        assert_eq!(state.payment.category, Category::Alquiler);
        assert_eq!(state.payment.payment_date, "2024-02-20");
        assert!(state.is_selected("inv1"));
        assert!(!state.is_selected("inv2"));
    }

    #[test]
    fn test_select_unknown_invoice_changes_nothing() {
        let mut state = InvoicePaymentFormState::new(TODAY);
        state.apply(InvoicePaymentFieldUpdate::Supplier("Manual".to_string()));
        let before = state.clone();

        assert!(!state.select_pending_invoice("missing", &acme_gloves()));
        assert!(!state.select_pending_invoice("inv1", &[]));
        assert_eq!(state, before);
    }

    #[test]
    fn test_opening_discards_previous_session() {
        let mut state = InvoicePaymentFormState::new(TODAY);
        state.select_pending_invoice("inv1", &acme_gloves());
        state.apply(InvoicePaymentFieldUpdate::PaymentDate("2024-02-20".to_string()));

        // Cancelled half-filled session: closing keeps the fields
        assert!(!state.on_open_change(false, TODAY));
        assert_eq!(state.payment.supplier, "ACME");

        assert!(state.on_open_change(true, "2024-03-01"));
        assert_eq!(state, InvoicePaymentFormState::new("2024-03-01"));
        assert!(!state.is_selected("inv1"));
    }

    #[test]
    fn test_submit_saves_then_closes_then_resets() {
        let calls = RefCell::new(Vec::new());
        let mut state = InvoicePaymentFormState::new(TODAY);
        state.select_pending_invoice("inv1", &acme_gloves());

        state.submit(
            "2024-02-16",
            |payment| calls.borrow_mut().push(format!("save:{}", payment.invoice_number)),
            || calls.borrow_mut().push("close".to_string()),
        );

        assert_eq!(*calls.borrow(), vec!["save:inv1".to_string(), "close".to_string()]);
        assert_eq!(state, InvoicePaymentFormState::new("2024-02-16"));
    }

    #[test]
    fn test_repeated_submits_are_not_debounced() {
        let saves = RefCell::new(0);
        let closes = RefCell::new(0);
        let mut state = InvoicePaymentFormState::new(TODAY);

        for _ in 0..3 {
            state.submit(TODAY, |_| *saves.borrow_mut() += 1, || *closes.borrow_mut() += 1);
        }

        assert_eq!(*saves.borrow(), 3);
        assert_eq!(*closes.borrow(), 3);
    }

    #[test]
    fn test_pending_invoice_prefill_end_to_end() {
        let saved = RefCell::new(None);
        let mut state = InvoicePaymentFormState::new(TODAY);
        state.select_pending_invoice("inv1", &acme_gloves());
        state.submit(TODAY, |payment| *saved.borrow_mut() = Some(payment), || {});

        let json = serde_json::to_value(saved.into_inner().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "invoiceNumber": "inv1",
                "supplier": "ACME",
                "description": "Gloves",
                "amount": 50000.0,
                "dueDate": "2024-03-01",
                "paymentMethod": "Transferencia",
                "category": "Proveedores",
                "paymentDate": TODAY,
            })
        );
    }

    #[test]
    fn test_summary_placeholders() {
        let mut state = InvoicePaymentFormState::new("");
        let summary = state.summary();
        assert_eq!(summary.supplier, "No especificado");
        assert_eq!(summary.payment_date, None);

        state.apply(InvoicePaymentFieldUpdate::Supplier("ACME".to_string()));
        state.apply(InvoicePaymentFieldUpdate::PaymentDate(TODAY.to_string()));
        let summary = state.summary();
        assert_eq!(summary.supplier, "ACME");
        assert_eq!(summary.payment_date.as_deref(), Some(TODAY));
    }
}

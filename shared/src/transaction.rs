use serde::{Deserialize, Serialize};

use crate::amount::coerce_amount;
use crate::options::{Category, PaymentMethod, TransactionType};

/// Income or expense ledger entry.
///
/// Read as the edit target and emitted by the save callback. `id` is only
/// present for an entry that already exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Label from the category list matching `transaction_type`
    pub category: String,
    pub description: String,
    /// Never negative
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub reference: String,
}

impl Transaction {
    pub const DEFAULT_PAYMENT_METHOD: PaymentMethod = PaymentMethod::Efectivo;

    /// Whether `category` is one of the options for `transaction_type`
    pub fn has_valid_category(&self) -> bool {
        self.category
            .parse::<Category>()
            .map(|category| category.transaction_type() == self.transaction_type)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Nueva Transacción",
            FormMode::Edit => "Editar Transacción",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            FormMode::Create => "Registrar nuevo ingreso o gasto",
            FormMode::Edit => "Modificar movimiento financiero",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Guardar Transacción",
            FormMode::Edit => "Actualizar Transacción",
        }
    }
}

/// One edit to one field of the transaction form.
///
/// The type is not here: changing it goes through
/// [`TransactionFormState::set_type`] so the category is always cleared.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionFieldUpdate {
    Date(String),
    Category(String),
    Description(String),
    /// Raw text of the amount control
    Amount(String),
    PaymentMethod(PaymentMethod),
    Reference(String),
}

/// Lines of the "Resumen de la Transacción" panel
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSummary {
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub category: String,
    pub payment_method: PaymentMethod,
}

/// Local state of an open transaction modal
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFormState {
    pub mode: FormMode,
    pub id: Option<String>,
    pub date: String,
    pub transaction_type: TransactionType,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub reference: String,
}

impl TransactionFormState {
    /// Blank create-mode form dated `today`
    pub fn new(today: &str) -> Self {
        Self {
            mode: FormMode::Create,
            id: None,
            date: today.to_string(),
            transaction_type: TransactionType::Expense,
            category: String::new(),
            description: String::new(),
            amount: 0.0,
            payment_method: Transaction::DEFAULT_PAYMENT_METHOD,
            reference: String::new(),
        }
    }

    /// Fields for a freshly opened modal: a copy of the edit target when
    /// there is one, create-mode defaults otherwise.
    pub fn seeded(editing: Option<&Transaction>, today: &str) -> Self {
        match editing {
            Some(transaction) => Self {
                mode: FormMode::Edit,
                id: transaction.id.clone(),
                date: transaction.date.clone(),
                transaction_type: transaction.transaction_type,
                category: transaction.category.clone(),
                description: transaction.description.clone(),
                amount: transaction.amount,
                payment_method: transaction.payment_method,
                reference: transaction.reference.clone(),
            },
            None => Self::new(today),
        }
    }

    /// Start over from `seeded` after the edit target or the `open` flag
    /// changed. Unsaved edits are dropped either way.
    pub fn reseed(&mut self, editing: Option<&Transaction>, today: &str) {
        *self = Self::seeded(editing, today);
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn apply(&mut self, update: TransactionFieldUpdate) {
        match update {
            TransactionFieldUpdate::Date(value) => self.date = value,
            TransactionFieldUpdate::Category(value) => self.category = value,
            TransactionFieldUpdate::Description(value) => self.description = value,
            TransactionFieldUpdate::Amount(raw) => self.amount = coerce_amount(&raw),
            TransactionFieldUpdate::PaymentMethod(method) => self.payment_method = method,
            TransactionFieldUpdate::Reference(value) => self.reference = value,
        }
    }

    /// Switch income/expense. The category is cleared every time, even when
    /// the type does not change.
    pub fn set_type(&mut self, transaction_type: TransactionType) {
        self.transaction_type = transaction_type;
        self.category.clear();
    }

    pub fn category_options(&self) -> &'static [Category] {
        Category::options_for(self.transaction_type)
    }

    pub fn to_transaction(&self) -> Transaction {
        Transaction {
            id: self.id.clone(),
            date: self.date.clone(),
            transaction_type: self.transaction_type,
            category: self.category.clone(),
            description: self.description.clone(),
            amount: self.amount,
            payment_method: self.payment_method,
            reference: self.reference.clone(),
        }
    }

    /// Hand the current transaction to `on_save`, then call `on_close`.
    /// The fields are left as they are.
    pub fn submit<S, C>(&self, on_save: S, on_close: C)
    where
        S: FnOnce(Transaction),
        C: FnOnce(),
    {
        on_save(self.to_transaction());
        on_close();
    }

    pub fn summary(&self) -> TransactionSummary {
        TransactionSummary {
            transaction_type: self.transaction_type,
            amount: self.amount,
            category: if self.category.is_empty() {
                "No seleccionada".to_string()
            } else {
                self.category.clone()
            },
            payment_method: self.payment_method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const TODAY: &str = "2024-02-15";

    fn consultation() -> Transaction {
        Transaction {
            id: Some("t1".to_string()),
            date: "2024-01-01".to_string(),
            transaction_type: TransactionType::Income,
            category: "Consultas".to_string(),
            description: "x".to_string(),
            amount: 100.0,
            payment_method: PaymentMethod::Efectivo,
            reference: String::new(),
        }
    }

    #[test]
    fn test_seeded_without_target_uses_create_defaults() {
        let state = TransactionFormState::seeded(None, TODAY);
        assert_eq!(state.mode(), FormMode::Create);
        assert_eq!(state.id, None);
        assert_eq!(state.date, TODAY);
        assert_eq!(state.transaction_type, TransactionType::Expense);
        assert_eq!(state.category, "");
        assert_eq!(state.description, "");
        assert_eq!(state.amount, 0.0);
        assert_eq!(state.payment_method, PaymentMethod::Efectivo);
        assert_eq!(state.reference, "");
    }

    #[test]
    fn test_seeded_from_edit_target_copies_every_field() {
        let target = consultation();
        let state = TransactionFormState::seeded(Some(&target), TODAY);

        assert_eq!(state.mode(), FormMode::Edit);
        assert_eq!(state.to_transaction(), target);
        assert_eq!(state.mode().submit_label(), "Actualizar Transacción");
        assert_eq!(state.mode().heading(), "Editar Transacción");
    }

    #[test]
    fn test_edit_target_without_id_is_still_edit_mode() {
        let target = Transaction { id: None, ..consultation() };
        let state = TransactionFormState::seeded(Some(&target), TODAY);
        assert_eq!(state.mode(), FormMode::Edit);
        assert_eq!(state.mode().submit_label(), "Actualizar Transacción");
        assert_eq!(state.to_transaction().id, None);
    }

    #[test]
    fn test_reseed_drops_unsaved_edits() {
        let target = consultation();
        let mut state = TransactionFormState::seeded(Some(&target), TODAY);
        state.set_type(TransactionType::Expense);
        state.apply(TransactionFieldUpdate::Amount("99".to_string()));

        // Reopening on the same target shows the stored record again
        state.reseed(Some(&target), TODAY);
        assert_eq!(state, TransactionFormState::seeded(Some(&target), TODAY));
        assert_eq!(state.to_transaction(), target);

        // Switching to create mode clears the edit fields and the id
        state.reseed(None, TODAY);
        assert_eq!(state.mode(), FormMode::Create);
        assert_eq!(state, TransactionFormState::new(TODAY));
        assert!(state.to_transaction().id.is_none());
    }

    #[test]
    fn test_edit_target_without_reference_deserializes_to_empty() {
        let target: Transaction = serde_json::from_value(serde_json::json!({
            "id": "t1",
            "date": "2024-01-01",
            "type": "income",
            "category": "Consultas",
            "description": "x",
            "amount": 100,
            "paymentMethod": "Efectivo"
        }))
        .unwrap();

        let state = TransactionFormState::seeded(Some(&target), TODAY);
        assert_eq!(state.reference, "");
        assert_eq!(state.to_transaction(), consultation());
    }

    #[test]
    fn test_set_type_clears_category() {
        let mut state = TransactionFormState::new(TODAY);
        state.set_type(TransactionType::Income);
        state.apply(TransactionFieldUpdate::Category("Consultas".to_string()));
        assert_eq!(state.category, "Consultas");

        state.set_type(TransactionType::Expense);
        assert_eq!(state.category, "");
        assert_eq!(state.category_options(), &Category::EXPENSE);

        state.apply(TransactionFieldUpdate::Category("Nómina".to_string()));
        state.set_type(TransactionType::Expense);
        assert_eq!(state.category, "");
    }

    #[test]
    fn test_non_numeric_amount_stores_zero() {
        let mut state = TransactionFormState::new(TODAY);
        state.apply(TransactionFieldUpdate::Amount("250".to_string()));
        assert_eq!(state.amount, 250.0);
        state.apply(TransactionFieldUpdate::Amount("diez".to_string()));
        assert_eq!(state.amount, 0.0);
    }

    #[test]
    fn test_submit_saves_then_closes_without_reset() {
        let calls = RefCell::new(Vec::new());
        let mut state = TransactionFormState::new(TODAY);
        state.apply(TransactionFieldUpdate::Category("Marketing".to_string()));
        state.apply(TransactionFieldUpdate::Description("Flyers".to_string()));
        state.apply(TransactionFieldUpdate::Amount("80000".to_string()));
        state.apply(TransactionFieldUpdate::Reference("REC-9".to_string()));
        let before = state.clone();

        state.submit(
            |transaction| calls.borrow_mut().push(format!("save:{}", transaction.description)),
            || calls.borrow_mut().push("close".to_string()),
        );

        assert_eq!(*calls.borrow(), vec!["save:Flyers".to_string(), "close".to_string()]);
        assert_eq!(state, before);
    }

    #[test]
    fn test_create_record_omits_id() {
        let mut state = TransactionFormState::new(TODAY);
        state.apply(TransactionFieldUpdate::Category("Impuestos".to_string()));
        let json = serde_json::to_value(state.to_transaction()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "date": TODAY,
                "type": "expense",
                "category": "Impuestos",
                "description": "",
                "amount": 0.0,
                "paymentMethod": "Efectivo",
                "reference": ""
            })
        );
    }

    #[test]
    fn test_has_valid_category() {
        let mut transaction = consultation();
        assert!(transaction.has_valid_category());

        transaction.transaction_type = TransactionType::Expense;
        assert!(!transaction.has_valid_category());

        transaction.category = String::new();
        assert!(!transaction.has_valid_category());
    }

    #[test]
    fn test_summary_placeholder_category() {
        let state = TransactionFormState::new(TODAY);
        assert_eq!(state.summary().category, "No seleccionada");
        assert_eq!(state.summary().transaction_type, TransactionType::Expense);
    }
}

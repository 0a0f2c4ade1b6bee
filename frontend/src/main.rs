use yew::prelude::*;
use shared::{FormOutcome, FormPhase, FormsConfig, InvoicePayment, PendingInvoice, Transaction};

mod components;
mod hooks;
mod services;

use components::{InvoicePaymentForm, LedgerTable, TransactionForm};
use services::logging::Logger;

const COMPONENT: &str = "App";

fn sample_pending_invoices() -> Vec<PendingInvoice> {
    vec![
        PendingInvoice {
            id: "FACT-1042".to_string(),
            supplier: "Dental Depot S.A.S.".to_string(),
            description: "Guantes de nitrilo y tapabocas".to_string(),
            amount: 450000.0,
            due_date: "2025-07-05".to_string(),
        },
        PendingInvoice {
            id: "FACT-1043".to_string(),
            supplier: "Energía del Valle".to_string(),
            description: "Servicio de energía junio".to_string(),
            amount: 182300.0,
            due_date: "2025-07-12".to_string(),
        },
    ]
}

/// Insert a saved transaction, or replace the one with the same id.
/// Transactions saved from create mode get a fresh id.
fn upsert_transaction(
    transactions: &[Transaction],
    mut saved: Transaction,
    new_id: impl FnOnce() -> String,
) -> Vec<Transaction> {
    let mut next = transactions.to_vec();
    let existing = saved
        .id
        .as_deref()
        .and_then(|id| next.iter().position(|t| t.id.as_deref() == Some(id)));
    match existing {
        Some(index) => next[index] = saved,
        None => {
            if saved.id.is_none() {
                saved.id = Some(new_id());
            }
            next.insert(0, saved);
        }
    }
    next
}

/// Drop the pending invoice that a payment settled, if it came from the list
fn settle_pending_invoice(pending: &[PendingInvoice], payment: &InvoicePayment) -> Vec<PendingInvoice> {
    pending
        .iter()
        .filter(|invoice| invoice.id != payment.invoice_number)
        .cloned()
        .collect()
}

/// Status line for the way a modal was last closed
fn outcome_notice(phase: FormPhase, saved: &'static str) -> Option<&'static str> {
    match phase.last_outcome()? {
        FormOutcome::Submitted => Some(saved),
        FormOutcome::Cancelled => Some("Operación cancelada"),
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(FormsConfig::default);
    Logger::apply_config(&config);
    let invoice_phase = use_state(FormPhase::default);
    let transaction_phase = use_state(FormPhase::default);
    let editing_transaction = use_state(|| Option::<Transaction>::None);
    let pending_invoices = use_state(sample_pending_invoices);
    let payments = use_state(Vec::<InvoicePayment>::new);
    let transactions = use_state(Vec::<Transaction>::new);

    let open_invoice_form = {
        let invoice_phase = invoice_phase.clone();
        Callback::from(move |_: MouseEvent| invoice_phase.set(invoice_phase.open()))
    };

    let close_invoice_form = {
        let invoice_phase = invoice_phase.clone();
        Callback::from(move |_: ()| invoice_phase.set(invoice_phase.finish(FormOutcome::Cancelled)))
    };

    let save_payment = {
        let invoice_phase = invoice_phase.clone();
        let pending_invoices = pending_invoices.clone();
        let payments = payments.clone();
        Callback::from(move |payment: InvoicePayment| {
            match serde_json::to_string(&payment) {
                Ok(json) => Logger::info_with_component(COMPONENT, &format!("payment saved: {}", json)),
                Err(e) => Logger::error_with_component(COMPONENT, &format!("payment not serializable: {}", e)),
            }
            pending_invoices.set(settle_pending_invoice(&pending_invoices, &payment));
            let mut next = (*payments).clone();
            next.push(payment);
            payments.set(next);
            invoice_phase.set(invoice_phase.finish(FormOutcome::Submitted));
        })
    };

    let open_new_transaction = {
        let transaction_phase = transaction_phase.clone();
        let editing_transaction = editing_transaction.clone();
        Callback::from(move |_: MouseEvent| {
            editing_transaction.set(None);
            transaction_phase.set(transaction_phase.open());
        })
    };

    let open_edit_transaction = {
        let transaction_phase = transaction_phase.clone();
        let editing_transaction = editing_transaction.clone();
        Callback::from(move |transaction: Transaction| {
            editing_transaction.set(Some(transaction));
            transaction_phase.set(transaction_phase.open());
        })
    };

    let close_transaction_form = {
        let transaction_phase = transaction_phase.clone();
        Callback::from(move |_: ()| transaction_phase.set(transaction_phase.finish(FormOutcome::Cancelled)))
    };

    let save_transaction = {
        let transaction_phase = transaction_phase.clone();
        let transactions = transactions.clone();
        Callback::from(move |transaction: Transaction| {
            if !transaction.has_valid_category() {
                Logger::warn_with_component(
                    COMPONENT,
                    &format!("category '{}' does not match type", transaction.category),
                );
            }
            transactions.set(upsert_transaction(&transactions, transaction, || {
                uuid::Uuid::new_v4().to_string()
            }));
            transaction_phase.set(transaction_phase.finish(FormOutcome::Submitted));
        })
    };

    let notices: Vec<&str> = [
        outcome_notice(*transaction_phase, "Transacción guardada"),
        outcome_notice(*invoice_phase, "Pago registrado"),
    ]
    .into_iter()
    .flatten()
    .collect();

    html! {
        <div class="app">
            <header class="header">
                <h1>{"Finanzas del Consultorio"}</h1>
                <div class="header-actions">
                    <button type="button" class="btn btn-primary" onclick={open_new_transaction}>
                        {"Nueva Transacción"}
                    </button>
                    <button type="button" class="btn btn-primary expense" onclick={open_invoice_form}>
                        {"Registrar Pago de Factura"}
                    </button>
                </div>
            </header>

            <main class="main">
                {for notices.into_iter().map(|notice| html! { <p class="form-notice">{notice}</p> })}
                <LedgerTable
                    transactions={(*transactions).clone()}
                    on_edit={open_edit_transaction}
                    config={(*config).clone()}
                />
                <section class="payments-section">
                    <h2>{format!("Pagos registrados: {}", payments.len())}</h2>
                </section>
            </main>

            <InvoicePaymentForm
                open={invoice_phase.is_open()}
                on_close={close_invoice_form}
                on_save={save_payment}
                pending_invoices={(*pending_invoices).clone()}
                config={(*config).clone()}
            />

            <TransactionForm
                open={transaction_phase.is_open()}
                on_close={close_transaction_form}
                on_save={save_transaction}
                editing_transaction={(*editing_transaction).clone()}
                config={(*config).clone()}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{PaymentMethod, TransactionFormState, TransactionType};

    fn created(description: &str) -> Transaction {
        let mut state = TransactionFormState::new("2025-06-20");
        state.set_type(TransactionType::Income);
        state.apply(shared::TransactionFieldUpdate::Category("Consultas".to_string()));
        state.apply(shared::TransactionFieldUpdate::Description(description.to_string()));
        state.to_transaction()
    }

    #[test]
    fn test_upsert_assigns_id_to_new_transaction() {
        let list = upsert_transaction(&[], created("Limpieza"), || "tx-1".to_string());
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id.as_deref(), Some("tx-1"));
    }

    #[test]
    fn test_upsert_replaces_edited_transaction() {
        let list = upsert_transaction(&[], created("Limpieza"), || "tx-1".to_string());
        let mut edited = list[0].clone();
        edited.payment_method = PaymentMethod::Nequi;

        let list = upsert_transaction(&list, edited, || unreachable!("edit keeps its id"));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].payment_method, PaymentMethod::Nequi);
    }

    #[test]
    fn test_settle_pending_invoice_removes_paid_entry() {
        let pending = sample_pending_invoices();
        let mut payment = InvoicePayment::new("2025-06-20");
        payment.invoice_number = "FACT-1042".to_string();

        let remaining = settle_pending_invoice(&pending, &payment);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "FACT-1043");

        payment.invoice_number = "MANUAL-1".to_string();
        assert_eq!(settle_pending_invoice(&pending, &payment).len(), 2);
    }

    #[test]
    fn test_outcome_notice_follows_last_outcome() {
        let phase = FormPhase::default();
        assert_eq!(outcome_notice(phase, "Pago registrado"), None);

        let phase = phase.open();
        assert_eq!(outcome_notice(phase, "Pago registrado"), None);
        assert_eq!(
            outcome_notice(phase.finish(FormOutcome::Submitted), "Pago registrado"),
            Some("Pago registrado")
        );
        assert_eq!(
            outcome_notice(phase.finish(FormOutcome::Cancelled), "Pago registrado"),
            Some("Operación cancelada")
        );
    }
}

use yew::prelude::*;
use shared::{InvoicePayment, InvoicePaymentFieldUpdate, InvoicePaymentFormState, PendingInvoice};
use crate::services::date_utils::get_current_date;
use crate::services::logging::Logger;

const COMPONENT: &str = "InvoicePaymentForm";

pub struct UseInvoicePaymentFormResult {
    pub state: InvoicePaymentFormState,
    pub actions: UseInvoicePaymentFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseInvoicePaymentFormActions {
    pub update_field: Callback<InvoicePaymentFieldUpdate>,
    pub select_pending_invoice: Callback<String>,
    pub submit: Callback<()>,
    pub cancel: Callback<()>,
}

/// Form state for the invoice payment modal.
///
/// Fields start over from defaults each time `open` turns true and again
/// right after every submit.
#[hook]
pub fn use_invoice_payment_form(
    open: bool,
    pending_invoices: &[PendingInvoice],
    on_save: &Callback<InvoicePayment>,
    on_close: &Callback<()>,
) -> UseInvoicePaymentFormResult {
    let form = use_state(|| InvoicePaymentFormState::new(&get_current_date()));

    use_effect_with(open, {
        let form = form.clone();
        move |open| {
            let mut next = (*form).clone();
            if next.on_open_change(*open, &get_current_date()) {
                Logger::debug_with_component(COMPONENT, "opened with fresh fields");
                form.set(next);
            }
            || ()
        }
    });

    let update_field = {
        let form = form.clone();
        Callback::from(move |update: InvoicePaymentFieldUpdate| {
            let mut next = (*form).clone();
            next.apply(update);
            form.set(next);
        })
    };

    let select_pending_invoice = {
        let form = form.clone();
        let pending_invoices = pending_invoices.to_vec();
        Callback::from(move |invoice_id: String| {
            let mut next = (*form).clone();
            if next.select_pending_invoice(&invoice_id, &pending_invoices) {
                Logger::debug_with_component(COMPONENT, &format!("prefilled from pending invoice {}", invoice_id));
                form.set(next);
            } else {
                Logger::warn_with_component(COMPONENT, &format!("pending invoice {} not found", invoice_id));
            }
        })
    };

    let submit = {
        let form = form.clone();
        let on_save = on_save.clone();
        let on_close = on_close.clone();
        Callback::from(move |_: ()| {
            let mut next = (*form).clone();
            Logger::info_with_component(
                COMPONENT,
                &format!("recording payment for invoice {}", next.payment.invoice_number),
            );
            next.submit(
                &get_current_date(),
                |payment| on_save.emit(payment),
                || on_close.emit(()),
            );
            form.set(next);
        })
    };

    let cancel = {
        let on_close = on_close.clone();
        Callback::from(move |_: ()| {
            Logger::debug_with_component(COMPONENT, "cancelled");
            on_close.emit(());
        })
    };

    UseInvoicePaymentFormResult {
        state: (*form).clone(),
        actions: UseInvoicePaymentFormActions {
            update_field,
            select_pending_invoice,
            submit,
            cancel,
        },
    }
}

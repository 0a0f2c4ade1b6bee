use yew::prelude::*;
use shared::{Transaction, TransactionFieldUpdate, TransactionFormState, TransactionType};
use crate::services::date_utils::get_current_date;
use crate::services::logging::Logger;

const COMPONENT: &str = "TransactionForm";

pub struct UseTransactionFormResult {
    pub state: TransactionFormState,
    pub actions: UseTransactionFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseTransactionFormActions {
    pub update_field: Callback<TransactionFieldUpdate>,
    pub set_type: Callback<TransactionType>,
    pub submit: Callback<()>,
    pub cancel: Callback<()>,
}

/// Form state for the transaction modal.
///
/// Re-seeded from `editing_transaction` (or create defaults) whenever the
/// edit target or `open` changes. Submitting leaves the fields as they are.
#[hook]
pub fn use_transaction_form(
    open: bool,
    editing_transaction: Option<Transaction>,
    on_save: &Callback<Transaction>,
    on_close: &Callback<()>,
) -> UseTransactionFormResult {
    let form = use_state(|| TransactionFormState::seeded(editing_transaction.as_ref(), &get_current_date()));

    use_effect_with((editing_transaction, open), {
        let form = form.clone();
        move |(editing_transaction, open)| {
            let mut next = (*form).clone();
            next.reseed(editing_transaction.as_ref(), &get_current_date());
            if *open {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("seeded in {:?} mode", next.mode()),
                );
            }
            form.set(next);
            || ()
        }
    });

    let update_field = {
        let form = form.clone();
        Callback::from(move |update: TransactionFieldUpdate| {
            let mut next = (*form).clone();
            next.apply(update);
            form.set(next);
        })
    };

    let set_type = {
        let form = form.clone();
        Callback::from(move |transaction_type: TransactionType| {
            let mut next = (*form).clone();
            next.set_type(transaction_type);
            Logger::debug_with_component(COMPONENT, &format!("type set to {}", transaction_type.as_str()));
            form.set(next);
        })
    };

    let submit = {
        let form = form.clone();
        let on_save = on_save.clone();
        let on_close = on_close.clone();
        Callback::from(move |_: ()| {
            Logger::info_with_component(
                COMPONENT,
                &format!("saving {} transaction ({:?} mode)", form.transaction_type.as_str(), form.mode()),
            );
            form.submit(|transaction| on_save.emit(transaction), || on_close.emit(()));
        })
    };

    let cancel = {
        let on_close = on_close.clone();
        Callback::from(move |_: ()| {
            Logger::debug_with_component(COMPONENT, "cancelled");
            on_close.emit(());
        })
    };

    UseTransactionFormResult {
        state: (*form).clone(),
        actions: UseTransactionFormActions {
            update_field,
            set_type,
            submit,
            cancel,
        },
    }
}

use yew::prelude::*;
use shared::TransactionType;

#[derive(Properties, PartialEq)]
pub struct TransactionTypeToggleProps {
    pub selected: TransactionType,
    pub on_select: Callback<TransactionType>,
}

fn indicator(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "▲",
        TransactionType::Expense => "▼",
    }
}

/// Two mutually exclusive income/expense buttons
#[function_component(TransactionTypeToggle)]
pub fn transaction_type_toggle(props: &TransactionTypeToggleProps) -> Html {
    let render_option = |transaction_type: TransactionType| {
        let onclick = {
            let on_select = props.on_select.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(transaction_type))
        };
        let is_active = props.selected == transaction_type;

        html! {
            <button
                type="button"
                class={classes!(
                    "type-option",
                    transaction_type.as_str(),
                    is_active.then_some("active")
                )}
                {onclick}
            >
                <div class="type-indicator">{indicator(transaction_type)}</div>
                <div class="type-label">{transaction_type.label()}</div>
                <div class="type-tagline">{transaction_type.tagline()}</div>
            </button>
        }
    };

    html! {
        <div class="transaction-type">
            <label class="form-label">{"Tipo de Transacción *"}</label>
            <div class="type-options">
                {render_option(TransactionType::Income)}
                {render_option(TransactionType::Expense)}
            </div>
        </div>
    }
}

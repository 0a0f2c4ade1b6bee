use yew::prelude::*;
use shared::{format_amount, FormsConfig, PaymentMethod, Transaction, TransactionFieldUpdate};
use crate::components::forms::field_events::{on_input, on_select, on_textarea, select_value};
use crate::components::forms::TransactionTypeToggle;
use crate::hooks::use_transaction_form;
use crate::services::logging::Logger;

const COMPONENT: &str = "TransactionForm";

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_save: Callback<Transaction>,
    /// `None` opens the form in create mode
    #[prop_or_default]
    pub editing_transaction: Option<Transaction>,
    /// Accepted from the host but not rendered: the income and expense
    /// lists in `shared::Category` decide the options.
    #[prop_or_default]
    pub categories: Vec<String>,
    #[prop_or_default]
    pub config: FormsConfig,
}

/// Modal that creates or edits an income/expense transaction
#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    Logger::apply_config(&props.config);
    let form = use_transaction_form(
        props.open,
        props.editing_transaction.clone(),
        &props.on_save,
        &props.on_close,
    );
    let actions = form.actions;
    let state = &form.state;

    let on_submit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_cancel = {
        let cancel = actions.cancel.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };

    if !props.open {
        return html! {};
    }

    let update = &actions.update_field;
    let on_category_change = update.reform(|e: Event| TransactionFieldUpdate::Category(select_value(&e)));
    let mode = state.mode();
    let summary = state.summary();
    let type_class = state.transaction_type.as_str();

    html! {
        <div class="form-modal-backdrop">
            <div class="form-modal">
                <div class="form-modal-header">
                    <div>
                        <h2 class="form-modal-title">{mode.heading()}</h2>
                        <p class="form-modal-subtitle">{mode.subtitle()}</p>
                    </div>
                    <button type="button" class="form-modal-close" onclick={on_cancel.clone()}>{"✕"}</button>
                </div>

                <form class="transaction-form" onsubmit={on_submit}>
                    <TransactionTypeToggle
                        selected={state.transaction_type}
                        on_select={actions.set_type.clone()}
                    />

                    <div class="form-grid two-columns">
                        <div class="form-group">
                            <label for="transaction-date">{"Fecha *"}</label>
                            <input
                                type="date"
                                id="transaction-date"
                                name="date"
                                required=true
                                value={state.date.clone()}
                                onchange={on_input(update, TransactionFieldUpdate::Date)}
                            />
                        </div>
                        <div class="form-group">
                            <label for="transaction-amount">{"Monto *"}</label>
                            <input
                                type="number"
                                id="transaction-amount"
                                name="amount"
                                placeholder="0"
                                min="0"
                                step="1"
                                required=true
                                value={state.amount.to_string()}
                                onchange={on_input(update, TransactionFieldUpdate::Amount)}
                            />
                        </div>
                    </div>

                    <div class="form-grid two-columns">
                        <div class="form-group">
                            <label for="transaction-category">{"Categoría *"}</label>
                            <select
                                id="transaction-category"
                                name="category"
                                required=true
                                onchange={on_category_change}
                            >
                                <option value="" selected={state.category.is_empty()}>
                                    {"Seleccionar categoría"}
                                </option>
                                {for state.category_options().iter().map(|category| html! {
                                    <option
                                        key={category.label()}
                                        value={category.label()}
                                        selected={category.label() == state.category}
                                    >
                                        {category.label()}
                                    </option>
                                })}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="transaction-payment-method">{"Método de Pago *"}</label>
                            <select
                                id="transaction-payment-method"
                                name="paymentMethod"
                                required=true
                                onchange={on_select(COMPONENT, update, TransactionFieldUpdate::PaymentMethod)}
                            >
                                {for PaymentMethod::TRANSACTION_OPTIONS.iter().map(|method| html! {
                                    <option
                                        key={method.label()}
                                        value={method.label()}
                                        selected={*method == state.payment_method}
                                    >
                                        {method.label()}
                                    </option>
                                })}
                            </select>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="transaction-description">{"Descripción *"}</label>
                        <textarea
                            id="transaction-description"
                            name="description"
                            rows="3"
                            placeholder="Descripción detallada de la transacción"
                            required=true
                            value={state.description.clone()}
                            onchange={on_textarea(update, TransactionFieldUpdate::Description)}
                        />
                    </div>

                    <div class="form-group">
                        <label for="transaction-reference">{"Referencia (Opcional)"}</label>
                        <input
                            type="text"
                            id="transaction-reference"
                            name="reference"
                            placeholder="Número de factura, comprobante, etc."
                            value={state.reference.clone()}
                            onchange={on_input(update, TransactionFieldUpdate::Reference)}
                        />
                    </div>

                    <div class={classes!("form-summary", type_class)}>
                        <h3>{"Resumen de la Transacción"}</h3>
                        <p><strong>{"Tipo: "}</strong>{summary.transaction_type.label()}</p>
                        <p><strong>{"Monto: "}</strong>{format_amount(summary.amount, &props.config)}</p>
                        <p><strong>{"Categoría: "}</strong>{summary.category}</p>
                        <p><strong>{"Método: "}</strong>{summary.payment_method.label()}</p>
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancelar"}
                        </button>
                        <button type="submit" class={classes!("btn", "btn-primary", type_class)}>
                            {mode.submit_label()}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

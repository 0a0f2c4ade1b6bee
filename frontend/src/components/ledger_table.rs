use yew::prelude::*;
use shared::{format_amount, format_date_for_display, FormsConfig, Transaction, TransactionType};

#[derive(Properties, PartialEq)]
pub struct LedgerTableProps {
    pub transactions: Vec<Transaction>,
    pub on_edit: Callback<Transaction>,
    #[prop_or_default]
    pub config: FormsConfig,
}

#[function_component(LedgerTable)]
pub fn ledger_table(props: &LedgerTableProps) -> Html {
    html! {
        <section class="transactions-section">
            <h2>{"Movimientos"}</h2>

            {if props.transactions.is_empty() {
                html! { <div class="empty">{"Sin movimientos registrados"}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="transactions-table">
                            <thead>
                                <tr>
                                    <th>{"Fecha"}</th>
                                    <th>{"Descripción"}</th>
                                    <th>{"Categoría"}</th>
                                    <th>{"Monto"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.transactions.iter().map(|transaction| {
                                    let amount_class = match transaction.transaction_type {
                                        TransactionType::Income => "amount positive",
                                        TransactionType::Expense => "amount negative",
                                    };
                                    let on_edit = {
                                        let on_edit = props.on_edit.clone();
                                        let transaction = transaction.clone();
                                        Callback::from(move |_: MouseEvent| on_edit.emit(transaction.clone()))
                                    };

                                    html! {
                                        <tr key={transaction.id.clone().unwrap_or_default()}>
                                            <td class="date">{format_date_for_display(&transaction.date)}</td>
                                            <td class="description">{&transaction.description}</td>
                                            <td class="category">{&transaction.category}</td>
                                            <td class={amount_class}>
                                                {format_amount(transaction.amount, &props.config)}
                                            </td>
                                            <td>
                                                <button type="button" class="btn btn-link" onclick={on_edit}>
                                                    {"Editar"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}

use yew::prelude::*;
use shared::{format_amount, FormsConfig, PendingInvoice};
use crate::services::date_utils::format_date_for_display;

#[derive(Properties, PartialEq)]
pub struct PendingInvoiceListProps {
    pub invoices: Vec<PendingInvoice>,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub config: FormsConfig,
}

/// Clickable list of unpaid invoices; renders nothing when the list is empty
#[function_component(PendingInvoiceList)]
pub fn pending_invoice_list(props: &PendingInvoiceListProps) -> Html {
    if props.invoices.is_empty() {
        return html! {};
    }

    html! {
        <div class="pending-invoices">
            <label class="form-label">{"Facturas Pendientes (Opcional)"}</label>
            <div class="pending-invoice-options">
                {for props.invoices.iter().map(|invoice| {
                    let is_selected = props.selected.as_deref() == Some(invoice.id.as_str());
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let invoice_id = invoice.id.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(invoice_id.clone()))
                    };

                    html! {
                        <button
                            key={invoice.id.clone()}
                            type="button"
                            class={classes!("pending-invoice", is_selected.then_some("selected"))}
                            {onclick}
                        >
                            <div class="pending-invoice-details">
                                <div class="pending-invoice-supplier">{&invoice.supplier}</div>
                                <div class="pending-invoice-description">{&invoice.description}</div>
                                <div class="pending-invoice-due">
                                    {format!("Vence: {}", format_date_for_display(&invoice.due_date))}
                                </div>
                            </div>
                            <div class="pending-invoice-amount">
                                {format_amount(invoice.amount, &props.config)}
                            </div>
                        </button>
                    }
                })}
            </div>
            <div class="pending-invoices-hint">
                <span>{"O registra una nueva factura manualmente:"}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_invoice_list_props_creation() {
        let props = PendingInvoiceListProps {
            invoices: vec![],
            selected: None,
            on_select: Callback::noop(),
            config: FormsConfig::default(),
        };
        assert!(props.invoices.is_empty());
        assert_eq!(props.selected, None);
    }
}

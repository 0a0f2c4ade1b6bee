use yew::prelude::*;
use shared::{format_amount, Category, FormsConfig, InvoicePayment, InvoicePaymentFieldUpdate, PaymentMethod, PendingInvoice};
use crate::components::forms::field_events::{on_input, on_select, on_textarea};
use crate::components::forms::PendingInvoiceList;
use crate::hooks::use_invoice_payment_form;
use crate::services::logging::Logger;
use crate::services::date_utils::format_date_for_display;

const COMPONENT: &str = "InvoicePaymentForm";

#[derive(Properties, PartialEq)]
pub struct InvoicePaymentFormProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_save: Callback<InvoicePayment>,
    #[prop_or_default]
    pub pending_invoices: Vec<PendingInvoice>,
    #[prop_or_default]
    pub config: FormsConfig,
}

/// Modal that records the payment of a supplier invoice
#[function_component(InvoicePaymentForm)]
pub fn invoice_payment_form(props: &InvoicePaymentFormProps) -> Html {
    Logger::apply_config(&props.config);
    let form = use_invoice_payment_form(props.open, &props.pending_invoices, &props.on_save, &props.on_close);
    let actions = form.actions;
    let payment = &form.state.payment;

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
    let summary = form.state.summary();

    html! {
        <div class="form-modal-backdrop">
            <div class="form-modal">
                <div class="form-modal-header">
                    <div>
                        <h2 class="form-modal-title">{"Registrar Pago de Factura"}</h2>
                        <p class="form-modal-subtitle">{"Cargar y registrar facturas de proveedores"}</p>
                    </div>
                    <button type="button" class="form-modal-close" onclick={on_cancel.clone()}>{"✕"}</button>
                </div>

                <form class="invoice-payment-form" onsubmit={on_submit}>
                    <PendingInvoiceList
                        invoices={props.pending_invoices.clone()}
                        selected={form.state.selected_pending_invoice.clone()}
                        on_select={actions.select_pending_invoice.clone()}
                        config={props.config.clone()}
                    />

                    <section class="form-section">
                        <h3>{"Información de la Factura"}</h3>
                        <div class="form-grid two-columns">
                            <div class="form-group">
                                <label for="invoice-number">{"Número de Factura *"}</label>
                                <input
                                    type="text"
                                    id="invoice-number"
                                    name="invoiceNumber"
                                    placeholder="Ej: FACT-001"
                                    required=true
                                    value={payment.invoice_number.clone()}
                                    onchange={on_input(update, InvoicePaymentFieldUpdate::InvoiceNumber)}
                                />
                            </div>
                            <div class="form-group">
                                <label for="invoice-supplier">{"Proveedor *"}</label>
                                <input
                                    type="text"
                                    id="invoice-supplier"
                                    name="supplier"
                                    placeholder="Nombre del proveedor"
                                    required=true
                                    value={payment.supplier.clone()}
                                    onchange={on_input(update, InvoicePaymentFieldUpdate::Supplier)}
                                />
                            </div>
                            <div class="form-group">
                                <label for="invoice-amount">{"Monto *"}</label>
                                <input
                                    type="number"
                                    id="invoice-amount"
                                    name="amount"
                                    placeholder="0"
                                    min="0"
                                    step="1"
                                    required=true
                                    value={payment.amount.to_string()}
                                    onchange={on_input(update, InvoicePaymentFieldUpdate::Amount)}
                                />
                            </div>
                            <div class="form-group">
                                <label for="invoice-due-date">{"Fecha de Vencimiento"}</label>
                                <input
                                    type="date"
                                    id="invoice-due-date"
                                    name="dueDate"
                                    value={payment.due_date.clone()}
                                    onchange={on_input(update, InvoicePaymentFieldUpdate::DueDate)}
                                />
                            </div>
                        </div>
                    </section>

                    <div class="form-group">
                        <label for="invoice-description">{"Descripción *"}</label>
                        <textarea
                            id="invoice-description"
                            name="description"
                            rows="3"
                            placeholder="Descripción detallada de los productos o servicios"
                            required=true
                            value={payment.description.clone()}
                            onchange={on_textarea(update, InvoicePaymentFieldUpdate::Description)}
                        />
                    </div>

                    <section class="form-section">
                        <h3>{"Información del Pago"}</h3>
                        <div class="form-grid three-columns">
                            <div class="form-group">
                                <label for="invoice-payment-date">{"Fecha de Pago *"}</label>
                                <input
                                    type="date"
                                    id="invoice-payment-date"
                                    name="paymentDate"
                                    required=true
                                    value={payment.payment_date.clone()}
                                    onchange={on_input(update, InvoicePaymentFieldUpdate::PaymentDate)}
                                />
                            </div>
                            <div class="form-group">
                                <label for="invoice-payment-method">{"Método de Pago *"}</label>
                                <select
                                    id="invoice-payment-method"
                                    name="paymentMethod"
                                    required=true
                                    onchange={on_select(COMPONENT, update, InvoicePaymentFieldUpdate::PaymentMethod)}
                                >
                                    {for PaymentMethod::INVOICE_OPTIONS.iter().map(|method| html! {
                                        <option
                                            key={method.label()}
                                            value={method.label()}
                                            selected={*method == payment.payment_method}
                                        >
                                            {method.label()}
                                        </option>
                                    })}
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="invoice-category">{"Categoría *"}</label>
                                <select
                                    id="invoice-category"
                                    name="category"
                                    required=true
                                    onchange={on_select(COMPONENT, update, InvoicePaymentFieldUpdate::Category)}
                                >
                                    {for Category::INVOICE.iter().map(|category| html! {
                                        <option
                                            key={category.label()}
                                            value={category.label()}
                                            selected={*category == payment.category}
                                        >
                                            {category.label()}
                                        </option>
                                    })}
                                </select>
                            </div>
                        </div>
                    </section>

                    // Attachment area is presentational only, no file is read
                    <div class="form-group">
                        <label>{"Adjuntar Factura (Opcional)"}</label>
                        <div class="attachment-dropzone">
                            <p>
                                {"Arrastra y suelta la factura aquí, o "}
                                <button type="button" class="link-button">{"selecciona un archivo"}</button>
                            </p>
                            <p class="attachment-hint">{"PDF, JPG, PNG hasta 10MB"}</p>
                        </div>
                    </div>

                    <div class="form-summary expense">
                        <h3>{"Resumen del Gasto"}</h3>
                        <p><strong>{"Proveedor: "}</strong>{summary.supplier}</p>
                        <p><strong>{"Monto: "}</strong>{format_amount(summary.amount, &props.config)}</p>
                        <p><strong>{"Categoría: "}</strong>{summary.category.label()}</p>
                        <p><strong>{"Método de pago: "}</strong>{summary.payment_method.label()}</p>
                        <p>
                            <strong>{"Fecha de pago: "}</strong>
                            {summary
                                .payment_date
                                .as_deref()
                                .map(format_date_for_display)
                                .unwrap_or_else(|| "No especificada".to_string())}
                        </p>
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancelar"}
                        </button>
                        <button type="submit" class="btn btn-primary expense">
                            {"Registrar Pago"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

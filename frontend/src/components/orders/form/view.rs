//! View rendering for the purchase-order form.
//!
//! The body is four field groups (Identification, Amount & Payment, Status &
//! Approval, Responsible Party) between a feedback banner and the footer
//! actions. Closed-set fields render as `<select>` elements fed exclusively
//! from the fixed option lists. While loading, the whole body is a single
//! indicator; while saving, only the Save button is locked.

use common::model::purchase_order::{ApprovalState, OrderStatus, PaymentMethod};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{Feedback, FormPhase, OrderField, OrderFormComponent};

pub fn view(component: &OrderFormComponent, ctx: &Context<OrderFormComponent>) -> Html {
    let link = ctx.link();

    let title = if ctx.props().order_id.is_some() {
        "Edit purchase order"
    } else {
        "New purchase order"
    };

    if component.phase == FormPhase::Loading {
        return html! {
            <div class="order-form">
                <h2 class="form-title">{title}</h2>
                <div class="form-loading">
                    <div class="spinner"></div>
                    <span>{"Loading purchase order..."}</span>
                </div>
            </div>
        };
    }

    let saving = component.phase == FormPhase::Saving;
    let on_cancel = {
        let on_close = ctx.props().on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <form
            class="order-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            <h2 class="form-title">{title}</h2>
            { feedback_banner(component) }

            <fieldset class="field-group">
                <legend>{"Identification"}</legend>
                { text_input(link, "Number", "text", component.draft.number.clone(), OrderField::Number) }
                { description_input(link, component.draft.description.clone()) }
                { text_input(link, "Supplier", "text", component.draft.supplier_name.clone(), OrderField::SupplierName) }
                { text_input(link, "Reference date", "date", component.draft.reference_date.clone(), OrderField::ReferenceDate) }
            </fieldset>

            <fieldset class="field-group">
                <legend>{"Amount & Payment"}</legend>
                { text_input(link, "Amount", "text", component.draft.amount.clone(), OrderField::Amount) }
                {
                    closed_select(link, "Payment method", OrderField::PaymentMethod,
                        &PaymentMethod::ALL.map(PaymentMethod::label),
                        component.draft.payment_method.label())
                }
            </fieldset>

            <fieldset class="field-group">
                <legend>{"Status & Approval"}</legend>
                {
                    closed_select(link, "Status", OrderField::Status,
                        &OrderStatus::ALL.map(OrderStatus::label),
                        component.draft.status.label())
                }
                {
                    closed_select(link, "Approval", OrderField::Approval,
                        &ApprovalState::ALL.map(ApprovalState::label),
                        component.draft.approval.label())
                }
            </fieldset>

            <fieldset class="field-group">
                <legend>{"Responsible Party"}</legend>
                { text_input(link, "Cost center", "text", component.draft.cost_center.clone(), OrderField::CostCenter) }
                { text_input(link, "Requester", "text", component.draft.requester.clone(), OrderField::Requester) }
            </fieldset>

            <footer class="form-actions">
                <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
                <button type="submit" class="btn primary" disabled={saving}>
                    { if saving { "Saving..." } else { "Save" } }
                </button>
            </footer>
        </form>
    }
}

fn feedback_banner(component: &OrderFormComponent) -> Html {
    match &component.feedback {
        Some(Feedback::Error(message)) => html! {
            <div class="banner error">{message.clone()}</div>
        },
        Some(Feedback::Success(message)) => html! {
            <div class="banner success">{message.clone()}</div>
        },
        None => html! {},
    }
}

fn text_input(
    link: &Scope<OrderFormComponent>,
    label: &'static str,
    input_type: &'static str,
    value: String,
    field: OrderField,
) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type={input_type}
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::FieldEdited(field, value)
                })}
            />
        </label>
    }
}

fn description_input(link: &Scope<OrderFormComponent>, value: String) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{"Description"}</span>
            <textarea
                rows="2"
                value={value}
                oninput={link.callback(|e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    Msg::FieldEdited(OrderField::Description, value)
                })}
            />
        </label>
    }
}

fn closed_select(
    link: &Scope<OrderFormComponent>,
    label: &'static str,
    field: OrderField,
    options: &[&'static str],
    selected: &str,
) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                onchange={link.callback(move |e: Event| {
                    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                    Msg::FieldEdited(field, value)
                })}
            >
                { for options.iter().map(|option| html! {
                    <option value={*option} selected={*option == selected}>{*option}</option>
                }) }
            </select>
        </label>
    }
}

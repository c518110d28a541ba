//! Purchase-order listing page.
//!
//! Loads the order table on first render, owns which record the form dialog
//! is editing, and supplies the dialog's callbacks: `on_close` just closes,
//! `on_saved` closes and refreshes the table.

use common::model::purchase_order::PurchaseOrder;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::orders::form::OrderFormComponent;
use crate::modal::ModalShell;

const MSG_LIST_FALLBACK: &str = "Could not load purchase orders.";

pub struct OrdersPage {
    orders: Vec<PurchaseOrder>,
    loading: bool,
    error: Option<String>,
    dialog: Dialog,
    loaded: bool,
}

#[derive(Clone, PartialEq)]
enum Dialog {
    Closed,
    Create,
    Edit(AttrValue),
}

pub enum Msg {
    Loaded(Vec<PurchaseOrder>),
    LoadFailed(String),
    Reload,
    OpenCreate,
    OpenEdit(AttrValue),
    CloseDialog,
    SavedRefresh,
}

impl Component for OrdersPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            orders: Vec::new(),
            loading: true,
            error: None,
            dialog: Dialog::Closed,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(orders) => {
                self.orders = orders;
                self.loading = false;
                self.error = None;
                true
            }
            Msg::LoadFailed(message) => {
                self.loading = false;
                self.error = Some(message);
                true
            }
            Msg::Reload => {
                self.loading = true;
                self.error = None;
                fetch_orders_into(ctx.link().clone());
                true
            }
            Msg::OpenCreate => {
                self.dialog = Dialog::Create;
                true
            }
            Msg::OpenEdit(id) => {
                self.dialog = Dialog::Edit(id);
                true
            }
            Msg::CloseDialog => {
                self.dialog = Dialog::Closed;
                true
            }
            Msg::SavedRefresh => {
                self.dialog = Dialog::Closed;
                self.loading = true;
                fetch_orders_into(ctx.link().clone());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <section class="orders-page">
                <div class="page-head">
                    <h2>{"Purchase orders"}</h2>
                    <button class="btn primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                        {"New purchase order"}
                    </button>
                </div>

                {
                    if let Some(message) = &self.error {
                        html! {
                            <div class="banner error">
                                {message.clone()}
                                <button class="btn link" onclick={link.callback(|_| Msg::Reload)}>
                                    {"Retry"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if self.loading {
                        html! {
                            <div class="form-loading">
                                <div class="spinner"></div>
                                <span>{"Loading purchase orders..."}</span>
                            </div>
                        }
                    } else {
                        self.table_html(link)
                    }
                }

                { self.dialog_html(ctx) }
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            fetch_orders_into(ctx.link().clone());
        }
    }
}

impl OrdersPage {
    fn table_html(&self, link: &Scope<Self>) -> Html {
        if self.orders.is_empty() {
            return html! { <p class="empty-state">{"No purchase orders yet."}</p> };
        }

        html! {
            <table class="orders-table">
                <thead>
                    <tr>
                        <th>{"Number"}</th>
                        <th>{"Description"}</th>
                        <th>{"Supplier"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Status"}</th>
                        <th>{"Approval"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for self.orders.iter().map(|order| {
                        let id = AttrValue::from(order.id.clone());
                        html! {
                            <tr key={order.id.clone()}>
                                <td>{order.number.clone()}</td>
                                <td>{order.description.clone()}</td>
                                <td>{order.supplier_name.clone()}</td>
                                <td class="amount">{order.amount.clone()}</td>
                                <td>{order.status.label()}</td>
                                <td>{order.approval.label()}</td>
                                <td>
                                    <button
                                        class="btn"
                                        onclick={link.callback(move |_| Msg::OpenEdit(id.clone()))}
                                    >
                                        {"Edit"}
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    }

    fn dialog_html(&self, ctx: &Context<Self>) -> Html {
        let order_id = match &self.dialog {
            Dialog::Closed => return html! {},
            Dialog::Create => None,
            Dialog::Edit(id) => Some(id.clone()),
        };

        let on_close = ctx.link().callback(|_| Msg::CloseDialog);
        let on_saved = ctx.link().callback(|_| Msg::SavedRefresh);

        html! {
            <ModalShell on_request_close={on_close.clone()}>
                <OrderFormComponent {order_id} {on_close} {on_saved} />
            </ModalShell>
        }
    }
}

fn fetch_orders_into(link: Scope<OrdersPage>) {
    spawn_local(async move {
        match api::fetch_orders().await {
            Ok(envelope) if envelope.success => {
                link.send_message(Msg::Loaded(envelope.data.unwrap_or_default()));
            }
            Ok(envelope) => link.send_message(Msg::LoadFailed(
                envelope
                    .message
                    .unwrap_or_else(|| MSG_LIST_FALLBACK.to_string()),
            )),
            Err(_) => link.send_message(Msg::LoadFailed(api::CONNECTIVITY_MESSAGE.to_string())),
        }
    });
}

//! Purchase-order form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export the types the listing page needs (`Msg`, `OrderFormProps`,
//!   `OrderFormComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, load the existing order when `order_id` is provided;
//!   a missing record and a transport failure produce distinct banner
//!   messages while the draft stays at its defaults.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::OrderFormProps;
pub use state::OrderFormComponent;

impl Component for OrderFormComponent {
    type Message = Msg;
    type Properties = OrderFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        OrderFormComponent::new(ctx.props().order_id.is_some())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(order_id) = ctx.props().order_id.clone() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::fetch_order(&order_id).await {
                        Ok(envelope) if envelope.success => match envelope.data {
                            Some(order) => link.send_message(Msg::LoadSucceeded(order)),
                            None => link.send_message(Msg::LoadFailed(
                                helpers::MSG_NOT_FOUND.to_string(),
                            )),
                        },
                        Ok(envelope) => link.send_message(Msg::LoadFailed(
                            envelope
                                .message
                                .unwrap_or_else(|| helpers::MSG_NOT_FOUND.to_string()),
                        )),
                        Err(_) => link.send_message(Msg::LoadFailed(
                            api::CONNECTIVITY_MESSAGE.to_string(),
                        )),
                    }
                });
            }
        }
    }
}

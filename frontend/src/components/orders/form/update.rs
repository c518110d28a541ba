//! Update function for the purchase-order form.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`, mutates
//! the state, and returns whether the view should re-render.
//!
//! Key behaviors
//! - Submit validates locally first; an invalid draft never reaches the
//!   network.
//! - Create vs update is decided by [`SaveRoute`] from the mount identifier.
//! - Save outcomes come back as messages from the spawned request; a message
//!   sent to an unmounted form is dropped by Yew, which is what discards
//!   responses whose owner is gone.
//! - A successful save schedules `Msg::FireCompletion` once, after a fixed
//!   delay, through the component scope, so unmounting also cancels the
//!   completion callback.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::helpers::{self, SaveRoute};
use super::messages::Msg;
use super::state::{Feedback, OrderFormComponent};

pub fn update(
    component: &mut OrderFormComponent,
    ctx: &Context<OrderFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FieldEdited(field, value) => {
            component.apply_field(field, value);
            true
        }
        Msg::LoadSucceeded(order) => {
            component.load_succeeded(order);
            true
        }
        Msg::LoadFailed(message) => {
            component.load_failed(message);
            true
        }
        Msg::Submit => {
            if let Some(message) = helpers::first_validation_error(&component.draft) {
                component.feedback = Some(Feedback::Error(message.to_string()));
                return true;
            }
            if !component.begin_save() {
                return false;
            }

            let order = component.draft.clone();
            let route = SaveRoute::for_order(ctx.props().order_id.as_deref());
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match &route {
                    SaveRoute::Create => api::create_order(&order).await,
                    SaveRoute::Update(id) => api::update_order(id, &order).await,
                };
                match result {
                    Ok(envelope) if envelope.success => link.send_message(Msg::SaveSucceeded),
                    Ok(envelope) => link.send_message(Msg::SaveFailed(
                        envelope
                            .message
                            .unwrap_or_else(|| helpers::MSG_SAVE_FALLBACK.to_string()),
                    )),
                    Err(_) => {
                        link.send_message(Msg::SaveFailed(api::CONNECTIVITY_MESSAGE.to_string()))
                    }
                }
            });
            true
        }
        Msg::SaveSucceeded => {
            component.save_succeeded();
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(helpers::SAVED_CLOSE_DELAY_MS).await;
                link.send_message(Msg::FireCompletion);
            });
            true
        }
        Msg::SaveFailed(message) => {
            component.save_failed(message);
            true
        }
        Msg::FireCompletion => {
            ctx.props().on_saved.emit(());
            false
        }
    }
}

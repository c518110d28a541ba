//! Overlay shell hosting record dialogs.
//!
//! Owns every global side effect a dialog needs: a document-level keydown
//! listener (Escape closes), a body scroll lock, and the entrance animation
//! (a deferred "show" class toggle). Listener and scroll lock are acquired in
//! `create` and released in `destroy`, the one teardown path Yew guarantees,
//! so no exit leaves the document scrolled-locked or listening.
//!
//! Closing is always delegated to the caller through `on_request_close`; the
//! shell itself never decides whether a dialog may close.

use js_sys::Function;
use uuid::Uuid;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::KeyboardEvent;
use yew::prelude::*;

pub struct ModalShell {
    id: String,
    keydown: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    prev_overflow: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct ModalShellProps {
    #[prop_or_default]
    pub children: Html,
    /// Fired on Escape or on a click that lands on the backdrop itself.
    pub on_request_close: Callback<()>,
}

pub enum Msg {
    EscapePressed,
    BackdropPressed(MouseEvent),
}

impl Component for ModalShell {
    type Message = Msg;
    type Properties = ModalShellProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                link.send_message(Msg::EscapePressed);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let mut prev_overflow = None;
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document
                .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                .ok();
            if let Some(body) = document.body() {
                let style = body.style();
                prev_overflow = style.get_property_value("overflow").ok();
                style.set_property("overflow", "hidden").ok();
            }
        }

        Self {
            id: format!("modal-{}", Uuid::new_v4()),
            keydown: Some(keydown),
            prev_overflow,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::EscapePressed => {
                ctx.props().on_request_close.emit(());
                false
            }
            Msg::BackdropPressed(event) => {
                let on_backdrop = match (event.target(), event.current_target()) {
                    (Some(target), Some(current)) => {
                        JsValue::from(target) == JsValue::from(current)
                    }
                    _ => false,
                };
                if on_backdrop {
                    ctx.props().on_request_close.emit(());
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div
                class="modal-backdrop"
                id={self.id.clone()}
                onmousedown={ctx.link().callback(Msg::BackdropPressed)}
            >
                <div class="modal-panel">
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            // Deferred so the browser paints the pre-transition state first.
            let func = Function::new_no_args(&format!(
                "document.querySelector('#{}').classList.add('show')",
                self.id
            ));
            if let Some(window) = web_sys::window() {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
                    .ok();
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(listener) = self.keydown.take() {
                document
                    .remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    )
                    .ok();
            }
            if let Some(body) = document.body() {
                let style = body.style();
                match self.prev_overflow.take() {
                    Some(prev) if !prev.is_empty() => {
                        style.set_property("overflow", &prev).ok();
                    }
                    _ => {
                        style.remove_property("overflow").ok();
                    }
                }
            }
        }
    }
}

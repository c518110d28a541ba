use crate::app::App;

mod api;
mod app;
mod components;
mod modal;

fn main() {
    yew::Renderer::<App>::new().render();
}

use crate::components::orders::list::OrdersPage;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-root">
                <header class="app-header">
                    <h1>{"Finance administration"}</h1>
                </header>
                <main class="app-main">
                    <OrdersPage />
                </main>
            </div>
        }
    }
}

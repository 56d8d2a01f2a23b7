mod components;
mod hooks;
mod services;

use components::booking_wizard::BookingWizard;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Buddey"}</h1>
                    <p class="tagline">{"Plan een klusser in een paar stappen"}</p>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <BookingWizard />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use log::info;

mod config;
mod models;
mod content;
mod accordion;
mod reveal {
    pub mod controller;
    pub mod dom;
}
mod components {
    pub mod reveal_section;
    pub mod plan_card;
    pub mod faq_list;
}
mod pages {
    pub mod pricing;
}

use content::PageContent;
use pages::pricing::PricingPage;


#[function_component]
fn App() -> Html {
    let content = use_state(PageContent::load);

    html! {
        <PricingPage content={(*content).clone()} />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting pricing section");
    yew::Renderer::<App>::new().render();
}

pub mod audio;
pub mod components;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::components::social_proof::SocialProofFeed;
use crate::pages::wheel::WheelPage;

#[function_component(App)]
pub fn app() -> Html {
    // The catalog is required configuration: a wheel with bad weights is a
    // build error for the page, not something to paper over with defaults.
    match shared::prizes::default_catalog() {
        Ok(catalog) => html! {
            <div class="min-h-screen w-full bg-gray-50 dark:bg-gray-900">
                <WheelPage {catalog} />
                <SocialProofFeed />
            </div>
        },
        Err(err) => {
            log::error!("prize catalog rejected: {:?}", err);
            html! {
                <div class={styles::CARD_ERROR}>
                    {"The prize wheel is misconfigured and cannot be shown."}
                </div>
            }
        }
    }
}

use dioxus::prelude::*;

use ui::LandingPage;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    rsx! {
        LandingPage { admin_href: Route::Admin {}.to_string() }
    }
}

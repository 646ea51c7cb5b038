use dioxus::prelude::*;

use ui::AdminPanel;

use crate::Route;

#[component]
pub fn Admin() -> Element {
    rsx! {
        AdminPanel { home_href: Route::Landing {}.to_string() }
    }
}

//! Application header.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(AppHeader)]
pub fn app_header() -> Html {
    html! {
        <header class="app-header">
            <Link<Route> to={Route::Divisions} classes="app-title">
                { "Admin Atlas" }
            </Link<Route>>
        </header>
    }
}

//! Main application component.

use std::rc::Rc;

use atlas_core::RouteTable;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::AppHeader;
use crate::router::{AtlasRouter, switch};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub table: Rc<RouteTable>,
}

/// Root application component with router.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <AtlasRouter table={props.table.clone()}>
            <AppHeader />
            <Switch<Route> render={switch} />
        </AtlasRouter>
    }
}

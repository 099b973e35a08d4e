//! Router capability: browser history plus the route table, and the view
//! dispatch driven by that table.

use std::rc::Rc;

use atlas_core::{Resolution, ResolveError, RouteTable, ViewRequest};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{DetailsPage, ListingPage, NotFoundPage};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct AtlasRouterProps {
    pub table: Rc<RouteTable>,
    pub children: Children,
}

/// Installs browser history routing and provides the route table to every view.
#[function_component(AtlasRouter)]
pub fn atlas_router(props: &AtlasRouterProps) -> Html {
    html! {
        <BrowserRouter>
            <ContextProvider<Rc<RouteTable>> context={props.table.clone()}>
                { props.children.clone() }
            </ContextProvider<Rc<RouteTable>>>
        </BrowserRouter>
    }
}

#[hook]
pub fn use_route_table() -> Option<Rc<RouteTable>> {
    use_context::<Rc<RouteTable>>()
}

/// Route switch function.
pub fn switch(route: Route) -> Html {
    html! { <RouteView {route} /> }
}

#[derive(Properties, PartialEq)]
struct RouteViewProps {
    route: Route,
}

/// Resolves the current route through the table and activates its view.
#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let table = use_route_table();
    let navigator = use_navigator();
    let path = props.route.to_path();

    let resolution = use_memo((table, path), |(table, path)| {
        table.as_ref().map(|table| table.resolve(path))
    });

    // Redirects replace the history entry, so "back" skips them.
    let redirect_to = match &*resolution {
        Some(Ok(Resolution {
            view,
            redirected_from: Some(_),
            ..
        })) => Route::for_view(view),
        _ => None,
    };
    use_effect_with(redirect_to.clone(), move |redirect_to| {
        if let (Some(navigator), Some(to)) = (navigator, redirect_to) {
            tracing::debug!(?to, "Redirecting");
            navigator.replace(to);
        }
    });

    match &*resolution {
        None => {
            tracing::error!("Route table missing from context");
            html! { <NotFoundPage /> }
        }
        Some(Err(ResolveError::NotFound(path))) => {
            tracing::debug!(%path, "No view for path");
            html! { <NotFoundPage /> }
        }
        Some(Err(err)) => {
            tracing::warn!(%err, "Failed to resolve route");
            html! { <NotFoundPage /> }
        }
        Some(Ok(resolution)) if resolution.redirected_from.is_some() => {
            if redirect_to.is_none() {
                tracing::warn!(path = %resolution.path, "Redirect target has no route");
                return html! { <NotFoundPage /> };
            }
            html! {}
        }
        Some(Ok(resolution)) => render_view(&resolution.view),
    }
}

/// Maps a resolved view to its component.
fn render_view(view: &ViewRequest) -> Html {
    match view {
        ViewRequest::Listing { level, id } => html! {
            <ListingPage level={*level} id={id.clone().map(AttrValue::from)} />
        },
        ViewRequest::Details { level, id } => html! {
            <DetailsPage level={AttrValue::from(level.clone())} id={AttrValue::from(id.clone())} />
        },
    }
}

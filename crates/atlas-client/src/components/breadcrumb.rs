//! Trail from the top-level listing to the current listing.

use atlas_core::Level;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct BreadcrumbProps {
    /// Tier of the current listing.
    pub level: Level,
    /// Parent entity id of the current listing.
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BreadcrumbProps) -> Html {
    let level = props.level;
    if level == Level::Division {
        return html! {};
    }

    // The parent entity links to its details.
    let parent = level
        .parent()
        .zip(props.id.as_ref())
        .map(|(parent, id)| (format!("{} {}", parent.title(), id), Route::details(parent, id)));

    html! {
        <nav class="breadcrumb">
            <Link<Route> to={Route::Divisions}>{ Level::Division.plural_title() }</Link<Route>>
            if let Some((label, route)) = parent {
                <span class="breadcrumb-separator">{ " › " }</span>
                if let Some(route) = route {
                    <Link<Route> to={route}>{ label }</Link<Route>>
                } else {
                    <span>{ label }</span>
                }
            }
            <span class="breadcrumb-separator">{ " › " }</span>
            <span class="breadcrumb-current">{ level.plural_title() }</span>
        </nav>
    }
}

//! Navigation links for one entity: its details and its child listing.

use atlas_core::Level;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct EntityLinksProps {
    pub level: Level,
    pub id: AttrValue,
    /// Whether to link to the entity's details page.
    #[prop_or(true)]
    pub show_details: bool,
}

#[function_component(EntityLinks)]
pub fn entity_links(props: &EntityLinksProps) -> Html {
    let level = props.level;
    let id = props.id.as_str();

    let details = props
        .show_details
        .then(|| Route::details(level, id))
        .flatten();
    let children = level.child().zip(Route::children(level, id));

    if details.is_none() && children.is_none() {
        return html! {};
    }

    html! {
        <ul class="entity-links">
            if let Some(route) = details {
                <li>
                    <Link<Route> to={route}>
                        { format!("{} {} details", level.title(), id) }
                    </Link<Route>>
                </li>
            }
            if let Some((child, route)) = children {
                <li>
                    <Link<Route> to={route}>
                        { format!("{} of {} {}", child.plural_title(), level.title(), id) }
                    </Link<Route>>
                </li>
            }
        </ul>
    }
}

//! Listing page: the entities of one tier, optionally under a parent.

use atlas_core::Level;
use yew::prelude::*;

use crate::components::{Breadcrumb, EntityLookup};

#[derive(Properties, PartialEq)]
pub struct ListingPageProps {
    /// Tier being listed.
    pub level: Level,
    /// Parent entity id; absent for the top tier.
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(ListingPage)]
pub fn listing_page(props: &ListingPageProps) -> Html {
    let level = props.level;

    let heading = match (level.parent(), &props.id) {
        (Some(parent), Some(id)) => {
            format!("{} of {} {}", level.plural_title(), parent.title(), id)
        }
        _ => level.plural_title().to_string(),
    };

    html! {
        <main class="page listing-page">
            <Breadcrumb {level} id={props.id.clone()} />
            <h1>{ heading }</h1>
            <EntityLookup {level} />
        </main>
    }
}

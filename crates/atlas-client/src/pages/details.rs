//! Details page for a single entity.

use atlas_core::Level;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::EntityLinks;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct DetailsPageProps {
    /// Tier as captured from the path; may name an unknown tier.
    pub level: AttrValue,
    pub id: AttrValue,
}

#[function_component(DetailsPage)]
pub fn details_page(props: &DetailsPageProps) -> Html {
    let level = match props.level.parse::<Level>() {
        Ok(level) => level,
        Err(err) => {
            tracing::warn!(%err, id = %props.id, "Details requested for unknown level");
            return html! {
                <main class="page details-page">
                    <h1>{ "Unknown level" }</h1>
                    <p>{ err.to_string() }</p>
                    <Link<Route> to={Route::Divisions}>{ "Back to divisions" }</Link<Route>>
                </main>
            };
        }
    };

    html! {
        <main class="page details-page">
            <h1>{ format!("{} {}", level.title(), props.id) }</h1>
            <dl class="details-fields">
                <dt>{ "Level" }</dt>
                <dd>{ level.title() }</dd>
                <dt>{ "Id" }</dt>
                <dd>{ props.id.clone() }</dd>
            </dl>
            <EntityLinks {level} id={props.id.clone()} show_details={false} />
            <Link<Route> to={Route::Divisions}>{ "Back to divisions" }</Link<Route>>
        </main>
    }
}

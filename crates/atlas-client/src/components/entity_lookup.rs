//! Id entry for the entities of a listing.

use atlas_core::Level;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::EntityLinks;

#[derive(Properties, PartialEq)]
pub struct EntityLookupProps {
    pub level: Level,
}

/// Text input for an entity id, followed by the links for that entity.
#[function_component(EntityLookup)]
pub fn entity_lookup(props: &EntityLookupProps) -> Html {
    let query = use_state(String::new);

    // Clear the input when navigating to another tier.
    {
        let query = query.clone();
        use_effect_with(props.level, move |_| {
            query.set(String::new());
        });
    }

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let id = query.trim().to_string();

    html! {
        <section class="entity-lookup">
            <label>
                { format!("{} id", props.level.title()) }
                <input
                    type="text"
                    value={(*query).clone()}
                    oninput={on_input}
                    placeholder={format!("Enter a {} id", props.level.as_str())}
                />
            </label>
            if !id.is_empty() {
                <EntityLinks level={props.level} id={AttrValue::from(id)} />
            }
        </section>
    }
}

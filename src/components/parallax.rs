use web_sys::Element;
use yew::prelude::*;

use crate::dom;
use crate::interaction::context::use_interaction;
use crate::motion::parallax::ParallaxLayer;

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    pub layer: ParallaxLayer,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Shifts its children vertically by the layer's share of the page scroll
/// progress. The transform is written straight to the element so scrolling
/// never re-renders the subtree.
#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let interaction = use_interaction();
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |(scroll, layer)| {
                let layer = *layer;
                let apply = move |progress: f64| {
                    if let Some(element) = node.cast::<Element>() {
                        dom::set_style(&element, &layer.style(progress));
                    }
                };
                apply(scroll.get());
                let subscription = scroll.subscribe(move |progress| apply(*progress));
                move || drop(subscription)
            },
            (interaction.scroll.clone(), props.layer),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={props.layer.style(interaction.scroll.get())}>
            { for props.children.iter() }
        </div>
    }
}

use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::safe_image::SafeImage;
use crate::config;
use crate::motion::css::Ambient;

#[derive(Properties, PartialEq)]
pub struct MascotProps {
    pub alt: AttrValue,
    /// Size and placement, supplied by the caller.
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub ambient: Option<Ambient>,
}

/// The shop mascot, optionally looping one of the ambient animations.
#[styled_component(Mascot)]
pub fn mascot(props: &MascotProps) -> Html {
    let base = css!(
        r#"
            position: relative;
            pointer-events: none;
        "#
    );
    let style = props.ambient.map(|ambient| ambient.to_css());

    html! {
        <div class={classes!(base, props.class.clone())} {style} aria-hidden="true">
            <SafeImage src={config::mascot_url()} alt={props.alt.clone()} />
        </div>
    }
}

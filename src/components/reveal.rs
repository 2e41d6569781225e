use yew::prelude::*;

use crate::config;
use crate::interaction::hooks::use_in_view;
use crate::motion::css::{Easing, MotionFrame, Transition};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Pose held until the element comes into view.
    #[prop_or(MotionFrame::hidden())]
    pub from: MotionFrame,
    /// Pose transitioned to once visible.
    #[prop_or(MotionFrame::REST)]
    pub to: MotionFrame,
    #[prop_or(Transition::new(1.0, Easing::EaseOut))]
    pub transition: Transition,
    /// Root margin in px; negative values delay the reveal.
    #[prop_or(config::REVEAL_MARGIN_NONE)]
    pub margin: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

pub fn reveal_style(from: MotionFrame, to: MotionFrame, transition: Transition, visible: bool) -> String {
    let frame = if visible { to } else { from };
    format!("{} {} will-change: opacity, transform;", frame.to_css(), transition.to_css())
}

/// Wrapper that animates its children from `from` to `to` the first time it
/// scrolls into view. Content above the fold animates right after mount.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.margin);
    let style = reveal_style(props.from, props.to, props.transition, visible);

    html! {
        <div ref={node} id={props.id.clone()} class={props.class.clone()} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_visible() {
        let from = MotionFrame::hidden().y(100.0);
        let transition = Transition::new(0.8, Easing::EaseOut).delay(0.2);

        let before = reveal_style(from, MotionFrame::REST, transition, false);
        let after = reveal_style(from, MotionFrame::REST, transition, true);

        assert!(before.starts_with("opacity: 0; transform: translate(0px, 100px)"));
        assert!(after.starts_with("opacity: 1; transform: translate(0px, 0px)"));
        // Same transition either way so the change animates.
        assert!(before.contains("transition: opacity 0.8s cubic-bezier(0, 0, 0.58, 1) 0.2s"));
        assert!(after.contains("transition: opacity 0.8s cubic-bezier(0, 0, 0.58, 1) 0.2s"));
    }
}

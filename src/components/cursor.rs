use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use stylist::yew::styled_component;
use web_sys::Element;
use yew::prelude::*;

use crate::dom;
use crate::interaction::context::use_interaction;
use crate::interaction::frame_loop::AnimationLoop;
use crate::interaction::pointer::{PointerPosition, SmoothedPointer};
use crate::motion::css::css_number;
use crate::motion::spring::SpringConfig;

/// Inline placement for the follower dot; hidden until the pointer has moved.
pub fn cursor_style(position: PointerPosition, visible: bool) -> String {
    format!(
        "left: {}px; top: {}px; opacity: {};",
        css_number(position.x),
        css_number(position.y),
        if visible { 1 } else { 0 }
    )
}

/// A dot that trails the pointer through a damped spring.
#[styled_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let interaction = use_interaction();
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |pointer| {
                debug!(
                    "cursor follower attached (damping ratio {:.2})",
                    SpringConfig::CURSOR.damping_ratio()
                );
                let smoothed = Rc::new(RefCell::new(SmoothedPointer::new(SpringConfig::CURSOR)));

                let frames = {
                    let smoothed = smoothed.clone();
                    Rc::new(AnimationLoop::new(move |dt| {
                        let mut smoothed = smoothed.borrow_mut();
                        let moving = smoothed.step(dt);
                        if let Some(element) = node.cast::<Element>() {
                            dom::set_style(&element, &cursor_style(smoothed.position(), smoothed.is_primed()));
                        }
                        moving
                    }))
                };

                let subscription = {
                    let frames = frames.clone();
                    pointer.subscribe(move |position| {
                        smoothed.borrow_mut().set_target(*position);
                        frames.wake();
                    })
                };

                move || {
                    drop(subscription);
                    drop(frames);
                }
            },
            interaction.pointer.clone(),
        );
    }

    let style = css!(
        r#"
            position: fixed;
            width: 24px;
            height: 24px;
            pointer-events: none;
            z-index: 50;
            mix-blend-mode: difference;
            transform: translate(-50%, -50%);
            transition: opacity 0.3s ease-out;

            .dot {
                width: 100%;
                height: 100%;
                border-radius: 9999px;
                background: var(--pink-500);
                opacity: 0.5;
            }

            @media (hover: none) {
                display: none;
            }
        "#
    );

    html! {
        <div ref={node} class={style} style={cursor_style(PointerPosition::default(), false)} aria-hidden="true">
            <div class="dot"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_before_first_move() {
        assert_eq!(
            cursor_style(PointerPosition::default(), false),
            "left: 0px; top: 0px; opacity: 0;"
        );
    }

    #[test]
    fn placed_at_smoothed_position() {
        assert_eq!(
            cursor_style(PointerPosition::new(120.5, 48.25), true),
            "left: 120.5px; top: 48.25px; opacity: 1;"
        );
    }
}

use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::motion::css::{Easing, MotionFrame, Transition};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

/// Centred title and strapline that rise into place.
#[styled_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let style = css!(
        r#"
            text-align: center;
            margin-bottom: 5rem;

            h2 {
                font-family: var(--font-display);
                font-weight: 400;
                font-size: 3rem;
                color: #1f2937;
                margin: 0 0 1.5rem;
            }

            p {
                font-size: 1.25rem;
                font-weight: 300;
                color: var(--muted);
                max-width: 42rem;
                margin: 0 auto;
            }

            @media (min-width: 768px) {
                h2 {
                    font-size: 3.75rem;
                }
            }

            @media (min-width: 1024px) {
                h2 {
                    font-size: 4.5rem;
                }
            }
        "#
    );

    html! {
        <Reveal
            class={classes!(style)}
            from={MotionFrame::hidden().y(100.0)}
            transition={Transition::new(1.0, Easing::EaseOut)}
        >
            <h2>{ props.title.clone() }</h2>
            <p>{ props.subtitle.clone() }</p>
        </Reveal>
    }
}

use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::mascot::Mascot;
use crate::components::reveal::Reveal;
use crate::components::safe_image::SafeImage;
use crate::config;
use crate::motion::css::{Ambient, Easing, MotionFrame, Transition};

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    /// File name under the image base path.
    pub image: &'static str,
    pub alt: AttrValue,
    /// Pose the section enters from.
    pub from: MotionFrame,
    /// Duration of the hover zoom, seconds.
    #[prop_or(0.6)]
    pub zoom_duration: f64,
    /// Show the small floating mascot in the corner.
    #[prop_or_default]
    pub with_mascot: bool,
}

/// Full-bleed photo band between the content sections.
#[styled_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let style = css!(
        r#"
            padding: 6rem 2rem;
            position: relative;

            .inner {
                max-width: 80rem;
                margin: 0 auto;
            }

            .frame {
                position: relative;
                height: 60vh;
                overflow: hidden;
                box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                transition: transform ${zoom}s ease-out;
            }

            .frame:hover {
                transform: scale(1.02);
            }

            .photo {
                transition: transform 0.7s;
            }

            .frame:hover .photo {
                transform: scale(1.05);
            }

            .shade {
                position: absolute;
                inset: 0;
                background: linear-gradient(to top, rgba(0, 0, 0, 0.3), transparent);
            }

            .corner-mascot {
                position: absolute;
                bottom: 2rem;
                right: 2rem;
                width: 5rem;
                height: 5rem;
                opacity: 0.8;
            }

            @media (min-width: 768px) {
                .frame {
                    height: 70vh;
                }
            }
        "#,
        zoom = props.zoom_duration
    );

    html! {
        <section class={style}>
            <Reveal
                class={classes!("inner")}
                from={props.from}
                transition={Transition::new(1.2, Easing::EaseOut)}
                margin={config::REVEAL_MARGIN_IMAGE}
            >
                <div class="frame">
                    <SafeImage class={classes!("photo")} src={config::asset_url(props.image)} alt={props.alt.clone()} cover=true />
                    <div class="shade"></div>
                    if props.with_mascot {
                        <Mascot
                            class={classes!("corner-mascot")}
                            alt="Mascot"
                            ambient={Ambient::Float { duration: 4.0, delay: 0.0 }}
                        />
                    }
                </div>
            </Reveal>
        </section>
    }
}

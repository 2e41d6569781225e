use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::button::{ButtonVariant, CtaButton};
use crate::components::icon::{Icon, IconKind};
use crate::components::mascot::Mascot;
use crate::components::parallax::Parallax;
use crate::components::reveal::Reveal;
use crate::motion::css::{Ambient, Easing, MotionFrame, Transition};
use crate::motion::parallax::ParallaxLayer;
use crate::sections::flavours::FLAVOURS_SECTION_ID;
use crate::sections::header::jump_to;
use crate::sections::visit::VISIT_SECTION_ID;

/// Entrance for the `index`-th line of the hero copy.
fn headline_transition(index: usize) -> Transition {
    Transition::new(0.8, Easing::Spring).stagger(0.3, 0.1, index)
}

#[styled_component(Hero)]
pub fn hero() -> Html {
    let style = css!(
        r#"
            position: relative;
            min-height: 100vh;

            .backdrop {
                position: absolute;
                inset: 0;
                overflow: hidden;
                pointer-events: none;
            }

            .dot {
                position: absolute;
                border-radius: 9999px;
            }

            .dot.one {
                top: 25%;
                left: 25%;
                width: 0.5rem;
                height: 0.5rem;
                background: var(--pink-300);
            }

            .dot.two {
                top: 75%;
                right: 33%;
                width: 0.75rem;
                height: 0.75rem;
                background: var(--rose-300);
            }

            .content {
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                text-align: center;
                padding: 6rem 2rem 0;
            }

            .mascot-stage {
                position: relative;
                width: 16rem;
                height: 16rem;
                margin-bottom: 4rem;
                transition: transform 0.6s ease-out;
            }

            .mascot-stage:hover {
                transform: scale(1.1);
            }

            .glow {
                position: absolute;
                inset: 0;
                border-radius: 9999px;
                filter: blur(64px);
                background: linear-gradient(90deg, rgba(244, 114, 182, 0.2), rgba(251, 113, 133, 0.3), rgba(244, 114, 182, 0.2));
            }

            .hero-mascot {
                width: 100%;
                height: 100%;
                z-index: 10;
                filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
            }

            .heart {
                position: absolute;
                top: -1rem;
                right: -1rem;
                color: var(--pink-400);
            }

            .heart svg {
                width: 1.5rem;
                height: 1.5rem;
                fill: currentColor;
            }

            .copy {
                max-width: 64rem;
                margin: 0 auto;
            }

            h2 {
                font-family: var(--font-display);
                font-weight: 400;
                font-size: 3rem;
                line-height: 1.15;
                margin: 0 0 2rem;
                color: #1f2937;
            }

            h3 {
                font-family: var(--font-display);
                font-weight: 400;
                font-size: 2.25rem;
                line-height: 1.15;
                margin: 0 0 3rem;
            }

            p {
                font-size: 1.25rem;
                font-weight: 300;
                line-height: 1.7;
                color: var(--muted);
                max-width: 48rem;
                margin: 0 auto 4rem;
            }

            .actions {
                display: flex;
                flex-direction: column;
                gap: 1.5rem;
                justify-content: center;
            }

            @media (min-width: 640px) {
                .actions {
                    flex-direction: row;
                }
            }

            @media (min-width: 768px) {
                .mascot-stage {
                    width: 20rem;
                    height: 20rem;
                }
                h2 {
                    font-size: 4.5rem;
                }
                h3 {
                    font-size: 3.75rem;
                }
                p {
                    font-size: 1.5rem;
                }
            }

            @media (min-width: 1024px) {
                h2 {
                    font-size: 6rem;
                }
                h3 {
                    font-size: 4.5rem;
                }
            }
        "#
    );

    let line_from = MotionFrame::hidden().y(50.0);

    html! {
        <section class={style}>
            <Parallax layer={ParallaxLayer::Background} class={classes!("backdrop")}>
                <div class="dot one" style={Ambient::Pulse { duration: 4.0, delay: 0.0 }.to_css()}></div>
                <div class="dot two" style={Ambient::Pulse { duration: 6.0, delay: 2.0 }.to_css()}></div>
            </Parallax>

            <Parallax layer={ParallaxLayer::Text} class={classes!("content")}>
                <Parallax layer={ParallaxLayer::Mascot}>
                    <Reveal
                        from={MotionFrame::REST.scale(0.0).rotate(-180.0)}
                        transition={Transition::new(1.5, Easing::Spring)}
                    >
                        <div class="mascot-stage">
                            <div class="glow" style={Ambient::Pulse { duration: 4.0, delay: 0.0 }.to_css()}></div>
                            <Mascot
                                class={classes!("hero-mascot")}
                                alt="Just Crave It Mascot"
                                ambient={Ambient::Sway { duration: 5.0 }}
                            />
                            <div class="heart" style={Ambient::Float { duration: 3.0, delay: 0.0 }.to_css()}>
                                <Icon kind={IconKind::Heart} />
                            </div>
                        </div>
                    </Reveal>
                </Parallax>

                <div class="copy">
                    <Reveal from={line_from} transition={headline_transition(0)}>
                        <h2>{"Australia's First"}</h2>
                    </Reveal>
                    <Reveal from={line_from} transition={headline_transition(1)}>
                        <h3 class="gradient-text">{"Self‑Serve Froyo Experience"}</h3>
                    </Reveal>
                    <Reveal from={line_from} transition={headline_transition(2)}>
                        <p>
                            {"Pay by the cup, not by weight. Create your perfect frozen yogurt with nine delicious flavours and thirty‑plus toppings."}
                        </p>
                    </Reveal>
                    <Reveal from={line_from} transition={headline_transition(3)} class={classes!("actions")}>
                        <CtaButton
                            label="Explore Flavours"
                            href={format!("#{}", FLAVOURS_SECTION_ID)}
                            onclick={jump_to(FLAVOURS_SECTION_ID)}
                        />
                        <CtaButton
                            label="Visit Us"
                            href={format!("#{}", VISIT_SECTION_ID)}
                            variant={ButtonVariant::Outline}
                            onclick={jump_to(VISIT_SECTION_ID)}
                        />
                    </Reveal>
                </div>
            </Parallax>
        </section>
    }
}

use stylist::yew::styled_component;
use yew::prelude::*;

use crate::catalog::CONTACT;
use crate::components::mascot::Mascot;
use crate::components::reveal::Reveal;
use crate::motion::css::{Ambient, Easing, MotionFrame, Transition};

#[styled_component(Footer)]
pub fn footer() -> Html {
    let style = css!(
        r#"
            position: relative;
            overflow: hidden;
            padding: 4rem 2rem;
            color: white;
            background: #111827;

            .footer-mascot {
                position: absolute;
                top: 2.5rem;
                left: 50%;
                width: 6rem;
                height: 6rem;
                opacity: 0.1;
            }

            .inner {
                position: relative;
                z-index: 10;
                max-width: 72rem;
                margin: 0 auto;
                text-align: center;
            }

            .brand {
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 1rem;
                margin-bottom: 1.5rem;
            }

            .footer-logo {
                width: 3rem;
                height: 3rem;
                transition: transform 0.6s ease-out;
            }

            .footer-logo:hover {
                transform: scale(1.2) rotate(360deg);
            }

            h3 {
                margin: 0;
                font-family: var(--font-display);
                font-size: 2.25rem;
                font-weight: 400;
                background: linear-gradient(90deg, var(--pink-400), var(--rose-400));
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            .tagline {
                margin: 0 0 2rem;
                font-size: 1.125rem;
                font-weight: 300;
                color: #9ca3af;
            }

            .legal {
                margin: 0;
                font-size: 0.875rem;
                font-weight: 300;
                color: #6b7280;
            }
        "#
    );

    let rise = |offset: f64| MotionFrame::hidden().y(offset);

    html! {
        <footer class={style}>
            <Mascot
                class={classes!("footer-mascot")}
                alt="Footer Mascot"
                ambient={Ambient::Spin { duration: 12.0 }}
            />
            <div class="inner">
                <Reveal class={classes!("brand")} from={rise(30.0)} transition={Transition::new(1.0, Easing::EaseOut)}>
                    <Mascot class={classes!("footer-logo")} alt="Footer Logo" />
                    <h3>{"Just Crave It"}</h3>
                </Reveal>
                <Reveal from={rise(20.0)} transition={Transition::new(1.0, Easing::EaseOut).delay(0.2)}>
                    <p class="tagline">{"Australia's first self‑serve frozen yogurt experience"}</p>
                </Reveal>
                <Reveal from={rise(20.0)} transition={Transition::new(1.0, Easing::EaseOut).delay(0.4)}>
                    <p class="legal">
                        { format!("© 2024 Just Crave It. All rights reserved. | {}", CONTACT.full_address()) }
                    </p>
                </Reveal>
            </div>
        </footer>
    }
}

use log::warn;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::mascot::Mascot;
use crate::components::reveal::Reveal;
use crate::dom;
use crate::motion::css::{Ambient, Easing, MotionFrame, Transition};
use crate::sections::visit::VISIT_SECTION_ID;

/// Click handler that smooth-scrolls to the section with `id`.
pub fn jump_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = dom::scroll_to_section(id) {
            warn!("cannot scroll to #{}: {}", id, err);
        }
    })
}

#[styled_component(Header)]
pub fn header() -> Html {
    let style = css!(
        r#"
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 40;
            background: rgba(255, 255, 255, 0.9);
            backdrop-filter: blur(24px);
            border-bottom: 1px solid rgba(252, 231, 243, 0.5);

            .bar {
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 2rem;
            }

            .brand {
                display: flex;
                align-items: center;
                gap: 1rem;
            }

            .logo {
                width: 2.5rem;
                height: 2.5rem;
                transition: transform 0.6s ease-out;
            }

            .logo:hover {
                transform: scale(1.2) rotate(360deg);
            }

            h1 {
                margin: 0;
                font-family: var(--font-display);
                font-size: 1.875rem;
                letter-spacing: 0.05em;
                font-weight: 400;
                transition: transform 0.2s cubic-bezier(0.34, 1.56, 0.64, 1);
            }

            h1:hover {
                transform: scale(1.05);
            }

            .info {
                display: flex;
                align-items: center;
                gap: 0.75rem;
                font-family: var(--font-display);
                font-size: 1.125rem;
                color: #374151;
                cursor: pointer;
                transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1), color 0.2s;
            }

            .info:hover {
                transform: translateX(8px);
                color: var(--pink-600);
            }

            .info span {
                display: inline-flex;
            }

            .info svg {
                width: 1.25rem;
                height: 1.25rem;
            }

            @media (min-width: 768px) {
                .bar {
                    padding: 3rem;
                }
                h1 {
                    font-size: 2.25rem;
                }
                .info {
                    font-size: 1.25rem;
                }
            }
        "#
    );

    html! {
        <header class={style}>
            <Reveal
                class={classes!("bar")}
                from={MotionFrame::hidden().y(-30.0)}
                transition={Transition::new(1.0, Easing::EaseOut)}
            >
                <div class="brand">
                    <Mascot class={classes!("logo")} alt="Just Crave It Logo" />
                    <h1 class="gradient-text">{"Just Crave It"}</h1>
                </div>
                <a class="info" href={format!("#{}", VISIT_SECTION_ID)} onclick={jump_to(VISIT_SECTION_ID)}>
                    <span style={Ambient::Nudge { duration: 2.0 }.to_css()}>
                        <Icon kind={IconKind::ArrowRight} />
                    </span>
                    <span>{"Info"}</span>
                </a>
            </Reveal>
        </header>
    }
}

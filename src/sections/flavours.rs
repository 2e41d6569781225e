use log::debug;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::catalog::{Flavour, FLAVOURS};
use crate::components::mascot::Mascot;
use crate::components::reveal::Reveal;
use crate::components::safe_image::SafeImage;
use crate::config;
use crate::interaction::hover::{HoverAction, HoverState};
use crate::motion::css::{Ambient, Easing, MotionFrame, Transition};
use crate::sections::heading::SectionHeading;

pub const FLAVOURS_SECTION_ID: &str = "flavours";

#[derive(Properties, PartialEq)]
pub struct FlavourCardProps {
    pub flavour: Flavour,
    pub index: usize,
    pub hovered: bool,
    pub on_hover: Callback<HoverAction>,
}

#[function_component(FlavourCard)]
pub fn flavour_card(props: &FlavourCardProps) -> Html {
    let name = props.flavour.name;
    let onmouseenter = props.on_hover.reform(move |_: MouseEvent| HoverAction::Enter(name));
    let onmouseleave = props.on_hover.reform(move |_: MouseEvent| HoverAction::Exit(name));

    html! {
        <Reveal
            from={MotionFrame::hidden().y(100.0)}
            transition={Transition::new(0.8, Easing::EaseOut).stagger(0.0, 0.1, props.index)}
            margin={config::REVEAL_MARGIN_CARD}
        >
            <article
                class={classes!("card", props.hovered.then_some("is-hovered"))}
                data-flavour={name}
                {onmouseenter}
                {onmouseleave}
            >
                <div class="media">
                    if props.flavour.popular {
                        <div class="badge">{"Popular"}</div>
                    }
                    <div class="zoom">
                        <SafeImage src={config::asset_url(props.flavour.image)} alt={name} cover=true />
                    </div>
                    <div class="overlay">
                        <p>{ props.flavour.description }</p>
                    </div>
                    <Mascot class={classes!("mini-mascot")} alt="Mini Mascot" />
                </div>
                <div class="body">
                    <h3>{ name }</h3>
                </div>
            </article>
        </Reveal>
    }
}

/// Grid of every flavour. Hovering a card reveals its description.
#[styled_component(FlavourGallery)]
pub fn flavour_gallery() -> Html {
    let hover = use_reducer_eq(HoverState::default);
    let on_hover = {
        let hover = hover.clone();
        Callback::from(move |action: HoverAction| hover.dispatch(action))
    };

    use_effect_with_deps(
        |hovered| {
            if let Some(name) = hovered {
                debug!("hovering flavour {}", name);
            }
            || ()
        },
        hover.hovered(),
    );

    let style = css!(
        r#"
            position: relative;
            padding: 6rem 2rem;

            .section-mascot {
                position: absolute;
                top: 2.5rem;
                left: 2.5rem;
                width: 4rem;
                height: 4rem;
                opacity: 0.2;
            }

            .grid {
                display: grid;
                grid-template-columns: 1fr;
                gap: 2rem;
                max-width: 80rem;
                margin: 0 auto;
            }

            .card {
                position: relative;
                overflow: hidden;
                background: white;
                cursor: pointer;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                transition: transform 0.3s ease-out, box-shadow 0.5s;
            }

            .card:hover {
                transform: translateY(-20px);
                box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
            }

            .media {
                position: relative;
                aspect-ratio: 1 / 1;
                overflow: hidden;
            }

            .zoom {
                position: absolute;
                inset: 0;
                transition: transform 0.6s ease-out;
            }

            .zoom:hover {
                transform: scale(1.1);
            }

            .badge {
                position: absolute;
                top: 1rem;
                right: 1rem;
                z-index: 10;
                padding: 0.5rem 1rem;
                font-family: var(--font-display);
                font-size: 0.875rem;
                font-weight: 500;
                color: white;
                background: linear-gradient(90deg, var(--pink-500), var(--rose-500));
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                animation: jc-pop 0.4s cubic-bezier(0.34, 1.56, 0.64, 1) both;
            }

            .overlay {
                position: absolute;
                inset: 0;
                display: flex;
                align-items: flex-end;
                padding: 1.5rem;
                opacity: 0;
                background: linear-gradient(to top, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.2), transparent);
                transition: opacity 0.3s;
            }

            .overlay p {
                margin: 0;
                color: white;
                font-size: 0.875rem;
                font-weight: 300;
            }

            .mini-mascot {
                position: absolute;
                top: 1rem;
                left: 1rem;
                width: 2rem;
                height: 2rem;
                opacity: 0;
                transform: scale(0);
                transition: opacity 0.3s, transform 0.3s;
            }

            .body {
                padding: 2rem;
                text-align: center;
            }

            .body h3 {
                margin: 0;
                font-family: var(--font-display);
                font-size: 1.5rem;
                font-weight: 400;
                letter-spacing: 0.025em;
                color: var(--ink);
                transition: color 0.3s;
            }

            .is-hovered .overlay {
                opacity: 1;
            }

            .is-hovered .mini-mascot {
                opacity: 0.8;
                transform: scale(1);
            }

            .is-hovered .body h3 {
                color: var(--pink-500);
            }

            @media (min-width: 768px) {
                .grid {
                    grid-template-columns: repeat(2, 1fr);
                }
            }

            @media (min-width: 1024px) {
                .grid {
                    grid-template-columns: repeat(3, 1fr);
                }
            }

            @media (min-width: 1280px) {
                .grid {
                    grid-template-columns: repeat(4, 1fr);
                }
            }
        "#
    );

    html! {
        <section id={FLAVOURS_SECTION_ID} class={style}>
            <Reveal transition={Transition::new(1.0, Easing::Linear)} margin={config::REVEAL_MARGIN_SECTION}>
                <Mascot class={classes!("section-mascot")} alt="Section Mascot" ambient={Ambient::Spin { duration: 20.0 }} />
                <SectionHeading
                    title="Flavours"
                    subtitle="Each flavour crafted with care, served with endless possibilities"
                />
                <div class="grid">
                    { for FLAVOURS.iter().enumerate().map(|(index, flavour)| html! {
                        <FlavourCard
                            key={flavour.name}
                            flavour={*flavour}
                            {index}
                            hovered={hover.is_hovered(flavour.name)}
                            on_hover={on_hover.clone()}
                        />
                    }) }
                </div>
            </Reveal>
        </section>
    }
}

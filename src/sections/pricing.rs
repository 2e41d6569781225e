use stylist::yew::styled_component;
use yew::prelude::*;

use crate::catalog::{CupSize, CUP_SIZES};
use crate::components::mascot::Mascot;
use crate::components::reveal::Reveal;
use crate::config;
use crate::motion::css::{Ambient, Easing, MotionFrame, Transition};
use crate::sections::heading::SectionHeading;

pub const PRICING_SECTION_ID: &str = "pricing";

#[derive(Properties, PartialEq)]
pub struct PriceCardProps {
    pub cup: CupSize,
    pub index: usize,
}

#[function_component(PriceCard)]
pub fn price_card(props: &PriceCardProps) -> Html {
    html! {
        <Reveal
            from={MotionFrame::hidden().y(100.0)}
            transition={Transition::new(0.8, Easing::EaseOut).stagger(0.0, 0.1, props.index)}
        >
            <article class="price-card" data-cup={props.cup.size}>
                <Mascot
                    class={classes!("price-mascot")}
                    alt="Price Mascot"
                    ambient={Ambient::Spin { duration: 10.0 }}
                />
                <h3>{ props.cup.size }</h3>
                <p class="price gradient-text">{ props.cup.price_label() }</p>
                <p class="note">{ props.cup.description }</p>
            </article>
        </Reveal>
    }
}

#[styled_component(Pricing)]
pub fn pricing() -> Html {
    let style = css!(
        r#"
            position: relative;
            padding: 6rem 2rem;
            background: linear-gradient(90deg, rgba(253, 242, 248, 0.5), rgba(255, 241, 242, 0.5));

            .backdrop-mascot {
                position: absolute;
                top: 50%;
                right: 2.5rem;
                width: 8rem;
                height: 8rem;
                opacity: 0.05;
            }

            .grid {
                display: grid;
                grid-template-columns: 1fr;
                gap: 2rem;
                max-width: 72rem;
                margin: 0 auto;
            }

            .price-card {
                position: relative;
                overflow: hidden;
                padding: 2rem;
                text-align: center;
                background: white;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                transition: transform 0.3s ease-out, box-shadow 0.5s;
            }

            .price-card:hover {
                transform: translateY(-10px);
                box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
            }

            .price-mascot {
                position: absolute;
                top: 0.5rem;
                right: 0.5rem;
                width: 1.5rem;
                height: 1.5rem;
                opacity: 0.2;
            }

            h3 {
                margin: 0 0 1rem;
                font-family: var(--font-display);
                font-size: 1.5rem;
                font-weight: 400;
                color: #1f2937;
                transition: color 0.2s;
            }

            .price-card:hover h3 {
                color: var(--pink-600);
            }

            .price {
                margin: 0 0 1rem;
                font-family: var(--font-display);
                font-size: 3rem;
                font-weight: 400;
            }

            .note {
                margin: 0;
                font-size: 0.875rem;
                font-weight: 300;
                color: #6b7280;
            }

            @media (min-width: 768px) {
                .grid {
                    grid-template-columns: repeat(2, 1fr);
                }
            }

            @media (min-width: 1024px) {
                .grid {
                    grid-template-columns: repeat(4, 1fr);
                }
            }
        "#
    );

    html! {
        <section id={PRICING_SECTION_ID} class={style}>
            <Reveal transition={Transition::new(1.0, Easing::Linear)} margin={config::REVEAL_MARGIN_SECTION}>
                <Mascot
                    class={classes!("backdrop-mascot")}
                    alt="Background Mascot"
                    ambient={Ambient::Float { duration: 8.0, delay: 0.0 }}
                />
                <SectionHeading
                    title="Pricing"
                    subtitle="Simple, transparent pricing. Pay by the cup, not by weight."
                />
                <div class="grid">
                    { for CUP_SIZES.iter().enumerate().map(|(index, cup)| html! {
                        <PriceCard key={cup.size} cup={*cup} {index} />
                    }) }
                </div>
            </Reveal>
        </section>
    }
}

use stylist::yew::styled_component;
use yew::prelude::*;

use crate::catalog::{ContactDetails, CONTACT};
use crate::components::button::CtaButton;
use crate::components::icon::{Icon, IconKind};
use crate::components::mascot::Mascot;
use crate::components::reveal::Reveal;
use crate::config;
use crate::motion::css::{Ambient, Easing, MotionFrame, Transition};
use crate::sections::heading::SectionHeading;

pub const VISIT_SECTION_ID: &str = "visit";

#[derive(Properties, PartialEq)]
struct ContactRowProps {
    icon: IconKind,
    title: AttrValue,
    children: Children,
}

#[function_component(ContactRow)]
fn contact_row(props: &ContactRowProps) -> Html {
    html! {
        <div class="row">
            <Icon kind={props.icon} class={classes!("row-icon")} />
            <div>
                <h3>{ props.title.clone() }</h3>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactCardProps {
    pub contact: ContactDetails,
}

/// Address, opening hours, phone and email.
#[function_component(ContactCard)]
pub fn contact_card(props: &ContactCardProps) -> Html {
    let contact = props.contact;
    html! {
        <div class="panel contact">
            <Mascot
                class={classes!("panel-mascot")}
                alt="Contact Mascot"
                ambient={Ambient::Spin { duration: 15.0 }}
            />
            <ContactRow icon={IconKind::MapPin} title="Location">
                <p>{ contact.street }<br />{ contact.locality }</p>
            </ContactRow>
            <ContactRow icon={IconKind::Clock} title="Hours">
                <p>
                    { for contact.hours.iter().enumerate().map(|(i, hours)| html! {
                        <>
                            if i > 0 {
                                <br />
                            }
                            { hours.label() }
                        </>
                    }) }
                </p>
            </ContactRow>
            <ContactRow icon={IconKind::Phone} title="Phone">
                <p><a href={contact.phone_href()}>{ contact.phone }</a></p>
            </ContactRow>
            <ContactRow icon={IconKind::Mail} title="Email">
                <p><a href={contact.email_href()}>{ contact.email }</a></p>
            </ContactRow>
        </div>
    }
}

#[styled_component(Visit)]
pub fn visit() -> Html {
    let style = css!(
        r#"
            padding: 6rem 2rem;

            .columns {
                max-width: 56rem;
                margin: 0 auto;
                display: grid;
                grid-template-columns: 1fr;
                gap: 4rem;
            }

            .panel {
                position: relative;
                overflow: hidden;
                padding: 2.5rem;
                background: white;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                transition: box-shadow 0.5s;
            }

            .panel:hover {
                box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
            }

            .contact {
                display: flex;
                flex-direction: column;
                gap: 2rem;
            }

            .panel-mascot {
                position: absolute;
                top: -1rem;
                right: -1rem;
                width: 4rem;
                height: 4rem;
                opacity: 0.1;
            }

            .cta-mascot {
                position: absolute;
                bottom: 1rem;
                right: 1rem;
                width: 3rem;
                height: 3rem;
                opacity: 0.2;
            }

            .row {
                display: flex;
                align-items: flex-start;
                gap: 1.5rem;
                transition: transform 0.3s;
            }

            .row:hover {
                transform: translateX(10px);
            }

            .row-icon {
                flex-shrink: 0;
                width: 1.5rem;
                height: 1.5rem;
                margin-top: 0.25rem;
                color: var(--pink-500);
            }

            .row h3 {
                margin: 0 0 0.5rem;
                font-family: var(--font-display);
                font-size: 1.25rem;
                font-weight: 500;
                color: #1f2937;
            }

            .row p {
                margin: 0;
                font-weight: 300;
                line-height: 1.6;
                color: var(--muted);
            }

            .row a:hover {
                color: var(--pink-600);
            }

            .cta h3 {
                margin: 0 0 1.5rem;
                font-family: var(--font-display);
                font-size: 1.875rem;
                font-weight: 500;
                color: #1f2937;
            }

            .cta p {
                margin: 0 0 2rem;
                font-size: 1.125rem;
                font-weight: 300;
                line-height: 1.6;
                color: var(--muted);
            }

            @media (min-width: 768px) {
                .columns {
                    grid-template-columns: repeat(2, 1fr);
                }
            }
        "#
    );

    html! {
        <section id={VISIT_SECTION_ID} class={style}>
            <Reveal transition={Transition::new(1.0, Easing::Linear)} margin={config::REVEAL_MARGIN_SECTION}>
                <SectionHeading title="Visit Us" subtitle="Located in the heart of Carlton, Melbourne" />
                <div class="columns">
                    <Reveal from={MotionFrame::hidden().x(-100.0)} transition={Transition::new(1.0, Easing::EaseOut)}>
                        <ContactCard contact={CONTACT} />
                    </Reveal>
                    <Reveal from={MotionFrame::hidden().x(100.0)} transition={Transition::new(1.0, Easing::EaseOut)}>
                        <div class="panel cta">
                            <Mascot
                                class={classes!("cta-mascot")}
                                alt="CTA Mascot"
                                ambient={Ambient::Float { duration: 4.0, delay: 0.0 }}
                            />
                            <h3>{"Ready to Crave?"}</h3>
                            <p>
                                {"Come experience Australia's first self‑serve frozen yogurt bar. Create your perfect treat today."}
                            </p>
                            <CtaButton
                                label="Get Directions"
                                href={CONTACT.directions_url()}
                                external=true
                                full_width=true
                            />
                        </div>
                    </Reveal>
                </div>
            </Reveal>
        </section>
    }
}

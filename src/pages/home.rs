use log::{debug, info};
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::cursor::CustomCursor;
use crate::components::mascot::Mascot;
use crate::interaction::context::InteractionContext;
use crate::interaction::hooks::{use_pointer_tracking, use_scroll_progress};
use crate::motion::css::{Ambient, MotionFrame};
use crate::sections::flavours::FlavourGallery;
use crate::sections::footer::Footer;
use crate::sections::header::Header;
use crate::sections::hero::Hero;
use crate::sections::pricing::Pricing;
use crate::sections::showcase::Showcase;
use crate::sections::visit::Visit;

/// The whole site. Owns the interaction signals for this page view: they are
/// created on mount, fed by window listeners scoped to this component, and
/// shared with the sections through context.
#[styled_component(Home)]
pub fn home() -> Html {
    let interaction = use_memo(|_| InteractionContext::new(), ());
    let container = use_node_ref();

    use_scroll_progress(container.clone(), interaction.scroll.clone());
    use_pointer_tracking(interaction.pointer.clone());

    use_effect_with_deps(
        |_| {
            info!("Home page view started");
            || debug!("Home page view torn down")
        },
        (),
    );

    let style = css!(
        r#"
            position: relative;
            min-height: 100vh;
            overflow: hidden;
            background: linear-gradient(135deg, var(--rose-50), #fef7fb, white);

            .drift {
                position: fixed;
                z-index: 10;
                opacity: 0.1;
            }

            .drift.top {
                top: 5rem;
                right: 2.5rem;
                width: 4rem;
                height: 4rem;
            }

            .drift.bottom {
                bottom: 5rem;
                left: 2.5rem;
                width: 3rem;
                height: 3rem;
            }
        "#
    );

    html! {
        <ContextProvider<InteractionContext> context={(*interaction).clone()}>
            <div ref={container} class={style}>
                <Mascot
                    class={classes!("drift", "top")}
                    alt="Floating Mascot"
                    ambient={Ambient::Float { duration: 6.0, delay: 0.0 }}
                />
                <Mascot
                    class={classes!("drift", "bottom")}
                    alt="Floating Mascot"
                    ambient={Ambient::Float { duration: 8.0, delay: 2.0 }}
                />

                <CustomCursor />
                <Header />
                <Hero />
                <Showcase
                    image="hero-display.jpg"
                    alt="Just Crave It Frozen Yogurt Collection"
                    from={MotionFrame::hidden().scale(0.8)}
                    with_mascot=true
                />
                <FlavourGallery />
                <Showcase
                    image="hero-collection.jpg"
                    alt="Just Crave It Frozen Yogurt Variety"
                    from={MotionFrame::hidden().y(100.0)}
                    zoom_duration={0.8}
                />
                <Pricing />
                <Visit />
                <Footer />
            </div>
        </ContextProvider<InteractionContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CONTACT, CUP_SIZES, FLAVOURS};
    use yew::ServerRenderer;

    async fn render_home() -> String {
        ServerRenderer::<Home>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn one_card_per_flavour() {
        let html = render_home().await;

        assert_eq!(html.matches("data-flavour=").count(), FLAVOURS.len());
        for flavour in FLAVOURS.iter() {
            let marker = format!("data-flavour=\"{}\"", flavour.name);
            assert_eq!(html.matches(&marker).count(), 1, "{}", flavour.name);
            assert!(html.contains(flavour.description));
        }
    }

    #[tokio::test]
    async fn one_card_per_cup_size() {
        let html = render_home().await;

        assert_eq!(html.matches("data-cup=").count(), CUP_SIZES.len());
        for cup in CUP_SIZES.iter() {
            let marker = format!("data-cup=\"{}\"", cup.size);
            assert_eq!(html.matches(&marker).count(), 1, "{}", cup.size);
            assert!(html.contains(&cup.price_label()));
        }
    }

    #[tokio::test]
    async fn popular_badges_only_on_popular_flavours() {
        let html = render_home().await;
        let popular = FLAVOURS.iter().filter(|f| f.popular).count();
        assert_eq!(html.matches(">Popular<").count(), popular);
    }

    #[tokio::test]
    async fn contact_block_shows_business_details() {
        let html = render_home().await;

        for text in [
            "200 Elgin Street, Carlton",
            "Melbourne, VIC 3053",
            "+61 424 424 421",
            "justcraveit.info@gmail.com",
            "Sunday–Thursday: 5pm – 12am",
            "Friday–Saturday: 12pm – 2am",
        ] {
            assert!(html.contains(text), "missing {:?}", text);
        }
        assert!(html.contains(&CONTACT.full_address()));
        assert!(html.contains("href=\"tel:+61424424421\""));
        assert!(html.contains("href=\"mailto:justcraveit.info@gmail.com\""));
    }

    #[tokio::test]
    async fn sections_render_in_page_order() {
        let html = render_home().await;

        let position = |needle: &str| {
            html.find(needle)
                .unwrap_or_else(|| panic!("missing {:?}", needle))
        };
        let header = position("<header");
        let hero_display = position("hero-display.jpg");
        let flavours = position("id=\"flavours\"");
        let collection = position("hero-collection.jpg");
        let pricing = position("id=\"pricing\"");
        let visit = position("id=\"visit\"");
        let footer = position("<footer");

        assert!(header < hero_display);
        assert!(hero_display < flavours);
        assert!(flavours < collection);
        assert!(collection < pricing);
        assert!(pricing < visit);
        assert!(visit < footer);
    }

    #[tokio::test]
    async fn nothing_hovered_initially() {
        let html = render_home().await;
        assert!(!html.contains("is-hovered"));
    }
}

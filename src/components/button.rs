use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
    pub href: AttrValue,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub external: bool,
    #[prop_or_default]
    pub full_width: bool,
}

/// Call-to-action link styled as a button, with a light sweep on hover.
#[styled_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let style = css!(
        r#"
            position: relative;
            display: inline-flex;
            justify-content: center;
            overflow: hidden;
            padding: 1rem 3rem;
            font-family: var(--font-display);
            font-size: 1.125rem;
            font-weight: 500;
            cursor: pointer;
            transition: transform 0.2s ease-out, box-shadow 0.3s;

            &:hover {
                transform: translateY(-2px) scale(1.05);
            }

            &:active {
                transform: scale(0.95);
            }

            &.solid {
                color: white;
                background: linear-gradient(90deg, var(--pink-500), var(--rose-500), var(--pink-600));
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
            }

            &.solid:hover {
                box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
            }

            &.outline {
                color: var(--pink-600);
                border: 2px solid var(--pink-300);
                background: transparent;
            }

            &.outline:hover {
                background: var(--pink-50);
                border-color: var(--pink-400);
            }

            &.full {
                width: 100%;
            }

            .sweep {
                position: absolute;
                inset: 0;
                transform: translateX(-100%);
                background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
                transition: transform 0.6s;
            }

            &:hover .sweep {
                transform: translateX(100%);
            }

            .label {
                position: relative;
                z-index: 10;
            }
        "#
    );

    let variant = match props.variant {
        ButtonVariant::Solid => "solid",
        ButtonVariant::Outline => "outline",
    };
    let onclick = props.onclick.clone();
    let (target, rel) = if props.external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    html! {
        <a
            class={classes!(style, variant, props.full_width.then_some("full"))}
            href={props.href.clone()}
            {target}
            {rel}
            {onclick}
        >
            <span class="sweep"></span>
            <span class="label">{ props.label.clone() }</span>
        </a>
    }
}

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Clock,
    Heart,
    Mail,
    MapPin,
    Phone,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

/// 24x24 stroke icon.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let shape = match props.kind {
        IconKind::ArrowRight => html! {
            <>
                <path d="M5 12h14" />
                <path d="m12 5 7 7-7 7" />
            </>
        },
        IconKind::Clock => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <polyline points="12 6 12 12 16 14" />
            </>
        },
        IconKind::Heart => html! {
            <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
        },
        IconKind::Mail => html! {
            <>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        },
        IconKind::MapPin => html! {
            <>
                <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                <circle cx="12" cy="10" r="3" />
            </>
        },
        IconKind::Phone => html! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        },
    };

    html! {
        <svg
            class={props.class.clone()}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shape }
        </svg>
    }
}

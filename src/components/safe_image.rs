use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct SafeImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Cover the parent box instead of fitting inside it.
    #[prop_or_default]
    pub cover: bool,
}

/// Source to render: the placeholder once loading failed or when no
/// reference was given.
pub fn image_source(src: &AttrValue, failed: bool) -> AttrValue {
    if failed || src.trim().is_empty() {
        AttrValue::from(config::PLACEHOLDER_IMAGE)
    } else {
        src.clone()
    }
}

/// Image filling its positioned parent, swapped for the placeholder if it
/// fails to load.
#[styled_component(SafeImage)]
pub fn safe_image(props: &SafeImageProps) -> Html {
    let failed = use_state_eq(|| false);

    // A new source gets a fresh attempt.
    {
        let failed = failed.clone();
        use_effect_with_deps(
            move |_| {
                failed.set(false);
                || ()
            },
            props.src.clone(),
        );
    }

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            if !*failed {
                log::warn!("image {} failed to load, using placeholder", src);
                failed.set(true);
            }
        })
    };

    let fit = if props.cover { "cover" } else { "contain" };
    let style = css!(
        r#"
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: ${fit};
        "#,
        fit = fit
    );

    html! {
        <img
            class={classes!(style, props.class.clone())}
            src={image_source(&props.src, *failed)}
            alt={props.alt.clone()}
            loading="lazy"
            {onerror}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_source_until_failure() {
        let src = AttrValue::from("/images/mango-twist.jpg");
        assert_eq!(image_source(&src, false), src);
        assert_eq!(&*image_source(&src, true), config::PLACEHOLDER_IMAGE);
    }

    #[test]
    fn blank_source_uses_placeholder() {
        assert_eq!(&*image_source(&AttrValue::from("  "), false), config::PLACEHOLDER_IMAGE);
    }
}

use stylist::yew::{styled_component, Global};
use yew::prelude::*;

/// Palette, fonts, resets and the keyframes behind `motion::css::Ambient`.
#[styled_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --font-display: "Playfair Display", Georgia, serif;
                --font-body: "Inter", system-ui, sans-serif;
                --pink-50: #fdf2f8;
                --pink-100: #fce7f3;
                --pink-300: #f9a8d4;
                --pink-400: #f472b6;
                --pink-500: #ec4899;
                --pink-600: #db2777;
                --pink-700: #be185d;
                --rose-50: #fff1f2;
                --rose-300: #fda4af;
                --rose-400: #fb7185;
                --rose-500: #f43f5e;
                --ink: #1f2937;
                --muted: #4b5563;
                --brand-gradient: linear-gradient(90deg, var(--pink-600), var(--rose-500), var(--pink-700));
            }

            html {
                scroll-behavior: smooth;
            }

            body {
                margin: 0;
                font-family: var(--font-body);
                color: var(--ink);
                -webkit-font-smoothing: antialiased;
                overflow-x: hidden;
            }

            *, *::before, *::after {
                box-sizing: border-box;
            }

            img {
                display: block;
                max-width: 100%;
            }

            a {
                color: inherit;
                text-decoration: none;
            }

            .gradient-text {
                background: var(--brand-gradient);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            @keyframes jc-float {
                0%, 100% { transform: translateY(0) rotate(0deg); }
                33% { transform: translateY(-10px) rotate(5deg); }
                66% { transform: translateY(-20px) rotate(-5deg); }
            }

            @keyframes jc-spin {
                from { transform: rotate(0deg); }
                to { transform: rotate(360deg); }
            }

            @keyframes jc-pulse {
                0%, 100% { transform: scale(1); opacity: 0.3; }
                50% { transform: scale(1.5); opacity: 0.6; }
            }

            @keyframes jc-nudge {
                0%, 100% { transform: translateX(0); }
                50% { transform: translateX(5px); }
            }

            @keyframes jc-pop {
                from { transform: scale(0) rotate(-45deg); }
                to { transform: scale(1) rotate(0deg); }
            }

            @keyframes jc-sway {
                0%, 100% { transform: rotate(0deg) scale(1); }
                33% { transform: rotate(3deg) scale(1.02); }
                66% { transform: rotate(-3deg) scale(1.01); }
            }

            @media (prefers-reduced-motion: reduce) {
                html {
                    scroll-behavior: auto;
                }
                *, *::before, *::after {
                    animation-duration: 0.01ms !important;
                    animation-iteration-count: 1 !important;
                    transition-duration: 0.01ms !important;
                }
            }
        "#)} />
    }
}

#[cfg(test)]
mod tests {
    const PAGE_SHELL: &str = include_str!("../index.html");

    fn font_request() -> &'static str {
        PAGE_SHELL
            .lines()
            .find(|line| line.contains("fonts.googleapis.com/css2"))
            .expect("font stylesheet link")
    }

    #[test]
    fn display_font_requests_only_published_weights() {
        let request = font_request();
        assert!(request.contains("family=Playfair+Display:wght@400;500;600;700"));
        assert!(!request.contains("Playfair+Display:wght@300"));
        assert!(request.contains("family=Inter:wght@300;400;500;600"));
    }

    #[test]
    fn page_metadata_matches_the_shop_copy() {
        assert!(PAGE_SHELL.contains(
            "<title>Just Crave It - Australia's First Self-Serve Frozen Yogurt</title>"
        ));
        assert!(PAGE_SHELL.contains(
            "content=\"Experience Australia's first self-serve frozen yogurt bar. \
             Pay by the cup, not by weight. Nine delicious flavours and thirty-plus \
             toppings in Carlton, Melbourne.\""
        ));
        assert!(PAGE_SHELL.contains(
            "content=\"frozen yogurt, self-serve, Melbourne, Carlton, dessert, healthy treats, Just Crave It\""
        ));
    }
}

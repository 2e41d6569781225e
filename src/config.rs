use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Directory the hosting platform serves catalog and hero images from.
pub const ASSET_BASE: &str = "/images";

/// Shown in place of any image that is missing or fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub const MASCOT_IMAGE: &str = "mascot.webp";

/// Resolves an image file name against [`ASSET_BASE`].
pub fn asset_url(file: &str) -> String {
    let file = file.trim_start_matches('/');
    if file.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    format!("{}/{}", ASSET_BASE, file)
}

pub fn mascot_url() -> String {
    asset_url(MASCOT_IMAGE)
}

// Root margins (px) for viewport-triggered reveals. Negative values shrink
// the viewport so the element has to be that far inside before it animates.
pub const REVEAL_MARGIN_SECTION: f64 = -200.0;
pub const REVEAL_MARGIN_IMAGE: f64 = -100.0;
pub const REVEAL_MARGIN_CARD: f64 = -50.0;
pub const REVEAL_MARGIN_NONE: f64 = 0.0;

/// Delay before the first visibility check so the initial frame gets painted
/// and mount-time transitions actually run.
pub const FIRST_REVEAL_CHECK_MS: u32 = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_base_and_file() {
        assert_eq!(asset_url("mascot.webp"), "/images/mascot.webp");
        assert_eq!(asset_url("/hero-display.jpg"), "/images/hero-display.jpg");
    }

    #[test]
    fn empty_asset_falls_back_to_placeholder() {
        assert_eq!(asset_url(""), PLACEHOLDER_IMAGE);
        assert_eq!(asset_url("/"), PLACEHOLDER_IMAGE);
    }
}

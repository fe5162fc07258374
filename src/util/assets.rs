use std::{borrow::Cow, sync::OnceLock};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();
static LEAF_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// Returns the contents of `assets/tailwind.css` as a static string.
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| load_text("tailwind.css"))
        .as_str()
}

/// Returns a data URI for the window/tab icon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| load_data_uri("favicon.svg"))
        .as_str()
}

/// Returns a data URI for the sidebar leaf logo.
pub fn leaf_logo_data_uri() -> &'static str {
    LEAF_DATA_URI
        .get_or_init(|| load_data_uri("leaf.svg"))
        .as_str()
}

fn load_text(name: &str) -> String {
    let asset = load_asset(name);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {name} is not valid UTF-8"))
}

fn load_data_uri(name: &str) -> String {
    let asset = load_asset(name);
    let mime = guess_mime(name);
    format!("data:{mime};base64,{}", BASE64.encode(asset.as_ref()))
}

fn load_asset(name: &str) -> Cow<'static, [u8]> {
    EmbeddedAssets::get(name)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {name}"))
}

fn guess_mime(name: &str) -> &'static str {
    if name.ends_with(".css") {
        "text/css"
    } else if name.ends_with(".svg") {
        "image/svg+xml"
    } else if name.ends_with(".png") {
        "image/png"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_styles_are_present() {
        assert!(!main_css().is_empty());
        assert!(!tailwind_css().is_empty());
    }

    #[test]
    fn svg_assets_become_image_data_uris() {
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
        assert!(leaf_logo_data_uri().starts_with("data:image/svg+xml;base64,"));
    }
}

pub const APP_NAME: &str = "AgriVision";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{APP_VERSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_crate_version() {
        if GIT_TAG.is_none() {
            assert_eq!(version_label(), format!("v{APP_VERSION}"));
        }
    }
}

//! Classifier capability for the disease-detection page. The UI only ever
//! sees the [`LeafClassifier`] trait, so the canned catalog behind the
//! production implementation can be swapped for a real model or a test
//! double without touching the page.

use std::time::Duration;

use super::entities::AnalysisResult;

/// An uploaded leaf photo, held as the data URI the webview produced.
/// Construction rejects anything that is not an image payload; callers drop
/// non-image files silently rather than raising an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafImage {
    data_uri: String,
}

impl LeafImage {
    pub fn from_data_uri(data_uri: impl Into<String>) -> Option<Self> {
        let data_uri = data_uri.into();
        data_uri
            .starts_with("data:image/")
            .then_some(LeafImage { data_uri })
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

/// Analysis capability injected into the UI through context.
pub trait LeafClassifier: Send + Sync {
    /// Artificial (or real) time to produce a result. The page sleeps this
    /// long before calling [`classify`](Self::classify).
    fn latency(&self) -> Duration {
        Duration::ZERO
    }

    fn classify(&self, image: &LeafImage) -> AnalysisResult;
}

/// Synchronous test double: zero latency, always the configured result.
#[derive(Clone, Debug)]
pub struct FixedClassifier {
    pub result: AnalysisResult,
}

impl LeafClassifier for FixedClassifier {
    fn classify(&self, _image: &LeafImage) -> AnalysisResult {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_image_data_uris() {
        let image = LeafImage::from_data_uri("data:image/png;base64,AAAA");
        assert!(image.is_some());
    }

    #[test]
    fn rejects_non_image_payloads() {
        assert!(LeafImage::from_data_uri("data:application/pdf;base64,AAAA").is_none());
        assert!(LeafImage::from_data_uri("not a data uri").is_none());
        assert!(LeafImage::from_data_uri("").is_none());
    }

    #[test]
    fn fixed_classifier_returns_its_result_with_no_delay() {
        let expected = AnalysisResult {
            disease: "Leaf Blight".to_string(),
            confidence: 94.2,
            treatment: "Apply fungicide.".to_string(),
        };
        let classifier = FixedClassifier {
            result: expected.clone(),
        };
        let image = LeafImage::from_data_uri("data:image/jpeg;base64,AAAA").unwrap();
        assert_eq!(classifier.latency(), Duration::ZERO);
        assert_eq!(classifier.classify(&image), expected);
    }
}

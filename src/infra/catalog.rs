//! Canned disease-analysis outcomes. Until a real model is wired in, the
//! classifier picks one of these uniformly at random after a fixed delay.

use std::sync::OnceLock;
use std::time::Duration;

use rand::seq::SliceRandom;

use crate::domain::{AnalysisResult, LeafClassifier, LeafImage};

static CATALOG: OnceLock<Vec<AnalysisResult>> = OnceLock::new();

pub fn disease_catalog() -> &'static [AnalysisResult] {
    CATALOG.get_or_init(|| {
        vec![
            AnalysisResult {
                disease: "Leaf Blight".to_string(),
                confidence: 94.2,
                treatment: "Apply Mancozeb fungicide at 2.5g/L. Ensure proper drainage \
                            and avoid overhead irrigation."
                    .to_string(),
            },
            AnalysisResult {
                disease: "Powdery Mildew".to_string(),
                confidence: 87.5,
                treatment: "Spray Sulfur-based fungicide. Improve air circulation around plants."
                    .to_string(),
            },
            AnalysisResult {
                disease: "Bacterial Wilt".to_string(),
                confidence: 91.0,
                treatment: "Remove infected plants immediately. Apply copper-based bactericide \
                            to surrounding area."
                    .to_string(),
            },
        ]
    })
}

/// Production classifier: uniform random pick from the catalog, reported
/// after a two-second simulated inference delay.
#[derive(Clone, Debug)]
pub struct CatalogClassifier {
    latency: Duration,
}

impl Default for CatalogClassifier {
    fn default() -> Self {
        Self {
            latency: Duration::from_secs(2),
        }
    }
}

impl LeafClassifier for CatalogClassifier {
    fn latency(&self) -> Duration {
        self.latency
    }

    fn classify(&self, _image: &LeafImage) -> AnalysisResult {
        let catalog = disease_catalog();
        catalog
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| catalog[0].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_the_three_known_entries() {
        let diseases: Vec<_> = disease_catalog()
            .iter()
            .map(|entry| entry.disease.as_str())
            .collect();
        assert_eq!(
            diseases,
            ["Leaf Blight", "Powdery Mildew", "Bacterial Wilt"]
        );
    }

    #[test]
    fn classifier_always_returns_a_catalog_member() {
        let classifier = CatalogClassifier::default();
        let image = LeafImage::from_data_uri("data:image/png;base64,AAAA").unwrap();
        for _ in 0..20 {
            let result = classifier.classify(&image);
            assert!(disease_catalog().contains(&result));
        }
    }

    #[test]
    fn classifier_reports_its_simulated_latency() {
        assert_eq!(
            CatalogClassifier::default().latency(),
            Duration::from_secs(2)
        );
    }
}

//! Ambient audio from a configured track list.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::domain::ports::AudioSource;

/// Picks uniformly among configured track URLs.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredAudioSource {
    urls: Vec<String>,
}

impl ConfiguredAudioSource {
    /// Blank entries are dropped.
    pub fn new(urls: impl IntoIterator<Item = String>) -> Self {
        Self {
            urls: urls
                .into_iter()
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[async_trait]
impl AudioSource for ConfiguredAudioSource {
    async fn ambient_url(&self) -> Option<String> {
        self.urls.choose(&mut rand::thread_rng()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_yields_none() {
        let source = ConfiguredAudioSource::new(vec!["  ".to_string()]);
        assert!(source.is_empty());
        assert!(tokio_test::block_on(source.ambient_url()).is_none());
    }

    #[tokio::test]
    async fn test_picks_a_configured_url() {
        let urls = vec!["https://a/1.mp3".to_string(), "https://a/2.mp3".to_string()];
        let source = ConfiguredAudioSource::new(urls.clone());
        assert_eq!(source.len(), 2);
        let url = source.ambient_url().await.unwrap();
        assert!(urls.contains(&url));
    }
}

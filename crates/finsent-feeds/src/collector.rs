//! Multi-source headline collection.

use std::collections::HashSet;
use std::future::Future;

use finsent_core::{FeedSource, Headline};

use crate::fetcher::FeedFetcher;
use crate::retry::Sleeper;

/// Anything that can turn one feed source into headlines.
///
/// Implementations absorb their own failures; an unreachable source simply
/// yields an empty `Vec`.
pub trait HeadlineFetcher {
    fn fetch(&self, source: &FeedSource) -> impl Future<Output = Vec<Headline>>;
}

impl<S: Sleeper> HeadlineFetcher for FeedFetcher<S> {
    async fn fetch(&self, source: &FeedSource) -> Vec<Headline> {
        FeedFetcher::fetch(self, source).await
    }
}

/// Runs a fetcher over a fixed list of sources.
pub struct Collector<F> {
    sources: Vec<FeedSource>,
    fetcher: F,
}

impl<F: HeadlineFetcher> Collector<F> {
    #[must_use]
    pub fn new(sources: Vec<FeedSource>, fetcher: F) -> Self {
        Self { sources, fetcher }
    }

    /// Fetches every source sequentially, in configured order, and returns
    /// the distinct headlines in first-seen order.
    ///
    /// Sources that fail contribute nothing. An empty result means no source
    /// produced a headline.
    pub async fn collect_all(&self) -> Vec<Headline> {
        let mut headlines = Vec::new();
        for source in &self.sources {
            let fetched = self.fetcher.fetch(source).await;
            tracing::debug!(
                feed = source.label(),
                count = fetched.len(),
                "collected feed headlines"
            );
            headlines.extend(fetched);
        }

        let total = headlines.len();
        let unique = dedupe_headlines(headlines);
        tracing::info!(
            sources = self.sources.len(),
            total,
            unique = unique.len(),
            "Total unique headlines collected"
        );
        unique
    }
}

/// Collapses identical headlines, keeping the first occurrence of each.
#[must_use]
pub fn dedupe_headlines(mut headlines: Vec<Headline>) -> Vec<Headline> {
    let mut seen: HashSet<Headline> = HashSet::new();
    headlines.retain(|headline| seen.insert(headline.clone()));
    headlines
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// Serves fixed headlines per URL and records the fetch order.
    struct StubFetcher {
        responses: HashMap<String, Vec<&'static str>>,
        calls: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn new(responses: &[(&str, Vec<&'static str>)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(url, titles)| ((*url).to_owned(), titles.clone()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl HeadlineFetcher for StubFetcher {
        async fn fetch(&self, source: &FeedSource) -> Vec<Headline> {
            self.calls.lock().unwrap().push(source.url.clone());
            self.responses
                .get(&source.url)
                .map(|titles| titles.iter().map(|t| Headline::new(t)).collect())
                .unwrap_or_default()
        }
    }

    fn sources(urls: &[&str]) -> Vec<FeedSource> {
        urls.iter().map(|u| FeedSource::new(u)).collect()
    }

    #[tokio::test]
    async fn collapses_duplicates_across_and_within_sources() {
        let fetcher = StubFetcher::new(&[
            (
                "https://a.example/rss",
                vec![
                    "Stocks rally on strong earnings",
                    "Stocks rally on strong earnings",
                ],
            ),
            (
                "https://b.example/rss",
                vec![
                    "Markets tumble amid recession fears",
                    "Stocks rally on strong earnings",
                ],
            ),
        ]);
        let collector = Collector::new(
            sources(&["https://a.example/rss", "https://b.example/rss"]),
            fetcher,
        );

        let headlines = collector.collect_all().await;
        let texts: Vec<&str> = headlines.iter().map(Headline::as_str).collect();
        assert_eq!(
            texts,
            vec![
                "Stocks rally on strong earnings",
                "Markets tumble amid recession fears"
            ]
        );
    }

    #[tokio::test]
    async fn fetches_sources_in_configured_order() {
        let fetcher = StubFetcher::new(&[]);
        let collector = Collector::new(
            sources(&["https://c.example", "https://a.example", "https://b.example"]),
            fetcher,
        );
        collector.collect_all().await;
        assert_eq!(
            *collector.fetcher.calls.lock().unwrap(),
            vec!["https://c.example", "https://a.example", "https://b.example"]
        );
    }

    #[tokio::test]
    async fn failing_sources_contribute_nothing() {
        let fetcher = StubFetcher::new(&[("https://ok.example", vec!["Only headline"])]);
        let collector = Collector::new(
            sources(&["https://down.example", "https://ok.example"]),
            fetcher,
        );
        let headlines = collector.collect_all().await;
        assert_eq!(headlines, vec![Headline::new("Only headline")]);
    }

    #[tokio::test]
    async fn all_sources_empty_yields_empty_set() {
        let collector = Collector::new(
            sources(&["https://a.example", "https://b.example"]),
            StubFetcher::new(&[]),
        );
        assert!(collector.collect_all().await.is_empty());
    }

    #[test]
    fn dedupe_is_idempotent() {
        let k_copies: Vec<Headline> = std::iter::repeat_n(Headline::new("Same"), 5).collect();
        let once = dedupe_headlines(k_copies);
        assert_eq!(once, vec![Headline::new("Same")]);
        assert_eq!(dedupe_headlines(once.clone()), once);
    }

    #[test]
    fn dedupe_is_case_sensitive() {
        let headlines = vec![Headline::new("Fed Cuts Rates"), Headline::new("fed cuts rates")];
        assert_eq!(dedupe_headlines(headlines).len(), 2);
    }
}

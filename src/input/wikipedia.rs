//! Best-effort article fetching from the Wikimedia REST APIs.
//!
//! Every failure (network, HTTP status, JSON shape, empty extract) is logged
//! and turned into `None`; nothing here returns an error to the caller.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::time::Duration;

const FEED_BASE: &str = "https://api.wikimedia.org/feed/v1/wikipedia/en/featured";
const RANDOM_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/random/summary";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Summary of a single article.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub extract: String,
    pub title: String,
    pub href: String,
}

#[derive(Deserialize)]
struct FeaturedFeed {
    tfa: Option<PageSummary>,
}

#[derive(Deserialize)]
struct PageSummary {
    extract: Option<String>,
    title: Option<String>,
    titles: Option<Titles>,
    content_urls: Option<ContentUrls>,
}

#[derive(Deserialize)]
struct Titles {
    normalized: Option<String>,
}

#[derive(Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrls>,
}

#[derive(Deserialize)]
struct PageUrls {
    page: Option<String>,
}

impl PageSummary {
    fn into_article(self) -> Option<Article> {
        let extract = self.extract.filter(|text| !text.trim().is_empty())?;
        let title = self
            .titles
            .and_then(|titles| titles.normalized)
            .or(self.title)
            .unwrap_or_default();
        let href = self
            .content_urls
            .and_then(|urls| urls.desktop)
            .and_then(|desktop| desktop.page)
            .unwrap_or_default();
        Some(Article {
            extract,
            title,
            href,
        })
    }
}

/// Pulls "today's featured article" out of a featured-content feed body.
pub fn parse_featured(body: &str) -> Option<Article> {
    match serde_json::from_str::<FeaturedFeed>(body) {
        Ok(feed) => feed.tfa.and_then(PageSummary::into_article),
        Err(err) => {
            log::error!("Unexpected featured feed response: {}", err);
            None
        }
    }
}

/// Reads a page summary body (as returned by the random-page endpoint).
pub fn parse_summary(body: &str) -> Option<Article> {
    match serde_json::from_str::<PageSummary>(body) {
        Ok(summary) => summary.into_article(),
        Err(err) => {
            log::error!("Unexpected page summary response: {}", err);
            None
        }
    }
}

pub fn featured_url(base: &str, date: NaiveDate) -> String {
    format!(
        "{}/{}/{:02}/{:02}",
        base.trim_end_matches('/'),
        date.year(),
        date.month(),
        date.day()
    )
}

/// Somewhere articles can be fetched from.
pub trait ArticleSource {
    fn featured(&self, date: NaiveDate) -> Option<Article>;
    fn random(&self) -> Option<Article>;
}

pub struct WikipediaClient {
    agent: ureq::Agent,
    feed_base: String,
    random_url: String,
}

impl Default for WikipediaClient {
    fn default() -> Self {
        Self::new(FEED_BASE, RANDOM_SUMMARY_URL)
    }
}

impl WikipediaClient {
    pub fn new(feed_base: &str, random_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("orp-reader/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            feed_base: feed_base.to_string(),
            random_url: random_url.to_string(),
        }
    }

    /// The featured article for `date`, or `None` on any failure.
    pub fn fetch_featured_article(&self, date: NaiveDate) -> Option<Article> {
        let body = self.get(&featured_url(&self.feed_base, date))?;
        let article = parse_featured(&body);
        if article.is_none() {
            log::warn!("No featured article extract for {}", date);
        }
        article
    }

    /// A random article summary, or `None` on any failure.
    pub fn fetch_random_article(&self) -> Option<Article> {
        let body = self.get(&self.random_url)?;
        parse_summary(&body)
    }

    fn get(&self, url: &str) -> Option<String> {
        log::debug!("GET {}", url);
        match self.agent.get(url).call() {
            Ok(response) => match response.into_string() {
                Ok(body) => Some(body),
                Err(err) => {
                    log::error!("Failed to read response from {}: {}", url, err);
                    None
                }
            },
            Err(ureq::Error::Status(code, response)) => {
                log::error!(
                    "Failed to fetch Wikipedia article: {} {}",
                    code,
                    response.status_text()
                );
                None
            }
            Err(err) => {
                log::error!("Error fetching Wikipedia article: {}", err);
                None
            }
        }
    }
}

impl ArticleSource for WikipediaClient {
    fn featured(&self, date: NaiveDate) -> Option<Article> {
        self.fetch_featured_article(date)
    }

    fn random(&self) -> Option<Article> {
        self.fetch_random_article()
    }
}

//! Collection pipeline: listing -> records -> detail pages -> output file

use std::path::PathBuf;

use reqwest::StatusCode;
use tracing::info;

use crate::collector::detail::fetch_download_links;
use crate::collector::error::CollectError;
use crate::collector::listing::fetch_listing;
use crate::collector::outcome::FetchOutcome;
use crate::collector::persist::persist;
use crate::collector::record::{ReleaseRecord, assemble_rows};
use crate::collector::session::{HttpSession, PageSource};
use crate::config::CollectorConfig;

/// A detail page that answered with a non-success status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFailure {
    pub url: String,
    pub status: StatusCode,
}

/// What a run gathered, including the HTTP failures it tolerated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectReport {
    /// Number of listing rows, or the listing page's failure
    pub listing: FetchOutcome<usize>,
    pub records: Vec<ReleaseRecord>,
    pub failed_details: Vec<DetailFailure>,
}

pub struct ReleaseCollector<S> {
    source: S,
    listing_url: String,
    site_origin: String,
    output: PathBuf,
}

impl ReleaseCollector<HttpSession> {
    /// Builds a collector backed by a fresh [`HttpSession`]
    pub fn from_config(config: &CollectorConfig) -> Result<Self, CollectError> {
        let session = HttpSession::from_config(config)?;
        info!("Using User-Agent: {}", session.user_agent());
        Ok(Self::new(session, config))
    }
}

impl<S: PageSource> ReleaseCollector<S> {
    pub fn new(source: S, config: &CollectorConfig) -> Self {
        Self {
            source,
            listing_url: config.listing_url.clone(),
            site_origin: config.site_origin.clone(),
            output: config.output.clone(),
        }
    }

    /// Fetches the listing page and assembles records without download links
    pub async fn list_releases(&self) -> Result<FetchOutcome<Vec<ReleaseRecord>>, CollectError> {
        let listing = fetch_listing(&self.source, &self.listing_url).await?;
        Ok(listing.map(|rows| assemble_rows(&self.site_origin, rows)))
    }

    /// Runs every stage except writing the output file.
    ///
    /// Detail pages are fetched one at a time, in listing order.
    pub async fn collect(&self) -> Result<CollectReport, CollectError> {
        let (listing, records) = match self.list_releases().await? {
            FetchOutcome::Fetched(records) => (FetchOutcome::Fetched(records.len()), records),
            FetchOutcome::HttpFailure { url, status } => {
                (FetchOutcome::HttpFailure { url, status }, Vec::new())
            }
        };

        let mut collected = Vec::with_capacity(records.len());
        let mut failed_details = Vec::new();

        for record in records {
            match fetch_download_links(&self.source, &record).await? {
                FetchOutcome::Fetched(links) => collected.push(record.with_download_urls(links)),
                FetchOutcome::HttpFailure { url, status } => {
                    failed_details.push(DetailFailure { url, status });
                    collected.push(record);
                }
            }
        }

        info!(
            "Collected {} releases ({} detail pages failed)",
            collected.len(),
            failed_details.len()
        );

        Ok(CollectReport {
            listing,
            records: collected,
            failed_details,
        })
    }

    /// Runs the whole pipeline once and writes the output file
    pub async fn run(&self) -> Result<CollectReport, CollectError> {
        let report = self.collect().await?;
        persist(&report.records, &self.output)?;
        Ok(report)
    }
}

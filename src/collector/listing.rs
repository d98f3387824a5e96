//! Listing page extraction
//!
//! Each release row is queried as a whole: the date is looked up inside the row
//! that holds the release-number link, never in a separate document-wide list.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use crate::collector::date::parse_release_date;
use crate::collector::error::CollectError;
use crate::collector::outcome::FetchOutcome;
use crate::collector::record::{ListingRow, VersionLink};
use crate::collector::session::PageSource;

const RELEASE_LINK_SELECTOR: &str = "span.release-number > a";
const RELEASE_DATE_SELECTOR: &str = "span.release-date";

/// Header text repeated in the listing's date column
const DATE_HEADER: &str = "release date";

pub(crate) fn selector(selector: &'static str) -> Result<Selector, CollectError> {
    Selector::parse(selector).map_err(|e| CollectError::Selector {
        selector,
        message: e.to_string(),
    })
}

/// Retrieves the listing page and extracts its release rows.
///
/// A non-success status is not an error: it yields [`FetchOutcome::HttpFailure`].
pub async fn fetch_listing(
    source: &dyn PageSource,
    listing_url: &str,
) -> Result<FetchOutcome<Vec<ListingRow>>, CollectError> {
    let page = source.get(listing_url).await?;

    if !page.is_success() {
        warn!(
            "Listing page {} returned status {}; no releases collected",
            listing_url, page.status
        );
        return Ok(FetchOutcome::HttpFailure {
            url: listing_url.to_string(),
            status: page.status,
        });
    }

    let rows = parse_listing(&page.body)?;
    info!("Found {} releases on {}", rows.len(), listing_url);

    Ok(FetchOutcome::Fetched(rows))
}

/// Extracts one [`ListingRow`] per release-number link, in document order
pub fn parse_listing(html: &str) -> Result<Vec<ListingRow>, CollectError> {
    let document = Html::parse_document(html);
    let link_selector = selector(RELEASE_LINK_SELECTOR)?;
    let date_selector = selector(RELEASE_DATE_SELECTOR)?;

    document
        .select(&link_selector)
        .map(|link| parse_row(link, &date_selector))
        .collect()
}

fn parse_row(
    link: ElementRef<'_>,
    date_selector: &Selector,
) -> Result<ListingRow, CollectError> {
    let version = link.text().collect::<String>().trim().to_string();
    let path = link
        .value()
        .attr("href")
        .ok_or(CollectError::MissingAttribute {
            element: "a",
            attribute: "href",
        })?
        .to_string();

    // link -> span.release-number -> row
    let row = link
        .parent()
        .and_then(ElementRef::wrap)
        .and_then(|span| span.parent())
        .and_then(ElementRef::wrap)
        .unwrap_or(link);

    let date_text = row
        .select(date_selector)
        .map(|date| date.text().collect::<String>())
        .find(|text| !text.to_lowercase().contains(DATE_HEADER))
        .ok_or_else(|| CollectError::MalformedRow {
            version: version.clone(),
        })?;

    debug!("Listing row {} -> {} ({})", version, path, date_text.trim());

    Ok(ListingRow {
        release_date: parse_release_date(&date_text)?,
        link: VersionLink { version, path },
    })
}

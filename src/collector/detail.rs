//! Detail page extraction

use scraper::Html;
use tracing::{debug, warn};

use crate::collector::error::CollectError;
use crate::collector::listing::selector;
use crate::collector::outcome::FetchOutcome;
use crate::collector::record::ReleaseRecord;
use crate::collector::session::PageSource;

/// Anchors of the download-options table
const DOWNLOAD_LINK_SELECTOR: &str = "tr > td > a[href]";

/// Retrieves the record's detail page and collects its download links.
///
/// A non-success status yields [`FetchOutcome::HttpFailure`]; the caller keeps
/// the record with empty `download_urls`.
pub async fn fetch_download_links(
    source: &dyn PageSource,
    record: &ReleaseRecord,
) -> Result<FetchOutcome<Vec<String>>, CollectError> {
    let page = source.get(&record.url).await?;

    if !page.is_success() {
        warn!(
            "Detail page for {} ({}) returned status {}; leaving download links empty",
            record.release_version, record.url, page.status
        );
        return Ok(FetchOutcome::HttpFailure {
            url: record.url.clone(),
            status: page.status,
        });
    }

    let links = parse_download_links(&page.body)?;
    debug!(
        "Found {} download links for {}",
        links.len(),
        record.release_version
    );

    Ok(FetchOutcome::Fetched(links))
}

/// Every `href` in table cells, as found and in document order
pub fn parse_download_links(html: &str) -> Result<Vec<String>, CollectError> {
    let document = Html::parse_document(html);
    let link_selector = selector(DOWNLOAD_LINK_SELECTOR)?;

    Ok(document
        .select(&link_selector)
        .filter_map(|link| link.value().attr("href"))
        .map(str::to_string)
        .collect())
}

//! HTML fixtures and mock server setup

use std::path::Path;

use mockito::{Mock, ServerGuard};

use release_collector::config::CollectorConfig;

pub const TEST_USER_AGENT: &str = "release-collector-test/1.0";

/// A listing row as it appears on the downloads page
pub struct Row<'a> {
    pub version: &'a str,
    pub path: &'a str,
    pub date: &'a str,
}

/// Renders a listing page with the column headings row followed by `rows`
pub fn listing_page(rows: &[Row<'_>]) -> String {
    let items: String = rows
        .iter()
        .map(|row| {
            format!(
                r#"<li>
                  <span class="release-number"><a href="{}">{}</a></span>
                  <span class="release-date">{}</span>
                  <span class="release-download"><a href="{}">Download</a></span>
                </li>"#,
                row.path, row.version, row.date, row.path
            )
        })
        .collect();

    format!(
        r#"<html><body>
        <div class="row download-list-widget">
          <div class="list-row-headings">
            <span class="release-num">Release version</span>
            <span class="release-date">Release date</span>
          </div>
          <ol class="list-row-container menu">{}</ol>
        </div>
        </body></html>"#,
        items
    )
}

/// Renders a detail page whose download table links to `links`
pub fn detail_page(links: &[&str]) -> String {
    let rows: String = links
        .iter()
        .map(|link| format!(r#"<tr><td><a href="{}">file</a></td><td>Platform</td></tr>"#, link))
        .collect();

    format!(
        r#"<html><body><article>
        <p><a href="/about/">About</a></p>
        <table><thead><tr><th>Version</th></tr></thead><tbody>{}</tbody></table>
        </article></body></html>"#,
        rows
    )
}

/// Config pointing the collector at the mock server
pub fn server_config(server: &ServerGuard, output: &Path) -> CollectorConfig {
    CollectorConfig {
        listing_url: format!("{}/downloads/", server.url()),
        site_origin: server.url(),
        output: output.to_path_buf(),
        user_agent: Some(TEST_USER_AGENT.to_string()),
        timeout_secs: Some(10),
    }
}

pub async fn mock_page(server: &mut ServerGuard, path: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", path)
        .match_header("user-agent", TEST_USER_AGENT)
        .with_status(status)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .create_async()
        .await
}

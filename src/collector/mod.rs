//! Release collection layer
//!
//! Fetches the python.org release listing, follows each release's detail page
//! and writes the aggregated records to a JSON file.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Listing   │────▶│   Record    │────▶│   Detail    │────▶│   Persist   │
//! │ (rows/page) │     │ (assemble)  │     │ (downloads) │     │   (JSON)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        └──────────────┬────────────────────────┘
//!                       ▼
//!                ┌─────────────┐
//!                │   Session   │
//!                │ (HTTP, UA)  │
//!                └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`session`]: `PageSource` trait and the reqwest-backed session
//! - [`user_agent`]: Browser identification pool
//! - [`listing`]: Listing page extraction, one row per release
//! - [`record`]: `ReleaseRecord` and record assembly
//! - [`date`]: Release date parsing and its canonical string form
//! - [`detail`]: Detail page download-link extraction
//! - [`persist`]: JSON output
//! - [`pipeline`]: `ReleaseCollector`, which runs the stages in order
//! - [`outcome`]: `FetchOutcome` for tolerated HTTP failures
//! - [`error`]: Error type for the collection stages

pub mod date;
pub mod detail;
pub mod error;
pub mod listing;
pub mod outcome;
pub mod persist;
pub mod pipeline;
pub mod record;
pub mod session;
pub mod user_agent;

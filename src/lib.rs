//! # cohort-query — SPARQL cohort query client
//!
//! `cohort-query` renders subject-level filter parameters (age range, sex,
//! imaging modality) into a SPARQL query, submits it to a remote RDF store
//! over HTTP with Basic authentication, and flattens the SPARQL JSON results
//! format into an ordered list of string-to-string rows.
//!
//! - **Query building**: [`QueryFilter`] renders a deterministic SPARQL
//!   `SELECT` with inclusive age bounds and exact-match sex/modality filters.
//! - **Execution**: [`StoreClient::fetch`] performs exactly one `POST` per
//!   call, resolving credentials from [`CredentialSource`] fresh each time.
//! - **Error translation**: non-2xx upstream responses surface as
//!   [`StoreError::Upstream`] carrying the status code and body verbatim.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cohort_query::{QueryFilter, StoreClient, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = StoreConfig::from_env().unwrap();
//!     let client = StoreClient::new(config);
//!     let filter = QueryFilter {
//!         age_min: 18.0,
//!         age_max: 65.0,
//!         sex: "male".into(),
//!         image_modal: "nidm:T1Weighted".into(),
//!     };
//!     let rows = client.fetch(&filter).await.unwrap();
//!     for row in rows {
//!         println!("{:?}", row);
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod response;

pub use client::StoreClient;
pub use config::{CredentialSource, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use query::QueryFilter;
pub use response::ResultRow;

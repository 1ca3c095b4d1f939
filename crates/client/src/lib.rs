//! Client code for ambitscope.
//!
//! This crate provides the site session, keyword search, slug resolution,
//! build version discovery, company document fetch and normalization shared
//! by the server and CLI.

pub mod company;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod resolve;
pub mod search;
pub mod version;

pub use company::{Lookup, NotFoundReason, fetch_company, interpret_response};
pub use extract::{clean, normalize};
pub use fetch::{FetchResponse, SessionConfig, SiteSession};
pub use pipeline::{CompanyProfile, ProfileContext};
pub use resolve::{Resolver, Slug};
pub use search::{KeywordSearch, NoSearch, SearchClient, SearchConfig, SearchError};
pub use version::{VersionToken, discover_version, find_build_id};

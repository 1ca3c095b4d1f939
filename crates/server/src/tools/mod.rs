//! MCP tool implementations.
//!
//! This module contains all tools exposed by the ambitscope server.

pub mod company_profile;

pub use company_profile::{CompanyProfileOutput, CompanyProfileParams};

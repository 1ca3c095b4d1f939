//! Core types and shared functionality for ambitscope.
//!
//! This crate provides:
//! - Unified error types
//! - Configuration structures
//! - The typed company record schema and its display model

pub mod config;
pub mod error;
pub mod record;
pub mod sections;

pub use config::{AppConfig, ConfigError, SearchCredentials};
pub use error::Error;
pub use record::CompanyRecord;
pub use sections::{DisplaySections, Section, Table};

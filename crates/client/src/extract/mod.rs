//! Turning fetched documents into display data.
//!
//! ### Markup
//! - `clean` strips tags from the site's free-text HTML fields.
//!
//! ### Normalization
//! - `normalize` projects a `CompanyRecord` into `DisplaySections`.
//! - Each section is extracted independently; a gap anywhere on its path
//!   only marks that section unavailable.

pub mod markup;
pub mod normalize;

pub use markup::clean;
pub use normalize::{join_names, normalize};

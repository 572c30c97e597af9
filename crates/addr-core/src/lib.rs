//! Address composition.
//!
//! ```text
//! RawComponents
//!     │  normalize (rule chain: use_country, change_country, replace, add_component)
//!     ▼
//! NormalizedComponents
//!     │  render the chain's template
//!     ▼
//! text ─► clean ─► postformat_replace ─► clean ─► formatted address
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use addr_core::AddressComposer;
//! use addr_model::RawComponents;
//! use addr_standards::ConfigStore;
//!
//! let store = ConfigStore::load_embedded()?;
//! let raw: RawComponents = [("road", "Main St"), ("city", "Springfield"), ("country_code", "us")]
//!     .into_iter()
//!     .collect();
//! print!("{}", AddressComposer::new(&store).compose(&raw));
//! ```

pub mod cleaner;
pub mod composer;
pub mod context;
pub mod normalize;
pub mod resolver;

pub use cleaner::clean;
pub use composer::{AddressComposer, compose};
pub use context::ComponentContext;
pub use normalize::{Normalized, Normalizer};
pub use resolver::RuleChain;

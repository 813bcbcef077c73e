//! orama-actions
//!
//! Search actions over a registry of named hosted indexes. The remote client
//! is injected through [`orama_core::SearchClient`]; see `orama-client` for
//! the HTTP implementation.
pub mod dispatch;
pub mod enrich;
pub mod input;
pub mod integration;
pub mod registry;

pub use input::{FacetSearchInput, MultiIndexSearchInput, SearchInput, VectorSearchInput};
pub use integration::Integration;
pub use registry::IndexRegistry;

//! Artwork catalog: the ordered sequence of rounds.
//!
//! - `ArtworkRecord`: one artwork with its reference price
//! - `ArtworkCatalog`: ordered, immutable-after-setup sequence of records

mod record;
mod registry;

pub use record::ArtworkRecord;
pub use registry::ArtworkCatalog;

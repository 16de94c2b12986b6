//! Ordered artwork catalog.
//!
//! The `ArtworkCatalog` holds the records a session plays through, in round
//! order. It is built once at startup and read-only afterwards.

use serde::{Deserialize, Serialize};

use super::record::ArtworkRecord;
use crate::rng::SessionRng;

/// Ordered sequence of artwork records.
///
/// Index position is round position: record 0 is round 0.
///
/// ## Example
///
/// ```
/// use auction_guess::catalog::{ArtworkCatalog, ArtworkRecord};
///
/// let mut catalog = ArtworkCatalog::new();
/// catalog.push(ArtworkRecord::new("Sample Artwork", "Unknown Artist", 75_000));
///
/// let found = catalog.get(0).unwrap();
/// assert_eq!(found.title, "Sample Artwork");
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkCatalog {
    records: Vec<ArtworkRecord>,
}

impl ArtworkCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a vector of records, keeping their order.
    #[must_use]
    pub fn from_records(records: Vec<ArtworkRecord>) -> Self {
        Self { records }
    }

    /// Append a record at the end of the round order.
    pub fn push(&mut self, record: ArtworkRecord) {
        self.records.push(record);
    }

    /// Get the record for a round index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ArtworkRecord> {
        self.records.get(index)
    }

    /// Get the number of rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in round order.
    pub fn iter(&self) -> impl Iterator<Item = &ArtworkRecord> {
        self.records.iter()
    }

    /// Return this catalog with its round order shuffled.
    ///
    /// The shuffle happens once; the returned catalog is as fixed as any
    /// other. Same RNG state produces the same order.
    #[must_use]
    pub fn shuffled(mut self, rng: &mut SessionRng) -> Self {
        rng.shuffle(&mut self.records);
        self
    }
}

impl From<Vec<ArtworkRecord>> for ArtworkCatalog {
    fn from(records: Vec<ArtworkRecord>) -> Self {
        Self::from_records(records)
    }
}

impl FromIterator<ArtworkRecord> for ArtworkCatalog {
    fn from_iter<I: IntoIterator<Item = ArtworkRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_records() -> Vec<ArtworkRecord> {
        vec![
            ArtworkRecord::new("A", "Artist A", 1_000),
            ArtworkRecord::new("B", "Artist B", 2_000),
            ArtworkRecord::new("C", "Artist C", 3_000),
        ]
    }

    #[test]
    fn test_push_and_get() {
        let mut catalog = ArtworkCatalog::new();
        assert!(catalog.is_empty());

        catalog.push(ArtworkRecord::new("Sample Artwork", "Unknown Artist", 75_000));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().reference_price, 75_000);
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_order_preserved() {
        let catalog = ArtworkCatalog::from_records(three_records());

        let titles: Vec<_> = catalog.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_from_iterator() {
        let catalog: ArtworkCatalog = three_records().into_iter().collect();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = SessionRng::new(42);
        let catalog = ArtworkCatalog::from_records(three_records()).shuffled(&mut rng);

        assert_eq!(catalog.len(), 3);
        let mut titles: Vec<_> = catalog.iter().map(|r| r.title.clone()).collect();
        titles.sort();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_shuffled_deterministic() {
        let mut rng1 = SessionRng::new(7);
        let mut rng2 = SessionRng::new(7);

        let a = ArtworkCatalog::from_records(three_records()).shuffled(&mut rng1);
        let b = ArtworkCatalog::from_records(three_records()).shuffled(&mut rng2);

        assert_eq!(a, b);
    }
}

//! The loaded, indexed awardee collection.

use super::record::{Record, SearchKeys};

/// Immutable in-memory collection built from all chunks.
///
/// Records keep chunk-index order, then in-chunk order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    keys: Vec<SearchKeys>,
    chunk_sizes: Vec<usize>,
}

impl Dataset {
    /// Concatenate chunks in the order given and index every record.
    pub fn from_chunks(chunks: Vec<Vec<Record>>) -> Self {
        let chunk_sizes: Vec<usize> = chunks.iter().map(Vec::len).collect();
        let records: Vec<Record> = chunks.into_iter().flatten().collect();
        let keys = records.iter().map(SearchKeys::from).collect();

        Self {
            records,
            keys,
            chunk_sizes,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records contributed by each chunk, by chunk index.
    pub fn chunk_sizes(&self) -> &[usize] {
        &self.chunk_sizes
    }

    /// Records paired with their precomputed search keys.
    pub fn entries(&self) -> impl Iterator<Item = (&Record, &SearchKeys)> {
        self.records.iter().zip(self.keys.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;

    fn record(name: &str, id: u64) -> Record {
        Record {
            name: name.to_string(),
            base_id: id,
            full_id: format!("{id:04}"),
            pinyin: String::new(),
            pinyin_initials: String::new(),
            school: None,
            year: None,
            period: Period::Number(1),
        }
    }

    #[test]
    fn test_from_chunks_preserves_order_and_sizes() {
        let dataset = Dataset::from_chunks(vec![
            vec![record("a", 1), record("b", 2)],
            vec![],
            vec![record("c", 3)],
        ]);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.chunk_sizes(), &[2, 0, 1]);
        let ids: Vec<u64> = dataset.records().iter().map(|r| r.base_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(dataset.entries().count(), 3);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_chunks(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.chunk_sizes().is_empty());
    }
}

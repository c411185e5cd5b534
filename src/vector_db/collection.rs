// In-memory collection of (id, embedding, document) records
use crate::errors::{RagError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A stored record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    pub embedding: Vec<f32>,
    pub document: String,
}

/// Query result from vector search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub id: String,
    pub score: f32,
    pub document: String,
}

/// Named collection; every vector shares the dimension of the first one added
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    dimension: Option<usize>,
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Collection {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dimension: None,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vector dimension, fixed by the first insert
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Add a document with its embedding
    pub fn add(&mut self, id: &str, embedding: Vec<f32>, document: &str) -> Result<()> {
        if embedding.is_empty() {
            return Err(RagError::EmptyVector(id.to_string()));
        }

        if self.index.contains_key(id) {
            return Err(RagError::DuplicateId {
                collection: self.name.clone(),
                id: id.to_string(),
            });
        }

        if let Some(expected) = self.dimension {
            if embedding.len() != expected {
                return Err(RagError::DimensionMismatch {
                    expected,
                    actual: embedding.len(),
                });
            }
        } else {
            self.dimension = Some(embedding.len());
        }

        self.index.insert(id.to_string(), self.records.len());
        self.records.push(Record {
            id: id.to_string(),
            embedding,
            document: document.to_string(),
        });

        Ok(())
    }

    /// Query the `n_results` most similar documents, best first.
    ///
    /// Equal scores keep insertion order.
    pub fn query(&self, query_embedding: &[f32], n_results: usize) -> Result<Vec<QueryResult>> {
        let Some(expected) = self.dimension else {
            return Ok(Vec::new());
        };

        if query_embedding.len() != expected {
            return Err(RagError::DimensionMismatch {
                expected,
                actual: query_embedding.len(),
            });
        }

        let mut scored: Vec<QueryResult> = self
            .records
            .iter()
            .map(|record| QueryResult {
                id: record.id.clone(),
                score: cosine_similarity(&record.embedding, query_embedding),
                document: record.document.clone(),
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(n_results);

        Ok(scored)
    }

    /// Number of stored records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Stored ids in insertion order
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.index.get(id).map(|&i| &self.records[i])
    }
}

/// Cosine similarity; 0.0 when either vector has zero magnitude or a NaN component.
///
/// Sums are accumulated in f64 so squared components cannot overflow.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum();
    let norm_a: f64 = a.iter().map(|&x| f64::from(x).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|&x| f64::from(x).powi(2)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let score = dot / (norm_a * norm_b);
    if score.is_nan() {
        return 0.0;
    }
    score as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Collection {
        let mut collection = Collection::new("docs");
        collection.add("0", vec![1.0, 0.0, 0.0], "east").unwrap();
        collection.add("1", vec![0.0, 1.0, 0.0], "north").unwrap();
        collection.add("2", vec![0.7, 0.7, 0.0], "north-east").unwrap();
        collection
    }

    #[test]
    fn test_cosine_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-2.0, 0.0]) + 1.0).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[f32::NAN, 1.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_large_components_keep_direction() {
        let mut collection = Collection::new("docs");
        collection.add("near", vec![1e20, 1e20], "aligned").unwrap();
        collection.add("far", vec![0.0, 1.0], "diagonal").unwrap();

        let results = collection.query(&[1.0, 1.0], 2).unwrap();
        assert_eq!(results[0].id, "near");
        assert!((results[0].score - 1.0).abs() < 1e-6);
        assert!((results[1].score - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_nan_component_does_not_break_ordering() {
        let mut collection = Collection::new("docs");
        collection.add("a", vec![1.0, 0.0], "east").unwrap();
        collection.add("b", vec![f32::NAN, 1.0], "broken").unwrap();
        collection.add("c", vec![0.0, 1.0], "north").unwrap();

        let results = collection.query(&[1.0, 0.0], 3).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "a");
    }

    #[test]
    fn test_query_orders_by_similarity() {
        let collection = sample();
        let results = collection.query(&[1.0, 0.1, 0.0], 2).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].document, "east");
        assert_eq!(results[1].document, "north-east");
        assert!(results[0].score >= results[1].score);
    }

    #[test]
    fn test_query_more_than_count() {
        let collection = sample();
        let results = collection.query(&[0.0, 1.0, 0.0], 10).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut collection = Collection::new("docs");
        collection.add("a", vec![1.0, 1.0], "first").unwrap();
        collection.add("b", vec![1.0, 1.0], "second").unwrap();
        collection.add("c", vec![1.0, 1.0], "third").unwrap();

        let results = collection.query(&[1.0, 1.0], 2).unwrap();
        assert_eq!(results[0].id, "a");
        assert_eq!(results[1].id, "b");
    }

    #[test]
    fn test_query_empty_collection() {
        let collection = Collection::new("docs");
        assert!(collection.query(&[1.0, 2.0], 2).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut collection = sample();
        let err = collection.add("1", vec![0.0, 0.0, 1.0], "up").unwrap_err();
        assert!(matches!(err, RagError::DuplicateId { .. }));
        assert_eq!(collection.count(), 3);
        assert_eq!(collection.get("1").unwrap().document, "north");
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let mut collection = sample();
        let err = collection.add("3", vec![1.0, 0.0], "short").unwrap_err();
        assert!(matches!(
            err,
            RagError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));

        let err = collection.query(&[1.0], 1).unwrap_err();
        assert!(matches!(err, RagError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_empty_vector_rejected() {
        let mut collection = Collection::new("docs");
        assert!(matches!(
            collection.add("0", Vec::new(), "nothing"),
            Err(RagError::EmptyVector(_))
        ));
        assert!(collection.dimension().is_none());
    }

    #[test]
    fn test_ids_and_count() {
        let collection = sample();
        assert_eq!(collection.count(), 3);
        assert_eq!(collection.ids(), vec!["0", "1", "2"]);
        assert_eq!(collection.dimension(), Some(3));
        assert!(collection.get("9").is_none());
    }
}

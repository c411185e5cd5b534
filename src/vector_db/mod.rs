//! In-process vector database
//!
//! Holds named collections for the lifetime of the process. Nothing is
//! written to disk.

pub mod collection;

pub use collection::{cosine_similarity, Collection, QueryResult, Record};

use crate::errors::{RagError, Result};
use std::collections::HashMap;

/// Owner of all collections
#[derive(Debug, Default)]
pub struct VectorDb {
    collections: HashMap<String, Collection>,
}

impl VectorDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection; fails if the name is taken
    pub fn create_collection(&mut self, name: &str) -> Result<&mut Collection> {
        if self.collections.contains_key(name) {
            return Err(RagError::CollectionExists(name.to_string()));
        }

        Ok(self
            .collections
            .entry(name.to_string())
            .or_insert_with(|| Collection::new(name)))
    }

    /// Drop a collection and everything in it
    pub fn delete_collection(&mut self, name: &str) -> Result<()> {
        self.collections
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RagError::CollectionNotFound(name.to_string()))
    }

    pub fn collection(&self, name: &str) -> Result<&Collection> {
        self.collections
            .get(name)
            .ok_or_else(|| RagError::CollectionNotFound(name.to_string()))
    }

    pub fn collection_mut(&mut self, name: &str) -> Result<&mut Collection> {
        self.collections
            .get_mut(name)
            .ok_or_else(|| RagError::CollectionNotFound(name.to_string()))
    }

    /// Collection names, sorted
    pub fn list_collections(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.collections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

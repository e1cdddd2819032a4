// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::error::AppError;
use crate::rag::Embedder;
use crate::utils::cosine_similarity;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use tracing::debug;

const INDEX_FILE: &str = "index.json";

/// Searchable structure over one chunk collection. Built whole, never
/// updated in place; a new ingestion builds a new index.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorIndex {
    entries: Vec<IndexEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct IndexEntry {
    text: String,
    embedding: Vec<f32>,
}

#[derive(Debug)]
pub struct SearchHit<'a> {
    pub text: &'a str,
    pub score: f32,
}

impl VectorIndex {
    /// Embeds `chunks` and builds a fresh index, persisting it under
    /// `persist_dir`. An empty chunk list builds an empty index without
    /// calling the embedder.
    pub async fn build(
        chunks: Vec<String>,
        embedder: &dyn Embedder,
        persist_dir: &Path,
    ) -> Result<Self, AppError> {
        let embeddings = if chunks.is_empty() {
            Vec::new()
        } else {
            embedder.embed(&chunks).await?
        };

        if embeddings.len() != chunks.len() {
            return Err(AppError::UpstreamError(format!(
                "Embedder returned {} vectors for {} chunks",
                embeddings.len(),
                chunks.len()
            )));
        }

        let entries = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(text, embedding)| IndexEntry { text, embedding })
            .collect();

        let index = Self { entries };
        index.persist(persist_dir)?;
        debug!(entries = index.len(), "Vector index built");
        Ok(index)
    }

    fn persist(&self, dir: &Path) -> Result<(), AppError> {
        fs::create_dir_all(dir)?;
        let payload = serde_json::to_vec(self)?;
        fs::write(dir.join(INDEX_FILE), payload)?;
        Ok(())
    }

    /// Returns up to `top_k` entries ranked by cosine similarity to
    /// `query_embedding`, best first.
    pub fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchHit<'_>>, AppError> {
        let mut hits = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let score = cosine_similarity(&entry.embedding, query_embedding)?;
            hits.push(SearchHit {
                text: &entry.text,
                score,
            });
        }

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(top_k);
        Ok(hits)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::KnowledgeConfig;
use crate::domain::QueryResponse;
use crate::error::AppError;
use crate::rag::answerer::Answerer;
use crate::rag::index::VectorIndex;
use crate::rag::{ChatModel, Embedder};
use crate::text::TextChunker;
use crate::utils::constants::SOURCE_EXCERPT_CHARS;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Answer returned when no ingestion has happened yet.
pub const NO_DOCUMENTS_ANSWER: &str = "No documents loaded. Please add documents first.";

const TRUNCATION_MARKER: &str = "...";

/// Orchestrates chunking, indexing and question answering.
///
/// The answerer owns its index, so a single `Option` keeps the
/// index/answerer pair present or absent together. The whole pair is
/// swapped under the write lock; queries clone the `Arc` snapshot and
/// release the lock before any external call.
pub struct KnowledgeService {
    embedder: Arc<dyn Embedder>,
    chat: Arc<dyn ChatModel>,
    chunker: TextChunker,
    persist_dir: PathBuf,
    top_k: usize,
    answerer: RwLock<Option<Arc<Answerer>>>,
}

impl KnowledgeService {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        chat: Arc<dyn ChatModel>,
        config: &KnowledgeConfig,
    ) -> Self {
        Self {
            embedder,
            chat,
            chunker: TextChunker::new(config.chunk_size, config.chunk_overlap),
            persist_dir: config.persist_dir.clone(),
            top_k: config.top_k,
            answerer: RwLock::new(None),
        }
    }

    /// Chunks every document, builds a fresh index over the concatenated
    /// chunks and replaces the current index/answerer pair. An empty
    /// document list still produces a present, empty index.
    pub async fn add_documents(&self, documents: &[String]) -> Result<(), AppError> {
        let mut all_chunks = Vec::new();
        for document in documents {
            all_chunks.extend(self.chunker.split(document));
        }

        info!(
            documents = documents.len(),
            chunks = all_chunks.len(),
            "Rebuilding knowledge index"
        );

        let index = VectorIndex::build(all_chunks, self.embedder.as_ref(), &self.persist_dir).await?;
        let answerer = Answerer::new(
            index,
            Arc::clone(&self.embedder),
            Arc::clone(&self.chat),
            self.top_k,
        );

        *self.answerer.write().await = Some(Arc::new(answerer));
        Ok(())
    }

    /// Answers `question` against the current index. Before any ingestion
    /// this returns the fixed no-documents answer without calling out.
    pub async fn query(&self, question: &str) -> Result<QueryResponse, AppError> {
        let answerer = self.answerer.read().await.clone();
        let Some(answerer) = answerer else {
            return Ok(QueryResponse {
                answer: NO_DOCUMENTS_ANSWER.to_string(),
                sources: Vec::new(),
            });
        };

        let outcome = answerer.answer(question).await?;
        let sources = outcome
            .sources
            .iter()
            .map(|doc| source_excerpt(&doc.page_content))
            .collect();

        Ok(QueryResponse {
            answer: outcome.answer,
            sources,
        })
    }

    /// True once a first ingestion has completed.
    pub async fn is_loaded(&self) -> bool {
        self.answerer.read().await.is_some()
    }
}

// The marker is appended unconditionally, also to content that fits in
// the excerpt. Callers rely on the `min(200, len) + 3` length contract.
fn source_excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(SOURCE_EXCERPT_CHARS).collect();
    excerpt.push_str(TRUNCATION_MARKER);
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_of_long_content_is_truncated() {
        let excerpt = source_excerpt(&"x".repeat(500));
        assert_eq!(excerpt.chars().count(), 203);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_excerpt_of_short_content_still_gets_marker() {
        let excerpt = source_excerpt("short source");
        assert_eq!(excerpt, "short source...");
    }

    #[test]
    fn test_excerpt_length_contract() {
        for len in [0, 1, 199, 200, 201, 400] {
            let content = "y".repeat(len);
            let excerpt = source_excerpt(&content);
            assert_eq!(excerpt.chars().count(), len.min(200) + 3);
        }
    }
}

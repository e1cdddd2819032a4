// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::error::AppError;
use crate::rag::index::VectorIndex;
use crate::rag::{ChatModel, Embedder};
use std::sync::Arc;
use tracing::debug;

const SYSTEM_PROMPT: &str = "You are a helpful assistant. Answer the question using only the \
provided context. If the context does not contain the answer, say so.";

/// A retrieved chunk supporting an answer.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub page_content: String,
}

/// Raw answerer output: the model's answer plus the retrieved chunks
/// that were stuffed into the prompt, in retrieval order.
#[derive(Debug)]
pub struct AnswerOutcome {
    pub answer: String,
    pub sources: Vec<SourceDocument>,
}

/// Retrieval-QA chain bound to one [`VectorIndex`]: embeds the question,
/// retrieves the `top_k` closest chunks and asks the chat model over the
/// stuffed context. Replaced together with its index on every ingestion.
pub struct Answerer {
    index: VectorIndex,
    embedder: Arc<dyn Embedder>,
    chat: Arc<dyn ChatModel>,
    top_k: usize,
}

impl Answerer {
    pub fn new(
        index: VectorIndex,
        embedder: Arc<dyn Embedder>,
        chat: Arc<dyn ChatModel>,
        top_k: usize,
    ) -> Self {
        Self {
            index,
            embedder,
            chat,
            top_k,
        }
    }

    pub async fn answer(&self, question: &str) -> Result<AnswerOutcome, AppError> {
        let sources = self.retrieve(question).await?;
        let context = sources
            .iter()
            .map(|doc| doc.page_content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let prompt = format!("Context:\n{context}\n\nQuestion: {question}");
        let answer = self.chat.complete(SYSTEM_PROMPT, &prompt).await?;
        debug!(sources = sources.len(), "Question answered");

        Ok(AnswerOutcome { answer, sources })
    }

    async fn retrieve(&self, question: &str) -> Result<Vec<SourceDocument>, AppError> {
        if self.index.is_empty() {
            return Ok(Vec::new());
        }

        let mut embeddings = self.embedder.embed(&[question.to_string()]).await?;
        let query_embedding = if embeddings.is_empty() {
            return Err(AppError::UpstreamError(
                "Embedder returned no vector for the question".to_string(),
            ));
        } else {
            embeddings.remove(0)
        };

        let hits = self.index.search(&query_embedding, self.top_k)?;
        Ok(hits
            .into_iter()
            .map(|hit| SourceDocument {
                page_content: hit.text.to_string(),
            })
            .collect())
    }
}

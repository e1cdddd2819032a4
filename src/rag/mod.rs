// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Retrieval-augmented answering: vector index, answerer and the
//! knowledge service orchestrating both.

pub mod answerer;
pub mod index;
pub mod service;

use crate::error::AppError;
use async_trait::async_trait;

pub use answerer::{AnswerOutcome, Answerer, SourceDocument};
pub use index::VectorIndex;
pub use service::{KnowledgeService, NO_DOCUMENTS_ANSWER};

/// Converts texts to vector representations.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, AppError>;
}

/// Produces a free-text completion for a prompt.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, AppError>;
}

// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Mock collaborators standing in for the OpenAI client in tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use omnidesk::config::KnowledgeConfig;
use omnidesk::error::AppError;
use omnidesk::rag::{ChatModel, Embedder, KnowledgeService};
use std::sync::Arc;
use tempfile::TempDir;

const MOCK_DIMENSION: usize = 8;

/// Deterministic content-derived embeddings, so similar strings land
/// close together and retrieval ordering is reproducible.
pub struct MockEmbedder;

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
        Ok(texts.iter().map(|t| mock_embedding(t)).collect())
    }
}

fn mock_embedding(text: &str) -> Vec<f32> {
    let mut embedding = vec![0.0f32; MOCK_DIMENSION];
    for (i, byte) in text.bytes().enumerate() {
        embedding[i % MOCK_DIMENSION] += byte as f32 / 255.0;
    }
    embedding
}

/// Always fails; used to verify that a failed ingestion leaves the
/// service state untouched.
pub struct FailingEmbedder;

#[async_trait]
impl Embedder for FailingEmbedder {
    async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
        Err(AppError::UpstreamError("embedding quota exceeded".to_string()))
    }
}

/// Returns a canned answer regardless of the prompt.
pub struct MockChat {
    pub answer: String,
}

impl MockChat {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
        }
    }
}

#[async_trait]
impl ChatModel for MockChat {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, AppError> {
        Ok(self.answer.clone())
    }
}

pub fn knowledge_config(dir: &TempDir) -> KnowledgeConfig {
    KnowledgeConfig {
        persist_dir: dir.path().join("knowledge_db"),
        ..KnowledgeConfig::default()
    }
}

/// A service backed by mocks, answering every question with `answer`.
pub fn mock_service(dir: &TempDir, answer: &str) -> KnowledgeService {
    KnowledgeService::new(
        Arc::new(MockEmbedder),
        Arc::new(MockChat::answering(answer)),
        &knowledge_config(dir),
    )
}

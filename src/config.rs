// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::error::AppError;
use crate::utils::constants::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_TOP_K};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub openai: OpenAiConfig,
    pub knowledge: KnowledgeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub embedding_model: String,
    pub chat_model: String,
}

/// Knowledge-service tuning: chunk geometry, retrieval depth and the
/// directory the vector index is persisted to.
#[derive(Debug, Deserialize, Clone)]
pub struct KnowledgeConfig {
    pub persist_dir: PathBuf,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub top_k: usize,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            persist_dir: PathBuf::from("./knowledge_db"),
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000);

        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| AppError::ConfigError("OPENAI_API_KEY is not set".to_string()))?;
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let embedding_model =
            env::var("EMBEDDING_MODEL").unwrap_or_else(|_| "text-embedding-3-small".to_string());
        let chat_model = env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let persist_dir = env::var("PERSIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./knowledge_db"));
        let chunk_size = env::var("CHUNK_SIZE")
            .unwrap_or_default()
            .parse()
            .unwrap_or(DEFAULT_CHUNK_SIZE);
        let chunk_overlap = env::var("CHUNK_OVERLAP")
            .unwrap_or_default()
            .parse()
            .unwrap_or(DEFAULT_CHUNK_OVERLAP);
        let top_k = env::var("TOP_K")
            .unwrap_or_default()
            .parse()
            .unwrap_or(DEFAULT_TOP_K);

        Ok(AppConfig {
            server: ServerConfig { host, port },
            openai: OpenAiConfig {
                api_key,
                base_url,
                embedding_model,
                chat_model,
            },
            knowledge: KnowledgeConfig {
                persist_dir,
                chunk_size,
                chunk_overlap,
                top_k,
            },
        })
    }
}

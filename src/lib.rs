// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod config;
pub mod domain;
pub mod error;
pub mod openai;
pub mod rag;
pub mod routes;
pub mod text;
pub mod utils;

pub use config::{AppConfig, KnowledgeConfig, OpenAiConfig, ServerConfig};
pub use domain::{AddDocumentsRequest, AddDocumentsResponse, QueryRequest, QueryResponse};
pub use error::AppError;
pub use openai::OpenAiClient;
pub use rag::{ChatModel, Embedder, KnowledgeService};
pub use text::TextChunker;

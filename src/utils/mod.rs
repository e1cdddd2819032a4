// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod constants;
pub mod vector;

pub use constants::{
    DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_TOP_K, SERVICE_NAME, SOURCE_EXCERPT_CHARS,
};
pub use vector::cosine_similarity;

// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Service identifier reported by the health endpoint.
pub const SERVICE_NAME: &str = "omni-desk";

/// Maximum chunk length in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Characters shared between consecutive chunks.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Chunks retrieved per question.
pub const DEFAULT_TOP_K: usize = 3;

/// Characters of page content kept in a source excerpt before the
/// truncation marker.
pub const SOURCE_EXCERPT_CHARS: usize = 200;

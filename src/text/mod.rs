// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod chunker;

pub use chunker::TextChunker;

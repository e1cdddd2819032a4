// Copyright (c) 2026 OmniDesk
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::constants::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

/// Character-based sliding-window splitter. Counts are in `char`s, not
/// bytes, so multi-byte input never splits inside a code point.
#[derive(Debug, Clone)]
pub struct TextChunker {
    chunk_size: usize,
    overlap_size: usize,
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}

impl TextChunker {
    /// A zero `chunk_size` is raised to 1, and an overlap of `chunk_size`
    /// or more is clamped so each window still advances by at least one
    /// character.
    pub fn new(chunk_size: usize, overlap_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            overlap_size: overlap_size.min(chunk_size - 1),
        }
    }

    /// Splits `text` into ordered windows of at most `chunk_size` characters,
    /// consecutive windows sharing `overlap_size` characters. Empty input
    /// yields no chunks; input within `chunk_size` yields exactly one.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let char_count = chars.len();

        if char_count == 0 {
            return Vec::new();
        }

        if char_count <= self.chunk_size {
            return vec![text.to_string()];
        }

        let step = self.chunk_size - self.overlap_size;
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < char_count {
            let end = (start + self.chunk_size).min(char_count);
            chunks.push(chars[start..end].iter().collect());

            if end >= char_count {
                break;
            }
            start += step;
        }

        chunks
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap_size(&self) -> usize {
        self.overlap_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let chunker = TextChunker::default();
        assert!(chunker.split("").is_empty());
    }

    #[test]
    fn test_short_input_is_one_chunk() {
        let chunker = TextChunker::default();
        let chunks = chunker.split("hello world");
        assert_eq!(chunks, vec!["hello world".to_string()]);
    }

    #[test]
    fn test_input_at_exact_boundary_is_one_chunk() {
        let chunker = TextChunker::new(10, 2);
        let text = "a".repeat(10);
        assert_eq!(chunker.split(&text), vec![text.clone()]);
    }

    #[test]
    fn test_long_input_respects_chunk_bound() {
        let chunker = TextChunker::default();
        let text = "x".repeat(3500);
        let chunks = chunker.split(&text);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 1000);
        }
    }

    #[test]
    fn test_consecutive_windows_overlap() {
        let chunker = TextChunker::new(10, 4);
        let text: String = ('a'..='z').collect();
        let chunks = chunker.split(&text);

        // windows step by 6: abcdefghij, ghijklmnop, mnopqrstuv, stuvwxyz
        assert_eq!(chunks[0], "abcdefghij");
        assert_eq!(chunks[1], "ghijklmnop");
        assert_eq!(chunks[2], "mnopqrstuv");
        assert_eq!(chunks[3], "stuvwxyz");
        assert_eq!(chunks.len(), 4);

        for pair in chunks.windows(2) {
            let tail: String = pair[0].chars().skip(10 - 4).collect();
            assert!(pair[1].starts_with(&tail));
        }
    }

    #[test]
    fn test_split_is_deterministic() {
        let chunker = TextChunker::default();
        let text = "The quick brown fox. ".repeat(200);
        assert_eq!(chunker.split(&text), chunker.split(&text));
    }

    #[test]
    fn test_multibyte_input_counts_chars_not_bytes() {
        let chunker = TextChunker::new(5, 1);
        let text = "日本語のテキストを分割する";
        let chunks = chunker.split(text);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 5);
        }
        assert_eq!(chunks[0], "日本語のテ");
    }

    #[test]
    fn test_excessive_overlap_is_clamped() {
        let chunker = TextChunker::new(4, 10);
        assert_eq!(chunker.overlap_size(), 3);
        let chunks = chunker.split("abcdefgh");
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 4);
        }
    }
}

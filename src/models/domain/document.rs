use serde::{Deserialize, Serialize};

/// Text extracted from a source document: one segment per page (or logical
/// unit), in reading order. Produced by a `DocumentLoader`; never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractedDocument {
    pub segments: Vec<String>,
}

impl ExtractedDocument {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_with_only_blank_segments_is_empty() {
        let document = ExtractedDocument::new(vec!["  ".to_string(), "\n".to_string()]);

        assert!(document.is_empty());
        assert_eq!(document.segment_count(), 2);
    }

    #[test]
    fn document_with_content_is_not_empty() {
        let document = ExtractedDocument::new(vec!["Page one text".to_string()]);

        assert!(!document.is_empty());
    }
}

use async_trait::async_trait;
use lopdf::Document;

use crate::{
    errors::{AppError, AppResult},
    models::domain::ExtractedDocument,
};

/// The document-ingestion boundary: raw bytes in, ordered text segments out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn extract(&self, bytes: Vec<u8>) -> AppResult<ExtractedDocument>;
}

/// Extracts one text segment per PDF page. Parsing runs on a blocking thread.
pub struct PdfDocumentLoader;

#[async_trait]
impl DocumentLoader for PdfDocumentLoader {
    async fn extract(&self, bytes: Vec<u8>) -> AppResult<ExtractedDocument> {
        let segments = tokio::task::spawn_blocking(move || extract_page_texts(&bytes))
            .await
            .map_err(|e| AppError::InternalError(format!("PDF extraction task failed: {}", e)))??;

        log::info!("Extracted text from {} PDF page(s)", segments.len());

        Ok(ExtractedDocument::new(segments))
    }
}

fn extract_page_texts(bytes: &[u8]) -> AppResult<Vec<String>> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| AppError::DocumentError(format!("Failed to load PDF: {}", e)))?;

    let mut segments = Vec::new();
    for (page_num, _page_id) in doc.get_pages() {
        let text = doc.extract_text(&[page_num]).map_err(|e| {
            AppError::DocumentError(format!(
                "Failed to extract text from page {}: {}",
                page_num, e
            ))
        })?;
        segments.push(text);
    }

    Ok(segments)
}

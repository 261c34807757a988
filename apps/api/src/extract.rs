//! Text extraction from uploaded CV files.

use tracing::warn;

use crate::errors::AppError;

/// Extracts plain text from an uploaded CV, dispatching on the file
/// extension. PDFs and Word documents are parsed in memory; everything
/// else is treated as plain text. An unreadable or empty file surfaces as
/// an explicit "no text extracted" error — there is no retry.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            warn!("PDF extraction failed for '{filename}': {e}");
            AppError::UnprocessableEntity("Could not extract text from the file".to_string())
        })?,
        "doc" | "docx" => extract_text_from_docx(bytes).map_err(|e| {
            warn!("DOCX extraction failed for '{filename}': {e}");
            AppError::UnprocessableEntity("Could not extract text from the file".to_string())
        })?,
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract text from the file".to_string(),
        ));
    }

    Ok(text)
}

/// One line of text per paragraph, matching how CV text reads downstream
/// in the experience regexes.
fn extract_text_from_docx(bytes: &[u8]) -> Result<String, docx_rs::ReaderError> {
    let docx = docx_rs::read_docx(bytes)?;

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for para_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = para_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docx_bytes(body: &str) -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        docx_rs::Docx::new()
            .add_paragraph(
                docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(body)),
            )
            .build()
            .pack(&mut buf)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_text("cv.txt", b"Python developer, 5 years of experience").unwrap();
        assert_eq!(text, "Python developer, 5 years of experience");
    }

    #[test]
    fn test_unknown_extension_treated_as_text() {
        let text = extract_text("resume", b"Some resume body").unwrap();
        assert_eq!(text, "Some resume body");
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let err = extract_text("cv.txt", b"   \n  ").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_docx_text_is_extracted() {
        let bytes = docx_bytes("Python developer with 5 years of experience");
        let text = extract_text("cv.docx", &bytes).unwrap();
        assert!(text.contains("Python developer with 5 years of experience"));
    }

    #[test]
    fn test_corrupt_word_document_is_rejected() {
        let err = extract_text("cv.docx", b"PK\x03\x04not a real archive").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_legacy_doc_extension_takes_docx_path() {
        let bytes = docx_bytes("Staff engineer");
        let text = extract_text("cv.doc", &bytes).unwrap();
        assert!(text.contains("Staff engineer"));
    }
}

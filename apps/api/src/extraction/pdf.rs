use super::ExtractionError;

/// Page text is concatenated in document order with no separator added.
pub(super) fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

/// Builds a PDF with one line of Courier text per page.
#[cfg(test)]
pub(crate) fn build_pdf(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for (i, text) in pages.iter().enumerate() {
        // Each page draws on its own baseline so lines stay apart in the output.
        let baseline = 700 - 100 * i as i64;
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), baseline.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_extracted_in_document_order() {
        let bytes = build_pdf(&["Senior Rust Engineer", "Kubernetes Terraform"]);
        let text = extract_text(&bytes).unwrap();

        let words: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(
            words,
            vec!["Senior", "Rust", "Engineer", "Kubernetes", "Terraform"],
            "{text:?}"
        );
    }

    #[test]
    fn test_single_page() {
        let bytes = build_pdf(&["Python Developer"]);
        assert_eq!(extract_text(&bytes).unwrap().trim(), "Python Developer");
    }

    #[test]
    fn test_garbage_bytes_fail() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }
}

//! Product code extraction.

use std::sync::LazyLock;

use regex::Regex;

// EAN-8, UPC-A, EAN-13 and GTIN-14 lengths, as standalone digit runs.
static PRODUCT_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d{14}|\d{13}|\d{12}|\d{8})\b").expect("barcode pattern is valid")
});

/// The first standalone product-code digit run in the text.
pub fn extract_barcode(text: &str) -> Option<String> {
    PRODUCT_CODE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ean13() {
        assert_eq!(
            extract_barcode("EAN 8901058851826"),
            Some("8901058851826".to_string())
        );
    }

    #[test]
    fn test_other_lengths() {
        assert_eq!(extract_barcode("UPC 036000291452"), Some("036000291452".to_string()));
        assert_eq!(extract_barcode("code 96385074"), Some("96385074".to_string()));
    }

    #[test]
    fn test_rejects_partial_runs() {
        assert_eq!(extract_barcode("batch 1234567890"), None);
        assert_eq!(extract_barcode("15/04/2025"), None);
        assert_eq!(extract_barcode(""), None);
    }
}

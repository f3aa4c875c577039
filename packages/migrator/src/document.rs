//! Document Splitter
//!
//! Separates a component file into its markup region and its script region
//! at the opening script tag. Everything after the tag, the closing
//! `</script>` and any trailing blocks included, belongs to the script
//! region and rides along as residue.

use crate::error::{MigrateError, Result};

/// The region delimiter. Only typed script blocks are converted.
pub const SCRIPT_OPEN_TAG: &str = "<script lang=\"ts\">";

/// Closing marker used when inserting lifecycle guards.
pub const SCRIPT_CLOSE_TAG: &str = "</script>";

/// Splits `document` at the first occurrence of [`SCRIPT_OPEN_TAG`].
///
/// Returns `(markup, script)`. Fails with
/// [`MigrateError::MissingScriptTag`] when the delimiter is absent.
pub fn split_document(document: &str) -> Result<(String, String)> {
    match document.split_once(SCRIPT_OPEN_TAG) {
        Some((markup, script)) => Ok((markup.to_string(), script.to_string())),
        None => Err(MigrateError::MissingScriptTag {
            delimiter: SCRIPT_OPEN_TAG,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_tag_only() {
        let doc = "<template></template>\n<script lang=\"ts\">\nlet a;\n</script>";
        let (markup, script) = split_document(doc).unwrap();
        assert_eq!(markup, "<template></template>\n");
        assert_eq!(script, "\nlet a;\n</script>");
    }

    #[test]
    fn missing_tag_is_a_structural_error() {
        let err = split_document("<template/>").unwrap_err();
        assert!(matches!(err, MigrateError::MissingScriptTag { .. }));
    }
}

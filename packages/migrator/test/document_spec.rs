//! Document Splitter Tests

mod utils;

use utils::{component, convert};
use vue_migrator::{transform, MigrateError, MigrateOptions};

#[test]
fn missing_script_tag_aborts_the_document() {
    let err = transform("<template><div/></template>", &MigrateOptions::default()).unwrap_err();
    assert!(matches!(err, MigrateError::MissingScriptTag { .. }));
}

#[test]
fn untyped_script_tag_is_not_a_delimiter() {
    let doc = "<template/>\n<script>\nmodule.exports = {};\n</script>\n";
    let err = transform(doc, &MigrateOptions::default()).unwrap_err();
    assert!(matches!(err, MigrateError::MissingScriptTag { .. }));
}

#[test]
fn markup_region_is_preserved_in_front_of_the_script() {
    let out = convert(&component("  hello(): void {\n    go();\n  }\n"));
    assert!(out.starts_with("<template>\n  <div></div>\n</template>\n<script setup lang=\"ts\">\n"));
    assert!(out.contains("</script>"));
}

#[test]
fn converted_header_replaces_the_original_tag() {
    let out = convert(&component("  hello(): void {\n    go();\n  }\n"));
    assert!(!out.contains("<script lang=\"ts\">"));
    assert!(out.contains("<script setup lang=\"ts\">"));
}

//! Batch Migration Tests

use std::fs;
use std::path::Path;

use vue_migrator::MigrateOptions;
use vue_migrator_cli::perform_migrate::{enumerate_files, perform_migration};

const GOOD: &str = "<template>\n  <div></div>\n</template>\n<script lang=\"ts\">\nimport { Component, Vue } from \"vue-property-decorator\";\n\n@Component({})\nexport default class Sample extends Vue {\n  count = 0;\n\n  bump(): void {\n    this.count += 1;\n  }\n}\n</script>\n";

const BAD: &str = "<template>\n  <div></div>\n</template>\n";

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn converts_matching_files_into_the_output_directory() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write(input.path(), "Sample.vue", GOOD);

    let summary =
        perform_migration(input.path(), output.path(), &[], &MigrateOptions::default()).unwrap();
    assert_eq!(summary.converted.len(), 1);
    assert!(!summary.has_failures());

    let converted = fs::read_to_string(output.path().join("Sample.vue")).unwrap();
    assert!(converted.contains("<script setup lang=\"ts\">"));
    assert!(converted.contains("  const count = ref(0);"));
}

#[test]
fn failing_documents_are_skipped_without_output() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write(input.path(), "Good.vue", GOOD);
    write(input.path(), "Bad.vue", BAD);

    let summary =
        perform_migration(input.path(), output.path(), &[], &MigrateOptions::default()).unwrap();
    assert_eq!(summary.converted.len(), 1);
    assert_eq!(summary.failed.len(), 1);
    assert!(summary.has_failures());

    assert!(output.path().join("Good.vue").exists());
    assert!(!output.path().join("Bad.vue").exists());
}

#[test]
fn default_include_pattern_selects_component_files_only() {
    let input = tempfile::tempdir().unwrap();
    write(input.path(), "Sample.vue", GOOD);
    write(input.path(), "notes.txt", "not a component");

    let files = enumerate_files(input.path(), &[]).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, "Sample.vue");
}

#[test]
fn explicit_include_patterns_are_deduplicated() {
    let input = tempfile::tempdir().unwrap();
    write(input.path(), "Sample.vue", GOOD);

    let patterns = vec!["*.vue".to_string(), "Sample.*".to_string()];
    let files = enumerate_files(input.path(), &patterns).unwrap();
    assert_eq!(files.len(), 1);
}

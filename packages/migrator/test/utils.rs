//! Shared helpers for the migrator specs.
#![allow(dead_code)]

use vue_migrator::{transform, MigrateOptions};

pub const DEFAULT_TEMPLATE: &str = "<template>\n  <div></div>\n</template>\n";

/// Wraps a class body in a complete component document.
pub fn component(body: &str) -> String {
    component_with_template(DEFAULT_TEMPLATE, body)
}

pub fn component_with_template(template: &str, body: &str) -> String {
    format!(
        "{template}<script lang=\"ts\">\nimport {{ Component, Prop, PropSync, VModel, Vue, Watch }} from \"vue-property-decorator\";\n\n@Component({{}})\nexport default class Sample extends Vue {{\n{body}}}\n</script>\n"
    )
}

/// Converts with default options, panicking on conversion errors.
pub fn convert(document: &str) -> String {
    transform(document, &MigrateOptions::default()).expect("conversion failed")
}

pub fn convert_with(document: &str, options: &MigrateOptions) -> String {
    transform(document, options).expect("conversion failed")
}

/// Position of `needle` in `haystack`, panicking when absent.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("expected {needle:?} in output:\n{haystack}"))
}

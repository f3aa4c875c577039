//! Declaration Extractor
//!
//! Pulls import statements and interface blocks out of the script region
//! into ordered side lists, erasing the matched spans. Extraction follows
//! source order; the assembler re-sorts both lists lexicographically.
//! A malformed or unterminated block simply fails to match and is left in
//! the residue.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::RewriteContext;

static IMPORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)import (.*?) from (.*?);\n").unwrap());

static INTERFACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)export interface (.*?) \{\n(.*?)\n\}").unwrap());

/// Moves every import statement from the script into the import side list.
pub fn extract_imports(ctx: &mut RewriteContext) {
    for m in IMPORT_RE.find_iter(&ctx.script) {
        ctx.imports.push(m.as_str().to_string());
    }
    ctx.script = IMPORT_RE.replace_all(&ctx.script, "").into_owned();
}

/// Moves every exported interface block from the script into the interface
/// side list.
pub fn extract_interfaces(ctx: &mut RewriteContext) {
    for m in INTERFACE_RE.find_iter(&ctx.script) {
        ctx.interfaces.push(m.as_str().to_string());
    }
    ctx.script = INTERFACE_RE.replace_all(&ctx.script, "").into_owned();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(script: &str) -> RewriteContext {
        RewriteContext::new(String::new(), script.to_string())
    }

    #[test]
    fn extracts_imports_in_source_order() {
        let mut ctx = ctx("import { b } from \"b\";\nimport a from \"a\";\nlet x;\n");
        extract_imports(&mut ctx);
        assert_eq!(
            ctx.imports,
            vec!["import { b } from \"b\";\n", "import a from \"a\";\n"]
        );
        assert_eq!(ctx.script, "let x;\n");
    }

    #[test]
    fn extracts_multiline_interface_blocks() {
        let src = "export interface Item {\n  id: number;\n}\nlet x;\n";
        let mut ctx = ctx(src);
        extract_interfaces(&mut ctx);
        assert_eq!(ctx.interfaces, vec!["export interface Item {\n  id: number;\n}"]);
        assert_eq!(ctx.script, "\nlet x;\n");
    }

    #[test]
    fn unterminated_interface_passes_through() {
        let src = "export interface Item {\n  id: number;\nlet x;\n";
        let mut ctx = ctx(src);
        extract_interfaces(&mut ctx);
        assert!(ctx.interfaces.is_empty());
        assert_eq!(ctx.script, src);
    }
}

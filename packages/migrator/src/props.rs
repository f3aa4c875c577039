//! Property Extractor
//!
//! Recognizes decorated property declarations, removes them from the script
//! and appends normalized [`Property`] records. Two shapes are understood:
//! the options-object form (`@Prop({ ... })`, `@PropSync("attr", { ... })`)
//! and the bare-constructor form (`@Prop(Number)`). Only `required` and
//! `default` are interpreted from the options payload; everything else is
//! passed through unread.
//!
//! Extraction order does not imply declaration order in the output: the
//! assembler sorts props alphabetically.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::RewriteContext;
use crate::model::{BindingKind, Property, SortOrder, StateBinding};
use crate::options::MigrateOptions;

/// Two-way accessor helper import, registered once per document.
const SYNC_MODEL_IMPORT: &str = "import { syncModel } from '@/modules/modelWrapper';";
const SYNC_MODEL_IMPORT_NOTE: &str = " // take a look at modelwrapper.txt";

static PROP_OPTIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)@(Prop|PropSync)\((?:"([^"]*)",\s*)?\{(.*?)\}\)\s*(?:readonly |public |private )?(\w+)!: ([^;\n]+);"#,
    )
    .unwrap()
});

static PROP_CTOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@Prop\((?:[A-Z]\w*)?\)\s*(?:readonly |public |private )?(\w+)!: ([^;\n]+);").unwrap()
});

/// The accessor helper import line, with or without its explanatory note.
pub(crate) fn sync_model_import(annotate: bool) -> String {
    if annotate {
        format!("{SYNC_MODEL_IMPORT}{SYNC_MODEL_IMPORT_NOTE}\n")
    } else {
        format!("{SYNC_MODEL_IMPORT}\n")
    }
}

/// Splits a flat options payload on top-level commas. Commas nested inside
/// brackets, parentheses, braces or string literals do not split.
pub(crate) fn split_top_level(payload: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0usize;
    for (i, c) in payload.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' | '`' => quote = Some(c),
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    parts.push(&payload[start..i]);
                    start = i + 1;
                }
                _ => {}
            },
        }
    }
    parts.push(&payload[start..]);
    parts.retain(|p| !p.trim().is_empty());
    parts
}

/// Parses a flat `key: value` options payload. No nested-object support;
/// keys and values keep their raw spelling apart from surrounding quotes on
/// the key and on string values.
pub(crate) fn parse_options(payload: &str) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for pair in split_top_level(payload) {
        if let Some((key, value)) = pair.split_once(':') {
            let key = key.trim().trim_matches(|c| c == '"' || c == '\'');
            out.insert(key.to_string(), strip_quotes(value.trim()).to_string());
        }
    }
    out
}

fn strip_quotes(token: &str) -> &str {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &token[1..token.len() - 1];
        }
    }
    token
}

fn push_unique(ctx: &mut RewriteContext, prop: Property) {
    if ctx.has_prop(&prop.name) {
        ctx.note(format!("duplicate prop ignored: {}", prop.name));
        return;
    }
    ctx.props.push(prop);
}

/// Extracts every decorated property declaration from the script.
pub fn extract_props(ctx: &mut RewriteContext, options: &MigrateOptions) {
    let snapshot = ctx.script.clone();
    for caps in PROP_OPTIONS_RE.captures_iter(&snapshot) {
        let decorator = &caps[1];
        let attr_name = caps.get(2).map(|m| m.as_str().to_string());
        let payload = parse_options(&caps[3]);
        let field = caps[4].to_string();
        let prop_type = caps[5].trim().to_string();

        let name = attr_name.clone().unwrap_or_else(|| field.clone());
        let mut prop = Property::new(name, prop_type.clone());
        prop.binding_name = field.clone();
        prop.required = payload.get("required").map(String::as_str) == Some("true");
        prop.default_value = payload.get("default").cloned();

        if decorator == "PropSync" {
            let attr = attr_name.as_deref().unwrap_or(&field);
            ctx.emits.insert(format!("update:{attr}"));
            ctx.add_import_once(sync_model_import(options.annotate_imports));
            let line = format!("  const {field} = syncModel<{prop_type}>(props, emit, '{attr}');");
            ctx.state.push(StateBinding {
                name: field,
                kind: BindingKind::Signal,
                line,
                sort_order: SortOrder::Signal,
                hoist: true,
            });
        }
        push_unique(ctx, prop);
    }
    ctx.script = PROP_OPTIONS_RE.replace_all(&ctx.script, "").into_owned();

    let snapshot = ctx.script.clone();
    for caps in PROP_CTOR_RE.captures_iter(&snapshot) {
        let prop = Property::new(caps[1].to_string(), caps[2].trim().to_string());
        push_unique(ctx, prop);
    }
    ctx.script = PROP_CTOR_RE.replace_all(&ctx.script, "").into_owned();
}

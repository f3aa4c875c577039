//! Member Rewriter
//!
//! Sequential shape-driven sub-passes over the script text: decorated
//! accessors to `computed` bindings, instance methods to arrow-function
//! bindings, bare field initializers to `ref`/`reactive` bindings, `@VModel`
//! declarations to a synthesized model prop/emit pair, and the fixed table
//! of project-global accessor substitutions. Each sub-pass can be disabled
//! independently; a disabled sub-pass leaves its input untouched and notes
//! the skip in the pass log.
//!
//! Later sub-passes operate on the text already modified by earlier ones,
//! so the order here is fixed and test-pinned.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::context::RewriteContext;
use crate::model::{BindingKind, Property, SortOrder, StateBinding};
use crate::options::{MigrateOptions, RuleFlags};
use crate::props::{parse_options, sync_model_import};

static COMPONENT_DECORATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)@Component\(.*?\)").unwrap());

static CLASS_WRAP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)export default class \w+ extends Vue \{(\n.*)\}\n+</script>").unwrap()
});

static ACCESSOR_DECL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]{2}(?:readonly |public |private )?get (\w+)\(([^)\n]*)\)(?:\s*:\s*([^{\n]+?))? \{$",
    )
    .unwrap()
});

static METHOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^  (?:readonly |public |private )?(async )?(\w+)\(([^)\n]*)\)(?:\s*:\s*([^{\n]+?))? \{$",
    )
    .unwrap()
});

static METHOD_MULTILINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^  (?:readonly |public |private )?(async )?(\w+)\((\n(?:.*\n)+?[ \t]*)\)(?:\s*:\s*([^{\n]+?))? \{$",
    )
    .unwrap()
});

static FIELD_AS_UNKNOWN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ ]*(?:readonly |public |private )?(\w+) = ref<([^>\n]*)>\((.*?)\) as unknown as [^;\n]*;$",
    )
    .unwrap()
});

static THIS_AS_UNKNOWN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ ]*this\.(\w+) = ref<([^>\n]*)>\((.*?)\) as unknown as [^;\n]*;$").unwrap()
});

static OBJECT_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^  (?:readonly |public |private )?(\w+)(?::\s*([\w\[\]<>, |]+?))?\s*=\s*(\{[^;]*\});$",
    )
    .unwrap()
});

static ARRAY_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^  (?:readonly |public |private )?(\w+)(?::\s*([\w\[\]<>, |]+?))?\s*=\s*(\[[^;]*\]);$",
    )
    .unwrap()
});

static FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^  (?:readonly |public |private )?(\w+)(?:: (.*?))? = (.*);$").unwrap()
});

static AS_UNKNOWN_TAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)[ ]*\) as unknown as [^;\n]*;").unwrap());

static SELF_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^  (?:readonly |public |private )?(\w+) = (\w+);$").unwrap()
});

static VMODEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)@VModel\((.*?)\)\s*(?:readonly |public |private )?(\w+)!: ([^;\n]+);").unwrap()
});

static COMPUTED_DECL_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^  const \w+ = computed\(.*\{$").unwrap());

/// Statement keywords that must never be mistaken for a method name.
const STATEMENT_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "catch", "return"];

fn return_annotation(caps: &Captures, index: usize) -> String {
    match caps.get(index) {
        Some(m) if !m.as_str().trim().is_empty() => format!(": {}", m.as_str().trim()),
        _ => String::new(),
    }
}

/// Removes `x = x;` linking lines left over from import re-exports.
pub fn remove_self_links(ctx: &mut RewriteContext) {
    ctx.script = SELF_LINK_RE
        .replace_all(&ctx.script, |caps: &Captures| {
            if caps[1] == caps[2] {
                String::new()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned();
}

/// Records every decorated accessor name and rewrites its usage sites to the
/// `.value` access form. The declarations themselves are converted later by
/// [`apply_member_rules`]; usages must be rewritten first, while the
/// accessor shape is still recognizable.
pub fn rewrite_accessor_usages(ctx: &mut RewriteContext, options: &MigrateOptions) {
    if !options.rules.contains(RuleFlags::ACCESSORS) {
        ctx.note("rule disabled: accessors");
        return;
    }
    let snapshot = ctx.script.clone();
    for caps in ACCESSOR_DECL_RE.captures_iter(&snapshot) {
        let name = caps[1].to_string();
        let usage = Regex::new(&format!(r"this\.{}\b", regex::escape(&name))).unwrap();
        ctx.script = usage
            .replace_all(&ctx.script, regex::NoExpand(&format!("{name}.value")))
            .into_owned();
        if !ctx.computed.contains(&name) {
            ctx.computed.push(name);
        }
    }
}

/// Converts `@VModel` declarations: synthesizes the reserved model property
/// and emit for the configured target version, binds the local name to the
/// two-way accessor helper and removes the declaration span.
pub fn rewrite_vmodel(ctx: &mut RewriteContext, options: &MigrateOptions) {
    if !options.rules.contains(RuleFlags::VMODEL) {
        ctx.note("rule disabled: vmodel");
        return;
    }
    let snapshot = ctx.script.clone();
    for caps in VMODEL_RE.captures_iter(&snapshot) {
        let payload = caps[1].trim();
        let payload = payload
            .strip_prefix('{')
            .and_then(|p| p.strip_suffix('}'))
            .unwrap_or(payload);
        let opts = parse_options(payload);
        let name = caps[2].to_string();
        let prop_type = caps[3].trim().to_string();

        let line = format!("  const {name} = syncModel<{prop_type}>(props, emit);");
        if ctx.has_state(&name) {
            ctx.note(format!("duplicate model binding ignored: {name}"));
        } else {
            ctx.state.push(StateBinding {
                name,
                kind: BindingKind::Signal,
                line,
                sort_order: SortOrder::Inline,
                hoist: true,
            });
        }
        ctx.add_import_once(sync_model_import(options.annotate_imports));

        let reserved = options.target.model_prop_name();
        if ctx.has_prop(reserved) {
            ctx.note(format!("duplicate model prop ignored: {reserved}"));
        } else {
            let mut prop = Property::new(reserved, prop_type);
            prop.required = opts.get("required").map(String::as_str) == Some("true");
            prop.default_value = opts.get("default").cloned();
            ctx.props.insert(0, prop);
        }
        ctx.emits
            .shift_insert(0, options.target.model_event_name().to_string());
    }
    ctx.script = VMODEL_RE.replace_all(&ctx.script, "").into_owned();
}

/// Fixed table of project-global accessor substitutions.
pub fn apply_env_substitutions(ctx: &mut RewriteContext, options: &MigrateOptions) {
    if !options.rules.contains(RuleFlags::ENV) {
        ctx.note("rule disabled: env");
        return;
    }
    if ctx.script.contains("$vuetify") {
        ctx.script = ctx
            .script
            .replace("$vuetify", "getCurrentInstance()?.proxy.$vuetify");
    }
    if ctx.script.contains("$router") {
        ctx.script = ctx.script.replace("$router", "VueRouter");
        ctx.add_import_once("import VueRouter from \"@/modules/router\";\n".to_string());
    }
    if ctx.script.contains("this.globals") {
        ctx.script = ctx.script.replace("this.globals", "globals");
        ctx.add_import_once("import { getGlobals } from \"@/main\";\n".to_string());
        if !ctx.has_state("globals") {
            ctx.state.push(StateBinding {
                name: "globals".to_string(),
                kind: BindingKind::Structure,
                line: "  const globals = getGlobals();".to_string(),
                sort_order: SortOrder::Inline,
                hoist: true,
            });
        }
    }
}

/// The ordered member rule chain: class unwrapping, accessor, field and
/// method conversion, then textual cleanups.
pub fn apply_member_rules(ctx: &mut RewriteContext, options: &MigrateOptions) {
    // Structural rules run unconditionally.
    ctx.script = COMPONENT_DECORATOR_RE.replace(&ctx.script, "").into_owned();
    ctx.script = CLASS_WRAP_RE
        .replace(&ctx.script, "${1}</script>")
        .into_owned();

    if options.rules.contains(RuleFlags::ACCESSORS) {
        ctx.script = ACCESSOR_DECL_RE
            .replace_all(&ctx.script, |caps: &Captures| {
                let ret = return_annotation(caps, 3);
                format!("  const {} = computed(({}){} => {{", &caps[1], &caps[2], ret)
            })
            .into_owned();
    } else {
        ctx.note("rule disabled: accessors");
    }

    if options.rules.contains(RuleFlags::FIELDS) {
        ctx.script = FIELD_AS_UNKNOWN_RE
            .replace_all(&ctx.script, "  ${1}: ${2} = ${3};")
            .into_owned();
        ctx.script = THIS_AS_UNKNOWN_RE
            .replace_all(&ctx.script, "    ${1}.value = ${3};")
            .into_owned();
        ctx.script = OBJECT_FIELD_RE
            .replace_all(&ctx.script, "  const ${1} = reactive<${2}>(${3});")
            .into_owned();
        ctx.script = ARRAY_FIELD_RE
            .replace_all(&ctx.script, "  const ${1} = ref<${2}>(${3});")
            .into_owned();
        ctx.script = FIELD_RE
            .replace_all(&ctx.script, "  const ${1} = ref<${2}>(${3});")
            .into_owned();
        // Collapse the empty type parameter left when no type was inferable.
        ctx.script = ctx.script.replace("ref<>(", "ref(");
        ctx.script = ctx.script.replace("reactive<>(", "reactive(");
    } else {
        ctx.note("rule disabled: fields");
    }

    if options.rules.contains(RuleFlags::METHODS) {
        for re in [&METHOD_RE, &METHOD_MULTILINE_RE] {
            ctx.script = re
                .replace_all(&ctx.script, |caps: &Captures| {
                    let name = &caps[2];
                    if STATEMENT_KEYWORDS.contains(&name) {
                        return caps[0].to_string();
                    }
                    let asyncness = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                    let ret = return_annotation(caps, 4);
                    format!("  const {} = {}({}){} => {{", name, asyncness, &caps[3], ret)
                })
                .into_owned();
        }
    } else {
        ctx.note("rule disabled: methods");
    }

    // Textual cleanups.
    ctx.script = AS_UNKNOWN_TAIL_RE.replace_all(&ctx.script, ");").into_owned();
    ctx.script = ctx.script.replace("$emit(", "emit(");
    ctx.script = ctx.script.replace("\" in this", "\" in props");
}

/// Closes converted `computed` blocks: the first following line whose `}`
/// sits at the member indent becomes `});`.
pub fn close_computed_blocks(ctx: &mut RewriteContext) {
    let mut lines: Vec<String> = ctx.script.split('\n').map(str::to_string).collect();
    for i in 0..lines.len() {
        if !lines[i].contains("computed(") || !COMPUTED_DECL_LINE_RE.is_match(&lines[i]) {
            continue;
        }
        let mut closed = false;
        for y in i + 1..lines.len() {
            if lines[y].find('}') == Some(2) {
                lines[y] = lines[y].replacen('}', "});", 1);
                closed = true;
                break;
            }
        }
        if !closed {
            ctx.note(format!("unterminated computed block at line {}", i + 1));
        }
    }
    ctx.script = lines.join("\n");
}

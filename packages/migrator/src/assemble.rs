//! Output Assembler
//!
//! Rebuilds the script region as fixed ordered sections: header, imports
//! (sorted, with the framework import synthesized last from the set of
//! composition primitives actually used), interfaces (sorted), the
//! defineProps/defineEmits block, the state bindings, the reference
//! declarations, then the residual text in its original relative order.

use indexmap::IndexSet;

use crate::context::RewriteContext;
use crate::document::SCRIPT_CLOSE_TAG;
use crate::model::{Property, RefBinding, StateBinding};
use crate::options::MigrateOptions;

/// Appends lifecycle guard statements immediately before the closing script
/// tag when a creation or mount binding exists.
pub fn insert_lifecycle_guards(ctx: &mut RewriteContext) {
    if ctx.script.contains("const created = ") {
        ctx.script = ctx.script.replacen(
            SCRIPT_CLOSE_TAG,
            "  void created();\n</script>",
            1,
        );
    }
    if ctx.script.contains("const mounted = ") {
        ctx.script = ctx.script.replacen(
            SCRIPT_CLOSE_TAG,
            "  onMounted(() => mounted());\n</script>",
            1,
        );
    }
}

/// Renders a default token for the defaults-wrapper block. `"false"` is
/// omitted, `"true"` and numeric literals are emitted bare, everything else
/// is re-quoted as a string.
fn render_default(token: &str) -> Option<String> {
    match token {
        "false" => None,
        "true" => Some("true".to_string()),
        _ if token.parse::<f64>().is_ok() => Some(token.to_string()),
        _ => Some(format!("'{token}'")),
    }
}

fn build_props_block(props: &[Property]) -> String {
    if props.is_empty() {
        return String::new();
    }
    let mut sorted: Vec<&Property> = props.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut body = String::new();
    for prop in &sorted {
        let optional = if prop.required { "" } else { "?" };
        body.push_str(&format!("  {}{}: {},\n", prop.name, optional, prop.prop_type));
    }
    let mut block = format!("defineProps<{{\n{body}}}>()");

    if sorted.iter().any(|p| p.default_value.is_some()) {
        let defaults: Vec<String> = sorted
            .iter()
            .filter_map(|p| {
                let rendered = render_default(p.default_value.as_deref()?)?;
                Some(format!("  {}: {}", p.name, rendered))
            })
            .collect();
        block = format!("withDefaults({block}, {{\n{}\n}})", defaults.join(",\n"));
    }
    format!("const props = {block};\n")
}

fn build_emits_block(emits: &IndexSet<String>) -> String {
    if emits.is_empty() {
        return String::new();
    }
    let mut names: Vec<&str> = emits.iter().map(String::as_str).collect();
    names.sort_unstable();
    format!("const emit = defineEmits([\"{}\"]);\n", names.join("\", \""))
}

/// Builds the final document from the markup region and the reassembled
/// script region.
pub fn assemble(ctx: &RewriteContext, _options: &MigrateOptions) -> String {
    let mut grouped: Vec<&StateBinding> = ctx.state.iter().filter(|s| s.hoist).collect();
    grouped.sort_by(|a, b| {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.name.cmp(&b.name))
    });
    let state_lines: Vec<&str> = grouped.iter().map(|s| s.line.as_str()).collect();

    let mut ref_bindings: Vec<&RefBinding> = ctx.refs.iter().collect();
    ref_bindings.sort_by(|a, b| a.canonical_name.cmp(&b.canonical_name));
    let ref_lines: Vec<String> = ref_bindings.iter().map(|r| r.declaration()).collect();

    let props_block = build_props_block(&ctx.props);
    let emits_block = build_emits_block(&ctx.emits);

    // Probe text deciding which composition primitives the synthesized
    // framework import must carry.
    let mut probe = String::new();
    probe.push_str(&state_lines.join("\n"));
    probe.push_str(&ref_lines.join("\n"));
    probe.push_str(&ctx.script);

    let mut primitives: Vec<&str> = Vec::new();
    if probe.contains("ref(") || probe.contains("ref<") {
        primitives.push("ref");
    }
    if !ctx.computed.is_empty() || probe.contains("computed(") {
        primitives.push("computed");
    }
    if ctx.props.iter().any(|p| p.default_value.is_some()) {
        primitives.push("withDefaults");
    }
    if probe.contains("watch(") {
        primitives.push("watch");
    }
    if probe.contains("onMounted(") {
        primitives.push("onMounted");
    }
    if probe.contains("reactive(") || probe.contains("reactive<") {
        primitives.push("reactive");
    }

    let mut imports: Vec<String> = ctx
        .imports
        .iter()
        .filter(|i| !i.contains("\"vue\"") && !i.contains("\"vue-property-decorator\""))
        .cloned()
        .collect();
    imports.sort();
    if !primitives.is_empty() {
        imports.insert(
            0,
            format!("import {{ {} }} from \"vue\";\n", primitives.join(", ")),
        );
    }

    let mut interfaces = ctx.interfaces.clone();
    interfaces.sort();

    let mut out = String::new();
    out.push_str("<script setup lang=\"ts\">\n");
    out.push_str("// #region \"imports\"\n");
    for import in &imports {
        out.push_str(import);
    }
    out.push_str("// #endregion\n");

    if !interfaces.is_empty() {
        out.push_str("// #region \"interfaces\"\n");
        out.push_str(&interfaces.join("\n"));
        out.push_str("\n// #endregion\n");
    }

    if !props_block.is_empty() || !emits_block.is_empty() {
        out.push_str("// #region \"defineProps / defineEmits\"\n");
        out.push_str(&props_block);
        out.push_str(&emits_block);
        out.push_str("// #endregion\n");
    }

    if !state_lines.is_empty() || !ref_lines.is_empty() {
        out.push_str("// #region \"const\"\n");
        if !state_lines.is_empty() {
            out.push_str(&state_lines.join("\n"));
            out.push('\n');
        }
        if !ref_lines.is_empty() {
            out.push_str("// $refs:\n");
            out.push_str(&ref_lines.join("\n"));
            out.push('\n');
        }
        out.push_str("// #endregion\n");
    }

    out.push_str(&ctx.script);

    format!("{}{}", ctx.markup, out)
}

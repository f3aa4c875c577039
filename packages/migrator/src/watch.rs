//! Watch Resolution
//!
//! Two sub-passes. The first is a line state machine over the script:
//! a `@Watch("dotted.path")` decorator line switches to collecting, the
//! target is classified by its leading path segment (state binding,
//! property, other) and the line is blanked; consecutive decorator lines
//! accumulate targets. The next non-decorator line must be one of the two
//! permitted handler shapes, and the composed registration is inserted
//! directly above it. Anything else is a fatal pattern mismatch for the
//! document.
//!
//! The second sub-pass rewrites imperative `$watch("a.b", () => {` call
//! sites to the composition form, qualifying the path with `props.` when
//! its leading segment is a known property and thunk-wrapping dotted
//! targets.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::context::RewriteContext;
use crate::error::{MigrateError, Result};
use crate::model::WatchBinding;

static WATCH_DECORATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[ \t]*@Watch\("([\w.]+)"\)$"#).unwrap());

static HANDLER_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"const (\w+) = ").unwrap());

static WATCH_CALL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^([ \t]*)(?:this\.)?\$watch\("([\w.]+)", \(\) => \{$"#).unwrap()
});

const HANDLER_SYNC_SHAPE: &str = " = (): void => {";
const HANDLER_ASYNC_SHAPE: &str = " = async (): Promise<void> => {";

fn handler_name(line: &str) -> Option<String> {
    if !line.contains(HANDLER_SYNC_SHAPE) && !line.contains(HANDLER_ASYNC_SHAPE) {
        return None;
    }
    HANDLER_NAME_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

fn thunk(target: &str) -> String {
    if target.contains('.') {
        format!("() => {target}")
    } else {
        target.to_string()
    }
}

fn compose_statement(binding: &WatchBinding) -> String {
    let mut targets: Vec<String> = Vec::new();
    targets.extend(binding.state_targets.iter().map(|t| thunk(t)));
    targets.extend(
        binding
            .prop_targets
            .iter()
            .map(|t| thunk(&format!("props.{t}"))),
    );
    targets.extend(binding.other_targets.iter().map(|t| thunk(t)));

    let source = if targets.len() > 1 {
        format!("[{}]", targets.join(", "))
    } else {
        targets.join(", ")
    };
    format!(
        "  watch({source}, () => void {}());",
        binding.handler_name
    )
}

/// Runs the decorator state machine over the script.
pub fn resolve_watch_decorators(ctx: &mut RewriteContext) -> Result<()> {
    let lines: Vec<String> = ctx.script.split('\n').map(str::to_string).collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut pending = WatchBinding::default();
    let mut collecting = false;

    for line in lines {
        if line.contains("@Watch") {
            let caps = WATCH_DECORATOR_RE.captures(&line).ok_or_else(|| {
                MigrateError::PatternMismatch {
                    context: "watch decorator",
                    line: line.clone(),
                }
            })?;
            let target = caps[1].to_string();
            let head = target.split('.').next().unwrap_or_default().to_string();
            if ctx.has_state(&head) {
                pending.state_targets.push(target);
            } else if ctx.has_prop(&head) {
                pending.prop_targets.push(target);
            } else {
                pending.other_targets.push(target);
            }
            collecting = true;
            out.push(String::new());
            continue;
        }

        if collecting {
            collecting = false;
            let handler = handler_name(&line).ok_or_else(|| MigrateError::PatternMismatch {
                context: "watch handler",
                line: line.clone(),
            })?;
            pending.handler_name = handler;
            if !pending.is_empty() {
                out.push(compose_statement(&pending));
            }
            ctx.watches.push(std::mem::take(&mut pending));
        }
        out.push(line);
    }
    ctx.script = out.join("\n");
    Ok(())
}

/// Rewrites imperative `$watch` call sites to the composition form.
pub fn rewrite_watch_calls(ctx: &mut RewriteContext) {
    let prop_names: Vec<String> = ctx.props.iter().map(|p| p.name.clone()).collect();
    ctx.script = WATCH_CALL_RE
        .replace_all(&ctx.script, |caps: &Captures| {
            let target = &caps[2];
            let head = target.split('.').next().unwrap_or_default();
            let qualified = if prop_names.iter().any(|p| p == head) {
                format!("props.{target}")
            } else {
                target.to_string()
            };
            format!("{}watch({}, () => {{", &caps[1], thunk(&qualified))
        })
        .into_owned();
}

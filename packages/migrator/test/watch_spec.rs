//! Watch Resolution Tests

mod utils;

use utils::{component, convert};
use vue_migrator::{transform, MigrateError, MigrateOptions};

#[test]
fn decorated_handler_gets_a_registration_above_it() {
    let out = convert(&component(
        "  count = 0;\n\n  @Watch(\"count\")\n  onCountChanged(): void {\n    this.report();\n  }\n",
    ));
    assert!(out.contains(
        "  watch(count, () => void onCountChanged());\n  const onCountChanged = (): void => {"
    ));
    assert!(!out.contains("@Watch"));
}

#[test]
fn stacked_decorators_compose_an_array_source() {
    let out = convert(&component(
        "  count = 0;\n  @Prop({ required: true }) limit!: number;\n\n  @Watch(\"count\")\n  @Watch(\"limit\")\n  onChanged(): void {\n    check();\n  }\n",
    ));
    assert!(out.contains("  watch([count, () => props.limit], () => void onChanged());"));
}

#[test]
fn dotted_unknown_target_is_thunk_wrapped() {
    let out = convert(&component(
        "  @Watch(\"settings.depth\")\n  onSettingsChanged(): void {\n    refresh();\n  }\n",
    ));
    assert!(out.contains("  watch(() => settings.depth, () => void onSettingsChanged());"));
}

#[test]
fn async_handlers_are_accepted() {
    let out = convert(&component(
        "  count = 0;\n\n  @Watch(\"count\")\n  async onCountLoaded(): Promise<void> {\n    await reload();\n  }\n",
    ));
    assert!(out.contains(
        "  watch(count, () => void onCountLoaded());\n  const onCountLoaded = async (): Promise<void> => {"
    ));
}

#[test]
fn malformed_decorator_is_fatal_for_the_document() {
    let err = transform(
        &component("  @Watch(count)\n  onCountChanged(): void {\n    refresh();\n  }\n"),
        &MigrateOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        MigrateError::PatternMismatch {
            context: "watch decorator",
            ..
        }
    ));
}

#[test]
fn decorator_not_followed_by_a_handler_is_fatal() {
    let err = transform(
        &component("  count = 0;\n\n  @Watch(\"count\")\n\n  onCountChanged(): void {\n  }\n"),
        &MigrateOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        MigrateError::PatternMismatch {
            context: "watch handler",
            ..
        }
    ));
}

#[test]
fn imperative_watch_calls_take_the_composition_form() {
    let out = convert(&component(
        "  @Prop({ required: true }) user!: User;\n\n  setup(): void {\n    this.$watch(\"user.name\", () => {\n      refresh();\n    });\n  }\n",
    ));
    assert!(out.contains("    watch(() => props.user.name, () => {"));
}

#[test]
fn imperative_watch_on_an_unknown_name_stays_bare() {
    let out = convert(&component(
        "  setup(): void {\n    this.$watch(\"mode\", () => {\n      refresh();\n    });\n  }\n",
    ));
    assert!(out.contains("    watch(mode, () => {"));
}

//! Property Extraction Tests

mod utils;

use utils::{component, convert};
use vue_migrator::{transform_with_report, MigrateOptions};

#[test]
fn required_prop_with_string_default() {
    let out = convert(&component(
        "  @Prop({ required: true, default: \"John\" }) name!: string;\n",
    ));
    assert!(out.contains(
        "const props = withDefaults(defineProps<{\n  name: string,\n}>(), {\n  name: 'John'\n});"
    ));
    assert!(out.contains("import { withDefaults } from \"vue\";"));
}

#[test]
fn bare_constructor_prop_is_optional_without_defaults() {
    let out = convert(&component("  @Prop(Number) count!: number;\n"));
    assert!(out.contains("const props = defineProps<{\n  count?: number,\n}>();"));
    assert!(!out.contains("withDefaults"));
}

#[test]
fn numeric_default_is_emitted_bare() {
    let out = convert(&component("  @Prop({ default: 5 }) depth!: number;\n"));
    assert!(out.contains(
        "const props = withDefaults(defineProps<{\n  depth?: number,\n}>(), {\n  depth: 5\n});"
    ));
}

#[test]
fn boolean_defaults_keep_true_and_omit_false() {
    let out = convert(&component(
        "  @Prop({ default: true }) visible!: boolean;\n  @Prop({ default: false }) dense!: boolean;\n",
    ));
    assert!(out.contains(
        "withDefaults(defineProps<{\n  dense?: boolean,\n  visible?: boolean,\n}>(), {\n  visible: true\n})"
    ));
    assert!(!out.contains("dense:"));
}

#[test]
fn declarations_are_sorted_alphabetically() {
    let out = convert(&component(
        "  @Prop(Number) zoom!: number;\n  @Prop(String) anchor!: string;\n",
    ));
    assert!(out.contains("const props = defineProps<{\n  anchor?: string,\n  zoom?: number,\n}>();"));
}

#[test]
fn synced_prop_declares_attribute_and_binds_the_field() {
    let out = convert(&component(
        "  @PropSync(\"enabled\", { required: true }) syncedEnabled!: boolean;\n",
    ));
    assert!(out.contains("const props = defineProps<{\n  enabled: boolean,\n}>();"));
    assert!(out.contains("const emit = defineEmits([\"update:enabled\"]);"));
    assert!(out.contains("  const syncedEnabled = syncModel<boolean>(props, emit, 'enabled');"));
    assert!(out.contains(
        "import { syncModel } from '@/modules/modelWrapper'; // take a look at modelwrapper.txt"
    ));
}

#[test]
fn accessor_helper_import_is_registered_once() {
    let out = convert(&component(
        "  @PropSync(\"one\", { required: true }) syncedOne!: string;\n  @PropSync(\"two\", { required: true }) syncedTwo!: string;\n",
    ));
    assert_eq!(out.matches("modelWrapper").count(), 1);
    assert!(out.contains("const emit = defineEmits([\"update:one\", \"update:two\"]);"));
}

#[test]
fn private_visibility_is_accepted_on_prop_fields() {
    let out = convert(&component(
        "  @Prop(Number) private size!: number;\n  @Prop({ required: true }) private name!: string;\n",
    ));
    assert!(out.contains("const props = defineProps<{\n  name: string,\n  size?: number,\n}>();"));
    assert!(!out.contains("private "));
}

#[test]
fn synced_field_references_resolve_through_the_state_binding() {
    let out = convert(&component(
        "  @PropSync(\"enabled\", { required: true }) syncedEnabled!: boolean;\n\n  flip(): void {\n    this.syncedEnabled = !this.syncedEnabled;\n  }\n",
    ));
    assert!(out.contains("    syncedEnabled.value = !syncedEnabled.value;"));
}

#[test]
fn duplicate_prop_names_are_reported_and_ignored() {
    let (out, log) = transform_with_report(
        &component("  @Prop(Number) size!: number;\n  @Prop(String) size!: string;\n"),
        &MigrateOptions::default(),
    )
    .unwrap();
    assert_eq!(out.matches("size?: number,").count(), 1);
    assert!(log.iter().any(|l| l == "duplicate prop ignored: size"));
}

#[test]
fn multiline_options_payload_is_understood() {
    let out = convert(&component(
        "  @Prop({\n    required: true,\n    default: \"x\",\n  })\n  mark!: string;\n",
    ));
    assert!(out.contains(
        "const props = withDefaults(defineProps<{\n  mark: string,\n}>(), {\n  mark: 'x'\n});"
    ));
}

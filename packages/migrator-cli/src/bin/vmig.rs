/**
 * Vue Migrator CLI - vmig
 *
 * Converts Vue 2 class-component files to Vue 3 <script setup lang="ts">.
 */
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process;

use vue_migrator::RuleFlags;
use vue_migrator_cli::{perform_migrate, project};

fn main() {
    let matches = Command::new("vmig")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Vue class-component to script-setup migrator (Rust implementation)")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("DIR")
                .help("Directory holding the component files to convert"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Destination directory; file names are preserved"),
        )
        .arg(
            Arg::new("target")
                .short('t')
                .long("target")
                .value_name("VERSION")
                .help("Target framework version: 2 or 3"),
        )
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .value_name("PATH")
                .help("Path to vmig.json"),
        )
        .arg(
            Arg::new("no-group")
                .long("no-group")
                .action(ArgAction::SetTrue)
                .help("Leave converted state declarations inline"),
        )
        .arg(
            Arg::new("no-annotate")
                .long("no-annotate")
                .action(ArgAction::SetTrue)
                .help("Omit explanatory comments on synthesized imports"),
        )
        .arg(
            Arg::new("no-env")
                .long("no-env")
                .action(ArgAction::SetTrue)
                .help("Skip project-specific global accessor substitutions"),
        )
        .get_matches();

    let project_file = match matches.get_one::<String>("project") {
        Some(path) => match project::load(PathBuf::from(path).as_path()) {
            Ok(file) => file,
            Err(err) => {
                eprintln!("Error: {err:#}");
                process::exit(1);
            }
        },
        None => {
            // Pick up vmig.json from the working directory when present.
            let default = PathBuf::from("vmig.json");
            if default.exists() {
                match project::load(&default) {
                    Ok(file) => file,
                    Err(err) => {
                        eprintln!("Error: {err:#}");
                        process::exit(1);
                    }
                }
            } else {
                project::ProjectFile::default()
            }
        }
    };

    let mut options = match project_file.to_options() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    };

    // Command-line flags win over project file values.
    if let Some(target) = matches.get_one::<String>("target") {
        match project::parse_target(target) {
            Ok(target) => options.target = target,
            Err(err) => {
                eprintln!("Error: {err:#}");
                process::exit(1);
            }
        }
    }
    if matches.get_flag("no-group") {
        options.group_state = false;
    }
    if matches.get_flag("no-annotate") {
        options.annotate_imports = false;
    }
    if matches.get_flag("no-env") {
        options.rules.remove(RuleFlags::ENV);
    }

    let input = matches
        .get_one::<String>("input")
        .cloned()
        .or_else(|| project_file.input.clone());
    let output = matches
        .get_one::<String>("output")
        .cloned()
        .or_else(|| project_file.output.clone());
    let (input, output) = match (input, output) {
        (Some(input), Some(output)) => (PathBuf::from(input), PathBuf::from(output)),
        _ => {
            eprintln!("Error: --input and --output are required (directly or via vmig.json)");
            process::exit(1);
        }
    };

    println!("Starting conversion");
    let summary = match perform_migrate::perform_migration(
        &input,
        &output,
        &project_file.include,
        &options,
    ) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    };
    println!(
        "Finished: {} converted, {} failed",
        summary.converted.len(),
        summary.failed.len()
    );
    if summary.has_failures() {
        process::exit(1);
    }
}

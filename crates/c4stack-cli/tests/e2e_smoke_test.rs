use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use c4stack_cli::{Args, run};
use c4stack_parser::check_well_formed;

/// Demo directories live at the workspace root, not inside the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects the immediate subdirectories of a directory
fn collect_dirs(dir: PathBuf) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    dirs.sort();
    dirs
}

fn args_for(input: &Path, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        title: None,
        css_only: false,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos: Vec<_> = collect_dirs(demos_path())
        .into_iter()
        .filter(|path| path.file_name().is_some_and(|name| name != "errors"))
        .collect();

    assert!(!valid_demos.is_empty(), "No demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.svg", demo_path.file_name().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(demo_path, output_path.clone())) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output was not written");
                if let Err(err) = check_well_formed(&svg) {
                    failed_demos.push((demo_path.clone(), err.to_string()));
                }
            }
            Err(e) => failed_demos.push((demo_path.clone(), e.to_string())),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_dirs(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_name().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(demo_path, output_path.clone())).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(
            !output_path.exists(),
            "Output written for failing demo {}",
            demo_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_overrides_apply() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("shop.svg");

    let mut args = args_for(&demos_path().join("shop"), output_path.clone());
    args.title = Some("Shop & Co".to_string());
    args.css_only = true;

    run(&args).expect("Failed to stack shop demo");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("<title>Shop &amp; Co</title>"));
    assert!(!svg.contains("<script"));
    assert_eq!(svg.matches(r#"id="nav-"#).count(), 4);
}

#[test]
fn e2e_partial_demo_has_placeholders() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("partial.svg");

    run(&args_for(&demos_path().join("partial"), output_path.clone()))
        .expect("Failed to stack partial demo");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("Container diagram not found"));
    assert!(svg.contains("Code diagram not found"));
    assert!(svg.contains("const availableLevels = ['context', 'component'];"));
}

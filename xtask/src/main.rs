//! Custom cargo commands for the totalmap crate.
//!
//! Usage:
//!   cargo xtask verify         - Run full verification suite
//!   cargo xtask test           - Run tests across feature combinations
//!   cargo xtask check          - Quick check (default features only)
//!   cargo xtask bench          - Run benchmarks
//!   cargo xtask fuzz <target>  - Run a cargo-fuzz target (nightly)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Feature sets every change must build and test under.
///
/// Doctests assume the default features, so the bare build skips them.
const FEATURE_MATRIX: &[&[&str]] = &[
    &["--no-default-features", "--lib", "--tests"],
    &[],
    &["--all-features"],
];

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["checked_decode", "partial_mapping"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify           Run full verification suite (markers + feature matrix + clippy)
  test             Run all Rust tests under every feature set
  check            Quick check (cargo test + clippy, default features)
  bench            Run benchmarks
  fuzz <target>    Run a fuzz target for 60s (targets: {})
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("totalmap Verification Suite");
    println!("==========================================\n");

    // Step 1: Check contract markers
    println!("[1/3] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    // Step 2: Run tests
    println!("[2/3] Running Rust tests across features...");
    test()?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/3] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-features", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests under each feature set
fn test() -> Result<()> {
    for features in FEATURE_MATRIX {
        let mut args = vec!["test", "--workspace", "--quiet"];
        args.extend_from_slice(features);
        run_cargo(&args)?;
    }
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--workspace"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run one fuzz target
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("usage: cargo xtask fuzz <{}>", FUZZ_TARGETS.join("|"));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target '{}'", target);
    }

    let root = project_root()?;
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target '{}' failed", target);
    }

    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read src/contracts.rs")?;

    let count = contracts.matches("Contract violation:").count();

    if count < 4 {
        bail!(
            "Expected at least 4 contract assertions, found {}. Someone may have removed invariant checks!",
            count
        );
    }

    Ok(())
}

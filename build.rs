//! Build script for prshame - embeds version information.
//!
//! `BUILD_INFO_HUMAN` is `{CARGO_PKG_VERSION} ({git}) {rustc --version}`,
//! where `{git}` is `git describe --tags --always --dirty` when tags exist,
//! or `v{version}-{timestamp}-{commit}[+dirty]` when they don't. Parts that
//! cannot be determined are left out.

use std::{env, process::Command};

use chrono::Utc;

fn main() {
    ["src", "build.rs", "Cargo.toml", "Cargo.lock"]
        .iter()
        .for_each(|path| println!("cargo:rerun-if-changed={path}"));

    println!("cargo:rustc-env=BUILD_INFO_HUMAN={}", build_info());
}

fn run(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn git_version() -> Option<String> {
    let described = run("git", &["describe", "--tags", "--always", "--dirty"])?;
    if described.contains('v') || described.contains("-g") {
        return Some(described);
    }

    // No tags: `describe` gave us a bare hash.
    let commit = run("git", &["rev-parse", "--short=12", "HEAD"])?;
    let dirty = described.ends_with("-dirty");
    let timestamp = if dirty {
        Utc::now()
    } else {
        run("git", &["log", "-1", "--format=%ct"])
            .and_then(|s| s.parse::<i64>().ok())
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
            .unwrap_or_else(Utc::now)
    };

    Some(format!(
        "v{}-{}-{}{}",
        env!("CARGO_PKG_VERSION"),
        timestamp.format("%Y%m%d%H%M%S"),
        commit,
        if dirty { "+dirty" } else { "" }
    ))
}

fn build_info() -> String {
    [
        Some(env::var("CARGO_PKG_VERSION").unwrap_or_default()),
        git_version().map(|v| format!("({v})")),
        run("rustc", &["--version"]),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

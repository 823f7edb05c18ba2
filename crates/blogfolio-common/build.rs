use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8(out.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    let pkg = env!("CARGO_PKG_VERSION");
    // Crate version with the short commit as build metadata, e.g. `0.1.0+3f2a9c1`.
    let version = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(rev) => format!("{}+{}", pkg, rev),
        None => pkg.to_string(),
    };

    println!("cargo:rustc-env=BLOGFOLIO_VERSION={}", version);
    println!("cargo:rerun-if-changed=../../.git/HEAD");
}

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    // Container builds have no .git, they pass the hash in instead.
    let hash = std::env::var("PORTFOLIO_BUILD_HASH")
        .ok()
        .filter(|h| !h.is_empty())
        .or_else(|| git(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string());

    let dirty = git(&["status", "--porcelain"]).is_some_and(|s| !s.is_empty());
    let hash = if dirty { format!("{}-dirty", hash) } else { hash };

    println!("cargo:rustc-env=GIT_HASH={}", hash);

    println!("cargo:rerun-if-env-changed=PORTFOLIO_BUILD_HASH");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}

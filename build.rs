use std::path::Path;
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
    // Rebuild when HEAD or the refs move so `--version` stays accurate.
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        let git_path = Path::new(&git_dir);
        for watched in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            if git_path.join(watched).exists() {
                println!("cargo:rerun-if-changed={git_dir}/{watched}");
            }
        }
    }

    if let Some(git_info) = git(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={git_info}");
    }
}

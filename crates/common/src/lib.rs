use std::path::{Path, PathBuf};

/// Gets the absolute path to the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent() // crates/
        .and_then(Path::parent) // workspace root
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

/// Gets the absolute path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    workspace_root().join("tests/fixtures")
}

/// Only use this for exercising configuration error handling.
pub fn malformed_fixtures_dir() -> PathBuf {
    workspace_root().join("tests/malformed_fixtures")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_live_under_the_workspace_root() {
        assert!(fixtures_dir().starts_with(workspace_root()));
        assert!(workspace_root().join("Cargo.toml").exists());
    }
}

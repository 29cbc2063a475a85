use std::path::{Path, PathBuf};

/// Resolved project root plus the four artifact paths every check targets.
pub struct LintConfig {
    pub root_dir: PathBuf,
    pub dockerfile: PathBuf,
    pub compose_file: PathBuf,
    pub env_example: PathBuf,
    pub gitignore: PathBuf,
}

impl LintConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            dockerfile: root.join("Dockerfile"),
            compose_file: root.join("docker-compose.yml"),
            env_example: root.join(".env.example"),
            gitignore: root.join(".gitignore"),
        }
    }

    /// Walk up from the current directory until a `.git` entry marks the
    /// project root.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        while !dir.join(".git").exists() {
            if !dir.pop() {
                return None;
            }
        }
        Some(Self::from_root(&dir))
    }
}

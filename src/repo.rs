use std::path::PathBuf;
use std::process::Command;

use log::info;
use tempfile::TempDir;

use crate::error::JsxmapError;

/// A repository checkout in a temporary directory, removed on drop.
pub struct ClonedRepo {
    dir: TempDir,
    name: String,
}

impl ClonedRepo {
    /// Root of the checked-out working tree.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join(&self.name)
    }
}

/// Derive a project directory name from a repository URL: the final path
/// segment with a trailing `.git` stripped.
pub fn project_name(url: &str) -> String {
    let tail = url.trim_end_matches('/').rsplit('/').next().unwrap_or(url);
    tail.trim_end_matches(".git").to_string()
}

/// Clone `url` into a fresh temporary directory.
///
/// The checkout disappears with the returned handle, so a failed scan never
/// leaves a stray working tree behind.
pub fn clone_repository(url: &str) -> Result<ClonedRepo, JsxmapError> {
    let dir = TempDir::new().map_err(|e| JsxmapError::Io {
        path: "tempdir".to_string(),
        source: e,
    })?;
    let name = project_name(url);

    let output = Command::new("git")
        .args(["clone", "--depth", "1", url, &name])
        .current_dir(dir.path())
        .output()
        .map_err(|e| JsxmapError::Io {
            path: url.to_string(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(JsxmapError::CloneFailed {
            url: url.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    info!("cloned {url} into {}", dir.path().join(&name).display());
    Ok(ClonedRepo { dir, name })
}

/// Targets with a URL scheme or scp-style prefix are remote repositories.
pub fn is_remote(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://") || target.starts_with("git@")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_name_strips_git_suffix() {
        assert_eq!(
            project_name("https://github.com/jgudo/ecommerce-react.git"),
            "ecommerce-react"
        );
    }

    #[test]
    fn project_name_without_suffix() {
        assert_eq!(
            project_name("https://github.com/jgudo/ecommerce-react"),
            "ecommerce-react"
        );
    }

    #[test]
    fn project_name_tolerates_trailing_slash() {
        assert_eq!(project_name("https://example.com/apps/shop/"), "shop");
    }

    #[test]
    fn remote_detection() {
        assert!(is_remote("https://github.com/a/b"));
        assert!(is_remote("http://example.com/a/b.git"));
        assert!(is_remote("git@github.com:a/b.git"));
        assert!(!is_remote("./local/checkout"));
        assert!(!is_remote("/abs/path"));
    }
}

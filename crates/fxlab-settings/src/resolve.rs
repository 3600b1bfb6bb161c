//! Resolution of bundled resource names to on-disk paths.
//!
//! Built-in images and fonts are referenced by relative names such as
//! `builtin/images/checkerboard.png`. Where those files actually live
//! depends on how the application was installed, so the settings layer
//! asks an injected [`ResourceResolver`] instead of guessing.

use std::path::{Path, PathBuf};

/// Maps a bundled resource name to an absolute path.
pub trait ResourceResolver {
    /// Resolves `relative` against the application's resource location.
    fn resolve(&self, relative: &str) -> PathBuf;
}

/// Resolver rooted at a fixed data directory.
#[derive(Debug, Clone)]
pub struct DataDirResolver {
    root: PathBuf,
}

impl DataDirResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory names are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceResolver for DataDirResolver {
    fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_names_onto_the_root() {
        let resolver = DataDirResolver::new("/usr/share/fxlab");
        assert_eq!(
            resolver.resolve("builtin/images/checkerboard.png"),
            PathBuf::from("/usr/share/fxlab/builtin/images/checkerboard.png")
        );
    }

    #[test]
    fn root_is_exposed() {
        let resolver = DataDirResolver::new("/opt/fxlab/data");
        assert_eq!(resolver.root(), Path::new("/opt/fxlab/data"));
    }
}

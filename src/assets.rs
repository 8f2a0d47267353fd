//! Shader text loading.
//!
//! Shaders live as WGSL files next to the binary and load in one batch
//! before any GPU setup. The batch is all-or-nothing: the first unreadable
//! file fails the whole load and initialization aborts. Partial success is
//! never exposed.

use crate::error::AssetError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// On-disk path of the lit mesh shader.
pub const MESH_SHADER: &str = "shaders/mesh.wgsl";
/// On-disk path of the point billboard shader.
pub const POINT_SHADER: &str = "shaders/points.wgsl";
/// On-disk path of the sun-halo shader.
pub const HALO_SHADER: &str = "shaders/halo.wgsl";
/// On-disk path of the bloom composite shader.
pub const BLOOM_SHADER: &str = "shaders/bloom.wgsl";

/// Loaded shader texts, keyed by the path they were requested under.
#[derive(Debug, Default)]
pub struct ShaderCatalog {
    texts: HashMap<PathBuf, String>,
}

impl ShaderCatalog {
    /// Load every path in the batch, or fail on the first error.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, AssetError> {
        let mut texts = HashMap::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let text = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            texts.insert(path.to_path_buf(), text);
        }
        info!(count = texts.len(), "shader catalog loaded");
        Ok(Self { texts })
    }

    /// Fetch a shader text, failing if the batch never contained it.
    pub fn require(&self, path: &str) -> Result<&str, AssetError> {
        self.texts
            .get(Path::new(path))
            .map(String::as_str)
            .ok_or_else(|| AssetError::Missing(PathBuf::from(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct TempShaderDir(PathBuf);

    impl TempShaderDir {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("stardrift-shaders-{tag}"));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn write(&self, name: &str, text: &str) -> PathBuf {
            let path = self.0.join(name);
            fs::write(&path, text).unwrap();
            path
        }
    }

    impl Drop for TempShaderDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn loads_a_full_batch() {
        let dir = TempShaderDir::new("full");
        let a = dir.write("a.wgsl", "// a");
        let b = dir.write("b.wgsl", "// b");

        let catalog = ShaderCatalog::load(&[&a, &b]).unwrap();
        assert_eq!(catalog.require(a.to_str().unwrap()).unwrap(), "// a");
        assert_eq!(catalog.require(b.to_str().unwrap()).unwrap(), "// b");
    }

    #[test]
    fn one_missing_file_fails_the_whole_batch() {
        let dir = TempShaderDir::new("partial");
        let good = dir.write("good.wgsl", "// ok");
        let missing = dir.0.join("missing.wgsl");

        let result = ShaderCatalog::load(&[good, missing.clone()]);
        match result {
            Err(AssetError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn require_rejects_unknown_paths() {
        let catalog = ShaderCatalog::default();
        assert!(matches!(
            catalog.require("never/loaded.wgsl"),
            Err(AssetError::Missing(_))
        ));
    }
}

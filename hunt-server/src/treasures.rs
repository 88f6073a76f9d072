//! Filesystem treasure loader: numeric-prefix lookup in the treasure
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use hunt_core::{Category, LoadError, Resource, TreasureLoader};

pub struct FsTreasureLoader {
    dir: PathBuf,
}

impl FsTreasureLoader {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The file backing treasure `index` is the directory entry whose name
    /// starts with the decimal prefix `index + 1`; the extension varies.
    fn find_by_prefix(&self, index: usize) -> Result<PathBuf, LoadError> {
        let prefix = (index + 1).to_string();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.starts_with('.') {
                continue;
            }
            if name.starts_with(&prefix) {
                return Ok(entry.path());
            }
        }
        Err(LoadError::NotFound(index))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

impl TreasureLoader for FsTreasureLoader {
    fn resolve(&self, index: usize) -> Result<Resource, LoadError> {
        let path = self.find_by_prefix(index)?;
        let name = display_name(&path);
        if !fs::metadata(&path)?.is_file() {
            return Err(LoadError::NotRegular(name));
        }
        let category = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Category::from_extension)
            .ok_or_else(|| LoadError::UnsupportedKind(name.clone()))?;
        let bytes = fs::read(&path)?;
        Ok(Resource::new(category, name, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("hunt-{}-{}", tag, std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            TempDir(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn resolves_by_prefix_and_extension() {
        let tmp = TempDir::new("resolve");
        fs::write(tmp.0.join("1-welcome.txt"), b"hi there").unwrap();
        fs::write(tmp.0.join("2.jpg"), [0xFFu8, 0xD8]).unwrap();

        let loader = FsTreasureLoader::new(tmp.0.clone());
        let first = loader.resolve(0).unwrap();
        assert_eq!(first.category, Category::Text);
        assert_eq!(first.display_name, "1-welcome.txt");
        assert_eq!(first.bytes(), b"hi there");

        let second = loader.resolve(1).unwrap();
        assert_eq!(second.category, Category::Image);
        assert_eq!(second.byte_len(), 2);
    }

    #[test]
    fn missing_prefix_is_not_found() {
        let tmp = TempDir::new("missing");
        fs::write(tmp.0.join("1.txt"), b"x").unwrap();
        let loader = FsTreasureLoader::new(tmp.0.clone());
        assert!(matches!(loader.resolve(4), Err(LoadError::NotFound(4))));
    }

    #[test]
    fn unexpected_extension_is_rejected() {
        let tmp = TempDir::new("kind");
        fs::write(tmp.0.join("3.gif"), b"GIF89a").unwrap();
        let loader = FsTreasureLoader::new(tmp.0.clone());
        assert!(matches!(
            loader.resolve(2),
            Err(LoadError::UnsupportedKind(_))
        ));
    }

    #[test]
    fn dotfiles_are_ignored() {
        let tmp = TempDir::new("dot");
        fs::write(tmp.0.join(".1.txt"), b"hidden").unwrap();
        let loader = FsTreasureLoader::new(tmp.0.clone());
        assert!(matches!(loader.resolve(0), Err(LoadError::NotFound(0))));
    }
}

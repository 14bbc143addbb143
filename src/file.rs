// src/file.rs

use std::{fs, path::Path};

use crate::error::{Error, Result};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Ensure parent dir exists (no-op for bare filenames).
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_in_the_way_is_an_error() {
        let root = std::env::temp_dir().join("plunder_cards_file_in_the_way");
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        let blocker = root.join("card_images");
        fs::write(&blocker, b"not a dir").unwrap();
        assert!(ensure_directory(&blocker).is_err());
        assert!(ensure_parent(&root.join("nested/deeper/x.json")).is_ok());
        assert!(root.join("nested/deeper").is_dir());
        assert!(ensure_parent(Path::new("bare.json")).is_ok());
    }
}

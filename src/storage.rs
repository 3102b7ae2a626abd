/// Storage port
///
/// All disk effects go through the `ImageStore` trait: scanning the
/// working folder at startup, opening picked files, mirroring loaded
/// files into the working folder, and deleting them again. The controller
/// only ever talks to this trait, so it can be driven without a disk.
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{AppError, Result};

/// File extensions the working folder scan picks up
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub trait ImageStore {
    /// Decode every readable image already in the working folder.
    /// Unreadable files are skipped.
    fn scan(&self) -> Vec<(PathBuf, DynamicImage)>;

    /// Decode a single image from anywhere on disk
    fn open(&self, path: &Path) -> Result<DynamicImage>;

    /// Save `image` into the working folder under the file name of `source`
    /// (re-encoded as PNG unless it is already PNG/JPEG) and return the path
    /// it now lives at
    fn mirror(&self, source: &Path, image: &DynamicImage) -> Result<PathBuf>;

    /// Delete a file from the working folder
    fn remove(&self, path: &Path) -> Result<()>;
}

/// True if `path` has one of the supported image extensions
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Working folder path for a mirrored copy of `source`
///
/// Formats the scan does not pick up are renamed to `.png`, so every
/// mirrored file is found again on the next start.
pub fn mirror_target(root: &Path, source: &Path) -> Result<PathBuf> {
    let filename = source
        .file_name()
        .ok_or_else(|| AppError::NotAFile(source.to_path_buf()))?;

    if is_image_file(source) {
        return Ok(root.join(filename));
    }

    let mut name = Path::new(filename).file_stem().unwrap_or(filename).to_os_string();
    name.push(".png");
    Ok(root.join(name))
}

/// `ImageStore` backed by a directory on disk
#[derive(Debug, Clone)]
pub struct FolderStore {
    root: PathBuf,
}

impl FolderStore {
    /// Open (and create if needed) the working folder at `root`
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| AppError::Io {
            path: root.clone(),
            source,
        })?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True if `path` already lives directly in the working folder
    fn is_inside(&self, path: &Path) -> bool {
        let canonical = |p: &Path| p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
        path.parent()
            .is_some_and(|parent| canonical(parent) == canonical(&self.root))
    }
}

impl ImageStore for FolderStore {
    fn scan(&self) -> Vec<(PathBuf, DynamicImage)> {
        let mut found = Vec::new();

        for entry in WalkDir::new(&self.root)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_image_file(path) {
                continue;
            }

            match image::open(path) {
                Ok(image) => found.push((path.to_path_buf(), image)),
                Err(e) => log::debug!("Skipping unreadable {}: {}", path.display(), e),
            }
        }

        log::info!("🔍 Found {} images in {}", found.len(), self.root.display());
        found
    }

    fn open(&self, path: &Path) -> Result<DynamicImage> {
        image::open(path).map_err(|source| AppError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    fn mirror(&self, source: &Path, image: &DynamicImage) -> Result<PathBuf> {
        if self.is_inside(source) && is_image_file(source) {
            return Ok(source.to_path_buf());
        }

        let target = mirror_target(&self.root, source)?;
        image.save(&target).map_err(|e| AppError::Save {
            path: target.clone(),
            source: e,
        })?;

        log::debug!("Mirrored {} -> {}", source.display(), target.display());
        Ok(target)
    }

    fn remove(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
pub mod memory {
    //! In-memory `ImageStore` for driving the controller in tests

    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub root: PathBuf,
        /// Files "on disk", including ones outside the working folder
        pub files: RefCell<BTreeMap<PathBuf, DynamicImage>>,
        /// Paths passed to `remove`, in call order
        pub removed: RefCell<Vec<PathBuf>>,
        /// When set, `remove` fails with a permission error
        pub fail_removal: bool,
    }

    impl MemoryStore {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self {
                root: root.into(),
                ..Self::default()
            }
        }

        pub fn add_file(&self, path: impl Into<PathBuf>, image: DynamicImage) {
            self.files.borrow_mut().insert(path.into(), image);
        }

        pub fn has_file(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }
    }

    impl ImageStore for MemoryStore {
        fn scan(&self) -> Vec<(PathBuf, DynamicImage)> {
            self.files
                .borrow()
                .iter()
                .filter(|(path, _)| path.parent() == Some(self.root.as_path()))
                .map(|(path, image)| (path.clone(), image.clone()))
                .collect()
        }

        fn open(&self, path: &Path) -> Result<DynamicImage> {
            self.files.borrow().get(path).cloned().ok_or_else(|| AppError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }

        fn mirror(&self, source: &Path, image: &DynamicImage) -> Result<PathBuf> {
            let target = mirror_target(&self.root, source)?;
            self.add_file(target.clone(), image.clone());
            Ok(target)
        }

        fn remove(&self, path: &Path) -> Result<()> {
            self.removed.borrow_mut().push(path.to_path_buf());
            if self.fail_removal {
                return Err(AppError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                });
            }
            self.files.borrow_mut().remove(path);
            Ok(())
        }
    }
}

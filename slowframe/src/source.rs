//! Where the pictures come from.
//!
//! The image directory is read from settings once at startup. If nothing
//! usable is configured the user is asked for a folder. The directory is
//! then listed once; there is no watching for new files.

use log::{info, warn};
use slowcore::storage::SettingsStore;
use std::path::{Path, PathBuf};

/// Settings key holding the image directory.
pub const IMAGE_DIR_KEY: &str = "media/imageDir";

/// Folder under the home directory used when nothing is configured.
pub const DEFAULT_SUBDIR: &str = "images";

/// Matched literally against the file extension, case-sensitive.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Blocking "choose a folder" prompt.
pub trait DirectoryPicker {
    fn pick_directory(&mut self) -> Option<PathBuf>;
}

/// The platform's native folder dialog. Modal: blocks the UI thread
/// until the user answers.
pub struct NativePicker;

impl DirectoryPicker for NativePicker {
    fn pick_directory(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select Image Directory")
            .pick_folder()
    }
}

/// Work out which directory to show.
///
/// The stored value wins; without one the default is `<home>/images`.
/// Only when that still comes out empty is the user prompted. A picked
/// folder is persisted; a cancelled prompt leaves the setting untouched
/// and yields an empty path.
pub fn resolve_image_dir<S, P>(store: &mut S, picker: &mut P, home: Option<&Path>) -> PathBuf
where
    S: SettingsStore + ?Sized,
    P: DirectoryPicker + ?Sized,
{
    let configured = store.get(IMAGE_DIR_KEY).unwrap_or_else(|| {
        home.map(|h| h.join(DEFAULT_SUBDIR).to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    if !configured.is_empty() {
        return PathBuf::from(configured);
    }

    match picker.pick_directory() {
        Some(dir) => {
            if let Err(e) = store.set(IMAGE_DIR_KEY, &dir.to_string_lossy()) {
                warn!("could not save image directory: {}", e);
            }
            dir
        }
        None => {
            info!("no image directory chosen");
            PathBuf::new()
        }
    }
}

/// Whether `path` carries one of the accepted extensions.
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// List the non-hidden images directly inside `dir`, as absolute paths, in
/// the order the filesystem returns them. A missing directory gives an
/// empty list.
pub fn scan_images(dir: &Path) -> Vec<PathBuf> {
    if dir.as_os_str().is_empty() || !dir.is_dir() {
        warn!("the directory does not exist: {:?}", dir);
        return Vec::new();
    }

    let dir = std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("could not list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    entries
        .filter_map(|e| e.ok())
        // Skip hidden files (macOS leaves `._name.jpg` resource forks around)
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_image(p))
        .collect()
}

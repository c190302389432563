use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::naming::snake_case;

/// Extension of the source files the extension reacts to.
pub const WATCHED_EXTENSION: &str = "svelte";

/// Extension of the conventional companion files.
pub const COMPANION_EXTENSION: &str = "svg";

/// Directory, sibling to a source file, that holds its companion.
pub const COMPANION_DIR: &str = "svgs";

/// Check whether a path names a watched source file based on its extension.
pub fn is_watched_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(WATCHED_EXTENSION))
        .unwrap_or(false)
}

/// Check whether a file sits in the conventional icon location: its parent
/// directory must be literally `icons` and its grandparent `src`.
pub fn in_icons_dir(path: &Path) -> bool {
    let mut ancestors = path.components().rev().map(|c| c.as_os_str()).skip(1);
    ancestors.next() == Some(OsStr::new("icons")) && ancestors.next() == Some(OsStr::new("src"))
}

/// Resolve the conventional companion file for a source file: a sibling
/// `svgs/` directory containing `<snake_case_stem>.svg`. Returns `None`
/// when the source path has no usable stem or parent. Existence is the
/// caller's concern.
pub fn companion_svg_path(source: &Path) -> Option<PathBuf> {
    let stem = source.file_stem()?.to_str()?;
    let parent = source.parent()?;
    Some(parent.join(COMPANION_DIR).join(format!(
        "{}.{}",
        snake_case(stem),
        COMPANION_EXTENSION
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watched_extension_is_case_insensitive() {
        assert!(is_watched_file(Path::new("/p/src/icons/Home.svelte")));
        assert!(is_watched_file(Path::new("/p/src/icons/Home.SVELTE")));
        assert!(!is_watched_file(Path::new("/p/notes.txt")));
        assert!(!is_watched_file(Path::new("/p/svelte")));
    }

    #[test]
    fn icons_dir_requires_both_segments() {
        assert!(in_icons_dir(Path::new("/proj/src/icons/Home.svelte")));
        assert!(in_icons_dir(Path::new("src/icons/Home.svelte")));
        assert!(!in_icons_dir(Path::new("/proj/lib/icons/Home.svelte")));
        assert!(!in_icons_dir(Path::new("/proj/src/components/Home.svelte")));
        assert!(!in_icons_dir(Path::new("Home.svelte")));
    }

    #[test]
    fn companion_path_uses_snake_case_stem() {
        assert_eq!(
            companion_svg_path(Path::new("/proj/src/icons/IconHome.svelte")),
            Some(PathBuf::from("/proj/src/icons/svgs/icon_home.svg"))
        );
        assert_eq!(
            companion_svg_path(Path::new("/proj/src/icons/ArrowRight 2.svelte")),
            Some(PathBuf::from("/proj/src/icons/svgs/arrow_right_2.svg"))
        );
    }

    #[test]
    fn companion_path_without_parent_is_none() {
        assert_eq!(companion_svg_path(Path::new("/")), None);
    }
}

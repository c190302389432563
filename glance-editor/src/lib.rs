use std::path::PathBuf;

pub mod handler;
pub mod host;
pub mod preview;

/// Resolve a document URI to a local path, but only when it uses the
/// `file` scheme and names a watched source file. Other schemes and
/// extensions (and unparseable URIs) are not ours to handle.
pub fn watched_file_path(uri: &str) -> Option<PathBuf> {
    let parsed = url::Url::parse(uri).ok()?;
    if parsed.scheme() != "file" {
        return None;
    }
    let path = parsed.to_file_path().ok()?;
    if glance_core::layout::is_watched_file(&path) {
        Some(path)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_scheme_svelte_resolves() {
        assert_eq!(
            watched_file_path("file:///proj/src/icons/Home.svelte"),
            Some(PathBuf::from("/proj/src/icons/Home.svelte"))
        );
    }

    #[test]
    fn other_schemes_are_ignored() {
        assert_eq!(watched_file_path("untitled:Untitled-1"), None);
        assert_eq!(watched_file_path("https://example.com/Home.svelte"), None);
    }

    #[test]
    fn other_extensions_are_ignored() {
        assert_eq!(watched_file_path("file:///proj/notes.txt"), None);
    }

    #[test]
    fn garbage_is_ignored() {
        assert_eq!(watched_file_path("not a uri"), None);
    }
}

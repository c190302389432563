use std::fs;

use glance_core::{layout, svg};

use crate::host::{EditorHost, OpenOptions, PanelColumn, PanelOptions};
use crate::preview;

/// A strategy invoked once per opened document. Exactly one implementation
/// is wired into a frontend at build time; the same call serves both the
/// activation-time scan and every subsequent open event.
pub trait FileOpenHandler {
    fn on_file_opened(&self, host: &dyn EditorHost, uri: &str) -> Result<(), String>;
}

/// Inline preview variant: extract the SVG fragment embedded in the opened
/// component and show it in a read-only panel next to the source.
pub struct SvgPreviewHandler {
    /// Panel background; sanitized before use.
    pub preview_background: String,
}

impl Default for SvgPreviewHandler {
    fn default() -> Self {
        Self {
            preview_background: preview::DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl FileOpenHandler for SvgPreviewHandler {
    fn on_file_opened(&self, host: &dyn EditorHost, uri: &str) -> Result<(), String> {
        let Some(path) = crate::watched_file_path(uri) else {
            return Ok(());
        };
        if !layout::in_icons_dir(&path) {
            return Ok(());
        }

        // Pin the source first so the panel does not replace its tab.
        host.open_document(
            &path,
            &OpenOptions {
                pinned: true,
                preserve_focus: true,
            },
        )?;

        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
        let fragment = svg::transform_svg_content(&content);
        if fragment.is_empty() {
            return Ok(());
        }

        let (width, height) = svg::intrinsic_size(&fragment);
        log::debug!(
            "intrinsic size {}x{} for '{}'",
            width,
            height,
            path.display()
        );

        let Some(html) = preview::render_icon_preview(&fragment, &self.preview_background) else {
            return Ok(());
        };

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        host.create_panel(
            &PanelOptions {
                title: format!("{}.svg preview", stem),
                column: PanelColumn::Active,
                scripts_enabled: false,
                retain_when_hidden: true,
            },
            &html,
        )
    }
}

/// Companion-file variant: when a conventionally-named sibling
/// `svgs/<snake_case>.svg` exists, pin the source and open the companion
/// as a second pinned tab. When it does not, leave the editor untouched.
#[derive(Default)]
pub struct CompanionOpenHandler;

impl FileOpenHandler for CompanionOpenHandler {
    fn on_file_opened(&self, host: &dyn EditorHost, uri: &str) -> Result<(), String> {
        let Some(path) = crate::watched_file_path(uri) else {
            return Ok(());
        };
        if !layout::in_icons_dir(&path) {
            return Ok(());
        }
        let Some(companion) = layout::companion_svg_path(&path) else {
            return Ok(());
        };

        // Stat failures of any kind count as "no companion".
        if fs::metadata(&companion).is_err() {
            return Ok(());
        }

        host.open_document(
            &path,
            &OpenOptions {
                pinned: true,
                preserve_focus: true,
            },
        )?;
        host.open_document(
            &companion,
            &OpenOptions {
                pinned: true,
                preserve_focus: false,
            },
        )
    }
}

/// Startup reconciliation pass: run the handler over every document that
/// was already open when the extension activated. Per-item failures are
/// logged and do not stop the scan.
pub fn activate(handler: &dyn FileOpenHandler, host: &dyn EditorHost, open_uris: &[String]) {
    for uri in open_uris {
        if let Err(e) = handler.on_file_opened(host, uri) {
            log::error!("startup scan failed for '{}': {}", uri, e);
        }
    }
}

/// Counterpart of [`activate`]. The extension holds no resources, so there
/// is nothing to release.
pub fn deactivate() {}

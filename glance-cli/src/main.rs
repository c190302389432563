mod settings;

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use glance_editor::handler::FileOpenHandler;
use glance_editor::host::{EditorHost, OpenOptions, PanelOptions};

#[cfg(feature = "companion")]
use glance_editor::handler::CompanionOpenHandler;
#[cfg(not(feature = "companion"))]
use glance_editor::handler::SvgPreviewHandler;

/// Host implementation with no editor attached: document opens are logged,
/// panels land on disk as standalone HTML files with a JSON options
/// sidecar, ready to inspect in a browser.
struct HeadlessHost {
    out_dir: PathBuf,
}

impl EditorHost for HeadlessHost {
    fn open_document(&self, path: &Path, options: &OpenOptions) -> Result<(), String> {
        log::info!(
            "open document {} (pinned: {}, preserve_focus: {})",
            path.display(),
            options.pinned,
            options.preserve_focus
        );
        Ok(())
    }

    fn create_panel(&self, options: &PanelOptions, html: &str) -> Result<(), String> {
        let html_path = self
            .out_dir
            .join(format!("{}.html", panel_file_stem(&options.title)));
        std::fs::write(&html_path, html)
            .map_err(|e| format!("Failed to write '{}': {}", html_path.display(), e))?;

        let meta = serde_json::to_string_pretty(options)
            .map_err(|e| format!("Failed to serialize panel options: {}", e))?;
        let meta_path = html_path.with_extension("json");
        std::fs::write(&meta_path, meta)
            .map_err(|e| format!("Failed to write '{}': {}", meta_path.display(), e))?;

        log::info!("panel '{}' written to {}", options.title, html_path.display());
        Ok(())
    }
}

/// Turn a panel title into a safe file stem.
fn panel_file_stem(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Absolutize a command-line path argument and turn it into a `file://`
/// URI. The file does not have to exist.
fn file_uri(arg: &str) -> Option<String> {
    let path = Path::new(arg);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().ok()?.join(path)
    };
    url::Url::from_file_path(&absolute)
        .ok()
        .map(|u| u.to_string())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: glance <file.svelte>...");
        process::exit(2);
    }

    let settings = settings::load();
    log::debug!("preview background: {}", settings.preview_background);

    #[cfg(feature = "companion")]
    let handler = CompanionOpenHandler;
    #[cfg(not(feature = "companion"))]
    let handler = SvgPreviewHandler {
        preview_background: settings.preview_background.clone(),
    };

    let host = HeadlessHost {
        out_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let mut failed = false;
    for arg in &args {
        if !glance_core::layout::is_watched_file(Path::new(arg)) {
            log::warn!("skipping '{}': not a .svelte file", arg);
            continue;
        }
        let Some(uri) = file_uri(arg) else {
            log::error!("cannot resolve '{}' to a file URI", arg);
            failed = true;
            continue;
        };
        if let Err(e) = handler.on_file_opened(&host, &uri) {
            log::error!("{}", e);
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options for opening a document in the host editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenOptions {
    /// Keep the document in a persistent tab instead of a transient
    /// preview tab that the next open would replace.
    pub pinned: bool,
    /// Open without stealing focus from the current editor.
    pub preserve_focus: bool,
}

/// Layout column a panel is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelColumn {
    Active,
    Beside,
}

/// Options for creating a titled HTML panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelOptions {
    pub title: String,
    pub column: PanelColumn,
    pub scripts_enabled: bool,
    /// Keep the panel's content alive when it is hidden behind another tab.
    pub retain_when_hidden: bool,
}

/// The slice of the host editor's API this extension consumes. Frontends
/// implement it against their actual tab/panel machinery; tests implement
/// it with a recording fake.
pub trait EditorHost {
    /// Open (or re-focus) the document at `path` as a text tab.
    fn open_document(&self, path: &Path, options: &OpenOptions) -> Result<(), String>;

    /// Create a titled panel and assign it `html` as content.
    fn create_panel(&self, options: &PanelOptions, html: &str) -> Result<(), String>;
}

use regex::{Captures, Regex};

/// Width and height applied to every previewed icon, replacing whatever
/// literal dimensions the source declared.
pub const PREVIEW_SIZE: &str = "512";

/// Extract the embedded `<svg>...</svg>` block from a Svelte component and
/// rewrite it into a display-ready fragment.
///
/// The first (case-insensitive, non-greedy) block wins; later blocks are
/// ignored. Returns an empty string when the source contains no block.
///
/// The rewrite is textual, not attribute-aware: dynamic template bindings
/// (`attr={expr}`) and literal numeric `width`/`height` attributes are
/// stripped from the opening tag, fixed preview dimensions are prepended,
/// and `fill="none"` / `stroke="none"` markers gain an explicit
/// `currentColor` counterpart so line icons stay visible on any background.
pub fn transform_svg_content(content: &str) -> String {
    let block_re = Regex::new(r"(?is)<svg.*?</svg>").unwrap();
    let Some(block) = block_re.find(content) else {
        log::warn!("no <svg> block found in source");
        return String::new();
    };
    let mut svg = block.as_str().to_string();

    // Rewrite the attribute list of the opening tag only.
    let open_tag_re = Regex::new(r"<svg([^>]*)>").unwrap();
    let dynamic_attr_re = Regex::new(r"\s+\w+\s*=\s*\{[^}]+\}").unwrap();
    let width_attr_re = Regex::new(r#"\s+width\s*=\s*["']\s*(\d+)\s*["']"#).unwrap();
    let height_attr_re = Regex::new(r#"\s+height\s*=\s*["']\s*(\d+)\s*["']"#).unwrap();
    svg = open_tag_re
        .replace(&svg, |caps: &Captures| {
            let attrs = dynamic_attr_re.replace_all(&caps[1], "");
            let attrs = width_attr_re.replace_all(&attrs, "");
            let attrs = height_attr_re.replace_all(&attrs, "");
            format!(
                r#"<svg height="{size}" width="{size}"{attrs}>"#,
                size = PREVIEW_SIZE,
                attrs = attrs
            )
        })
        .into_owned();

    // Color-mode normalization applies to the whole fragment, every
    // occurrence, so nested shapes are covered too.
    svg = svg.replace(r#"fill="none""#, r#"stroke="currentColor" fill="none""#);
    svg = svg.replace(r#"stroke="none""#, r#"fill="currentColor" stroke="none""#);

    svg.trim().to_string()
}

/// Infer an icon's intrinsic size from its `viewBox="0 0 W H"` attribute.
///
/// Only the origin-anchored two-integer form is recognized; anything else
/// falls back to `("24", "24")`. The preview currently renders at a fixed
/// [`PREVIEW_SIZE`] regardless, so this value is informational. It is the
/// hook for sizing the panel to the icon's native aspect ratio later.
pub fn intrinsic_size(svg: &str) -> (String, String) {
    let view_box_re = Regex::new(r#"viewBox\s*=\s*["']\s*0\s+0\s+(\d+)\s+(\d+)["']"#).unwrap();
    match view_box_re.captures(svg) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => ("24".to_string(), "24".to_string()),
    }
}

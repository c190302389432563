/// Maximum fragment size (in bytes) before the preview is refused.
/// Beyond this threshold, rendering can cause UI lag.
const MAX_FRAGMENT_SIZE: usize = 1024 * 1024; // 1 MB

/// Background used when the configured color fails sanitization.
pub const DEFAULT_BACKGROUND: &str = "#1a1b26";

/// Wrap a transformed SVG fragment in a minimal standalone HTML document:
/// centered, scaled to fit, scripting disabled via CSP.
///
/// Returns `None` if the fragment exceeds the size limit.
pub fn render_icon_preview(fragment: &str, bg_color: &str) -> Option<String> {
    if fragment.len() > MAX_FRAGMENT_SIZE {
        log::warn!(
            "SVG fragment ({} bytes) exceeds {} byte limit, skipping preview",
            fragment.len(),
            MAX_FRAGMENT_SIZE
        );
        return None;
    }

    let bg = sanitize_css_color(bg_color, DEFAULT_BACKGROUND);

    Some(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta http-equiv="Content-Security-Policy" content="default-src 'none'; style-src 'unsafe-inline'; img-src data:;">
<style>
* {{ margin: 0; padding: 0; box-sizing: border-box; }}
html, body {{
    background: {bg};
    display: flex;
    align-items: center;
    justify-content: center;
    height: 100%;
}}
svg {{
    max-width: 100%;
    max-height: 100%;
}}
</style>
</head>
<body>
{svg}
</body>
</html>"#,
        bg = bg,
        svg = fragment,
    ))
}

/// Sanitise a CSS color value. Accepts `#hex`, `rgb(…)`, `rgba(…)`.
/// Anything else is replaced by the fallback.
fn sanitize_css_color(value: &str, fallback: &str) -> String {
    let v = value.trim();
    if is_hex_color(v) || is_rgb_color(v) {
        v.to_string()
    } else {
        fallback.to_string()
    }
}

// #abc, #aabbcc, #aabbccdd
fn is_hex_color(v: &str) -> bool {
    v.starts_with('#')
        && matches!(v.len(), 4 | 7 | 9)
        && v[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn is_rgb_color(v: &str) -> bool {
    let inner = v
        .strip_prefix("rgba")
        .or_else(|| v.strip_prefix("rgb"))
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'));
    match inner {
        Some(args) => args
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '.' || c == ' ' || c == '%'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_fragment_with_csp() {
        let html = render_icon_preview("<svg><g/></svg>", "#000").unwrap();
        assert!(html.contains("<svg><g/></svg>"));
        assert!(html.contains("Content-Security-Policy"));
        assert!(html.contains("default-src 'none'"));
        assert!(html.contains("background: #000"));
    }

    #[test]
    fn oversized_fragment_is_refused() {
        let big = format!("<svg>{}</svg>", "x".repeat(MAX_FRAGMENT_SIZE));
        assert!(render_icon_preview(&big, "#000").is_none());
    }

    #[test]
    fn bad_background_falls_back() {
        let html = render_icon_preview("<svg/>", "url(javascript:alert(1))").unwrap();
        assert!(html.contains(DEFAULT_BACKGROUND));
    }

    #[test]
    fn rgb_backgrounds_are_accepted() {
        let html = render_icon_preview("<svg/>", "rgba(26, 27, 38, 0.5)").unwrap();
        assert!(html.contains("rgba(26, 27, 38, 0.5)"));
    }
}

mod defs;
mod shapes;

use crate::config::IconConfig;
use defs::render_defs;
use shapes::render_body;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Formats a derived coordinate with a single decimal place (`100.0`, `99.5`).
fn px(value: f64) -> String {
    format!("{value:.1}")
}

/// Renders the complete icon document. The same config always yields the same bytes.
pub fn render(config: &IconConfig) -> String {
    let size = config.canvas_size;

    let mut out = format!(
        r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="{SVG_NS}">"#
    );
    out.push('\n');
    out.push_str(&render_defs(config));
    out.push_str(&render_body(config));
    out.push_str("\n</svg>\n");
    out
}

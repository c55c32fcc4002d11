use crate::config::IconConfig;

// --- Paint server ids ---
pub const BASE_GRADIENT: &str = "baseGradient";
pub const GLASS_GRADIENT: &str = "glassGradient";
pub const RUST_GRADIENT: &str = "rustGradient";

// --- Filter ids ---
pub const ICON_SHADOW: &str = "iconShadow";
pub const GLASS_GLOW: &str = "glassGlow";

/// Every id declared in the `<defs>` block, in document order.
#[cfg(test)]
pub const ALL_IDS: [&str; 5] = [
    BASE_GRADIENT,
    GLASS_GRADIENT,
    RUST_GRADIENT,
    ICON_SHADOW,
    GLASS_GLOW,
];

/// `url(#id)` reference to a definition.
pub fn url(id: &str) -> String {
    format!("url(#{id})")
}

/// Renders the `<defs>` block: gradients first, then filters.
pub fn render_defs(config: &IconConfig) -> String {
    let mut out = String::from("  <defs>\n");
    out.push_str(&gradients(config));
    out.push('\n');
    out.push_str(&filters());
    out.push_str("  </defs>\n");
    out
}

fn gradients(config: &IconConfig) -> String {
    let glass_blue = &config.glass_blue;
    let rust_color = &config.rust_color;

    format!(
        r##"    <!-- Base Background Gradient (Soft Metallic/White) -->
    <linearGradient id="{BASE_GRADIENT}" x1="0%" y1="0%" x2="0%" y2="100%">
      <stop offset="0%" stop-color="#FFFFFF"/>
      <stop offset="100%" stop-color="#E5E5E5"/>
    </linearGradient>

    <!-- Liquid Glass Gradient for the Lens -->
    <linearGradient id="{GLASS_GRADIENT}" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="white" stop-opacity="0.9"/>
      <stop offset="50%" stop-color="{glass_blue}" stop-opacity="0.5"/>
      <stop offset="100%" stop-color="#B0C4DE" stop-opacity="0.2"/>
    </linearGradient>

    <!-- Rust Gradient for the Claw -->
    <linearGradient id="{RUST_GRADIENT}" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#E65C2C"/> <!-- Lighter Rust -->
      <stop offset="100%" stop-color="{rust_color}"/> <!-- Darker Rust -->
    </linearGradient>
"##
    )
}

fn filters() -> String {
    format!(
        r##"    <!-- Drop Shadow for the main icon shape -->
    <filter id="{ICON_SHADOW}" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur in="SourceAlpha" stdDeviation="12"/>
      <feOffset dx="0" dy="8" result="offsetblur"/>
      <feComponentTransfer>
        <feFuncA type="linear" slope="0.25"/>
      </feComponentTransfer>
      <feMerge>
        <feMergeNode/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>

    <!-- Inner Glow for Glass Effect -->
    <filter id="{GLASS_GLOW}">
      <feGaussianBlur in="SourceAlpha" stdDeviation="5" result="blur"/>
      <feComposite in="blur" in2="SourceAlpha" operator="arithmetic" k2="-1" k3="1" result="shadowDiff"/>
      <feFlood flood-color="white" flood-opacity="0.8"/>
      <feComposite in2="shadowDiff" operator="in"/>
      <feComposite in2="SourceGraphic" operator="over"/>
    </filter>
"##
    )
}

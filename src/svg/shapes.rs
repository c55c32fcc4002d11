use super::defs::{url, BASE_GRADIENT, GLASS_GLOW, GLASS_GRADIENT, ICON_SHADOW, RUST_GRADIENT};
use super::px;
use crate::config::IconConfig;

// Composition geometry, relative to the canvas centre.
const LENS_RADIUS: u32 = 140;
const CLAW_STROKE: u32 = 60;
const HANDLE_STROKE: u32 = 40;

/// Renders every drawing element below `<defs>`, in paint order.
pub fn render_body(config: &IconConfig) -> String {
    [plate(config), composition(config), overlay(config)].join("\n")
}

/// Attributes shared by the plate and the overlay so both cover the same squircle.
fn squircle_attrs(config: &IconConfig) -> String {
    let pad = px(config.padding());
    let size = config.icon_size;
    let radius = config.corner_radius;
    format!(
        r#"x="{pad}" y="{pad}" width="{size}" height="{size}" rx="{radius}" ry="{radius}""#
    )
}

fn plate(config: &IconConfig) -> String {
    let shadow = url(ICON_SHADOW);
    let fill = url(BASE_GRADIENT);
    let rect = squircle_attrs(config);

    format!(
        r#"
  <!-- 1. The Base Squircle (The "Plate") -->
  <g filter="{shadow}">
    <rect {rect} fill="{fill}"/>
  </g>
"#
    )
}

fn composition(config: &IconConfig) -> String {
    let center = px(config.center());
    let rust = url(RUST_GRADIENT);
    let glass = url(GLASS_GRADIENT);
    let glow = url(GLASS_GLOW);
    let rust_color = &config.rust_color;

    format!(
        r#"  <!-- 2. The Abstract Composition Container -->
  <g transform="translate({center}, {center})">

    <!-- The Claw (Abstracted as a heavy, protective curve) -->
    <!-- Rotated to look like it's holding the lens -->
    <path d="M -150 100 A 200 200 0 1 1 150 100"
          fill="none"
          stroke="{rust}"
          stroke-width="{CLAW_STROKE}"
          stroke-linecap="round"
          transform="rotate(135)"/>

    <!-- The Lens (Liquid Glass Sphere) -->
    <circle cx="0" cy="0" r="{LENS_RADIUS}" fill="{glass}" filter="{glow}"/>

    <!-- Lens Rim (Thin, elegant) -->
    <circle cx="0" cy="0" r="{LENS_RADIUS}" fill="none" stroke="{rust_color}" stroke-width="4" opacity="0.3"/>

    <!-- Refraction/Highlight on Lens -->
    <path d="M -80 -80 Q -40 -120 40 -100" stroke="white" stroke-width="12" stroke-linecap="round" opacity="0.9" fill="none"/>

    <!-- The "Seek" Element (Magnifying handle implied or abstract lines) -->
    <!-- Let's add a handle sticking out to reinforce "Magnifying Glass" -->
    <path d="M 100 100 L 180 180" stroke="{rust}" stroke-width="{HANDLE_STROKE}" stroke-linecap="round" />

  </g>
"#
    )
}

fn overlay(config: &IconConfig) -> String {
    let fill = url(GLASS_GRADIENT);
    let rect = squircle_attrs(config);

    format!(
        r#"  <!-- 3. Overall Glossy Overlay for the Icon Shape (The "Liquid Glass" finish) -->
  <!-- This sits on top of everything to unify it -->
  <rect {rect} fill="{fill}" style="mix-blend-mode: overlay; pointer-events:none;" opacity="0.3"/>
"#
    )
}

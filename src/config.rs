use std::path::Path;

/// Where the generated icon is written, relative to the working directory.
pub const OUTPUT_PATH: &str = "design/app-icon.svg";

/// Icon geometry and colours
#[derive(Clone, Debug, PartialEq)]
pub struct IconConfig {
    /// Width and height of the whole canvas (in pixels)
    pub canvas_size: u32,
    /// Width and height of the squircle plate (in pixels)
    pub icon_size: u32,
    /// Corner radius of the squircle plate
    pub corner_radius: u32,
    /// Brand colour for the claw and lens rim
    pub rust_color: String,
    /// Tint in the middle of the glass gradient
    pub glass_blue: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            canvas_size: 1024,
            // macOS icons sit at ~824px inside the 1024px box, leaving room
            // for the drop shadow. Anything larger looks oversized in the Dock.
            icon_size: 824,
            corner_radius: 185,
            rust_color: "#B7410E".to_string(),
            glass_blue: "#E6F4F1".to_string(),
        }
    }
}

impl IconConfig {
    /// Space between the canvas edge and the plate on each side.
    pub fn padding(&self) -> f64 {
        (f64::from(self.canvas_size) - f64::from(self.icon_size)) / 2.0
    }

    /// Centre of the canvas, origin of the composition group.
    pub fn center(&self) -> f64 {
        f64::from(self.canvas_size) / 2.0
    }

    pub fn output_path() -> &'static Path {
        Path::new(OUTPUT_PATH)
    }
}

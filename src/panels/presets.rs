//! Style preset catalog and render styles
//!
//! The catalog is compile-time data: ten named prompt fragments offered as
//! one-click choices, plus the two render-style sentences appended to the
//! active prompt before it is handed to the host.

use serde::{Deserialize, Serialize};

/// A named, predefined style instruction
#[derive(Debug, PartialEq, Eq)]
pub struct StylePreset {
    /// Display label, unique within the catalog
    pub name: &'static str,
    /// Base instruction text
    pub prompt_fragment: &'static str,
}

/// The fixed preset catalog, in display order
pub static PRESETS: [StylePreset; 10] = [
    StylePreset {
        name: "Monochrome",
        prompt_fragment: "A detailed, high-contrast monochrome ASCII art. Use a wide range of characters to create deep shadows and bright highlights.",
    },
    StylePreset {
        name: "Neonwave",
        prompt_fragment: "A vibrant 80s synthwave aesthetic. Use ASCII characters to create glowing neon lines in magenta and cyan on a dark background.",
    },
    StylePreset {
        name: "Terminal Green",
        prompt_fragment: "A classic green-on-black terminal/matrix style. The art should look like it is displayed on an old CRT monitor.",
    },
    StylePreset {
        name: "Color Pop",
        prompt_fragment: "A mostly monochrome ASCII art, but with one or two key colors highlighted dramatically for a pop-art effect.",
    },
    StylePreset {
        name: "Pixel Art",
        prompt_fragment: "Recreate the image as pixelated ASCII art, using block characters (like █, ▓, ▒, ░) to simulate a low-resolution, 8-bit video game look.",
    },
    StylePreset {
        name: "Sketch",
        prompt_fragment: "Convert the image into an ASCII sketch. Use characters like /, \\, -, |, and . to create the appearance of hand-drawn pencil lines, cross-hatching, and stippling for shading.",
    },
    StylePreset {
        name: "Halftone",
        prompt_fragment: "Simulate a halftone printing effect using ASCII characters. Use characters of varying density (like @, #, %, *, o, ., and space) to represent different tones and create a retro, printed look.",
    },
    StylePreset {
        name: "Blueprint",
        prompt_fragment: "Create a blueprint-style ASCII art. Use characters like +, -, |, and corner pieces to outline the subject against a blue background, resembling a technical schematic or architectural plan.",
    },
    StylePreset {
        name: "Glitch Art",
        prompt_fragment: "Generate a glitch art version of the image using ASCII characters. Introduce random characters, misplaced lines, and blocky artifacts to create a chaotic, digital distortion effect.",
    },
    StylePreset {
        name: "Dot Matrix",
        prompt_fragment: "Render the image in a style reminiscent of a 9-pin dot matrix printer. Use a limited character set (like ., o, +, *) with noticeable spacing to simulate a low-resolution printed output.",
    },
];

/// Look up a preset by display name (case-insensitive)
pub fn find_preset(name: &str) -> Option<&'static StylePreset> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}

/// Binary modifier appended to the active prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderStyle {
    Outlines,
    #[default]
    Solid,
}

impl RenderStyle {
    pub fn name(&self) -> &'static str {
        match self {
            RenderStyle::Outlines => "Outlines",
            RenderStyle::Solid => "Solid Fill",
        }
    }

    /// Sentence appended to the active prompt, including its leading space
    pub fn suffix(&self) -> &'static str {
        match self {
            RenderStyle::Outlines => " The art should primarily use characters to define the outlines and contours of the subjects, leaving the interiors relatively sparse or using minimal characters for shading.",
            RenderStyle::Solid => " The art should focus on using dense blocks of characters to create solid, filled-in shapes, emphasizing form over fine lines.",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            RenderStyle::Outlines => RenderStyle::Solid,
            RenderStyle::Solid => RenderStyle::Outlines,
        }
    }

    pub fn all() -> &'static [RenderStyle] {
        &ALL_RENDER_STYLES[..]
    }
}

static ALL_RENDER_STYLES: [RenderStyle; 2] = [RenderStyle::Outlines, RenderStyle::Solid];

impl std::str::FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outlines" | "outline" => Ok(RenderStyle::Outlines),
            "solid" | "solid fill" | "solid-fill" => Ok(RenderStyle::Solid),
            other => Err(format!("unknown render style '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let names: HashSet<_> = PRESETS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), PRESETS.len());
        assert_eq!(PRESETS.len(), 10);
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("pixel art").map(|p| p.name), Some("Pixel Art"));
        assert_eq!(find_preset("  Sketch ").map(|p| p.name), Some("Sketch"));
        assert!(find_preset("Watercolor").is_none());
    }

    #[test]
    fn test_sketch_fragment_keeps_single_backslash() {
        let sketch = find_preset("Sketch").unwrap();
        assert!(sketch.prompt_fragment.contains("/, \\, -"));
        assert!(!sketch.prompt_fragment.contains("\\\\"));
    }

    #[test]
    fn test_render_style_defaults_and_toggle() {
        assert_eq!(RenderStyle::default(), RenderStyle::Solid);
        assert_eq!(RenderStyle::Solid.toggled(), RenderStyle::Outlines);
        assert_eq!(RenderStyle::Outlines.toggled(), RenderStyle::Solid);
    }

    #[test]
    fn test_suffixes_start_with_space() {
        for style in RenderStyle::all() {
            assert!(style.suffix().starts_with(" The art should"));
        }
    }

    #[test]
    fn test_render_style_from_str() {
        assert_eq!("outlines".parse::<RenderStyle>(), Ok(RenderStyle::Outlines));
        assert_eq!("Solid".parse::<RenderStyle>(), Ok(RenderStyle::Solid));
        assert!("dotted".parse::<RenderStyle>().is_err());
    }
}

//! Random color generator

use crate::util::parse_count;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolMode, ToolOptions, ToolResult};
use rand::Rng;

pub fn color_generator() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "color-generator",
            "Random Color Generator",
            ToolCategory::Generators,
            "color",
        )
        .with_description(
            "Generate random colors with hex, RGB, and HSL values. Enter a number for color count (default: 6).",
        )
        .with_keywords(["color", "hex", "rgb", "hsl", "random", "palette", "generate", "swatch"])
        .with_sample("6")
        .with_mode(ToolMode::Generate),
        run,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

impl Rgb {
    fn random(rng: &mut impl Rng) -> Self {
        Self(rng.r#gen(), rng.r#gen(), rng.r#gen())
    }

    fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Hue in degrees, saturation and lightness in percent, rounded.
    fn hsl(&self) -> (i64, i64, i64) {
        let r = f64::from(self.0) / 255.0;
        let g = f64::from(self.1) / 255.0;
        let b = f64::from(self.2) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let (mut h, mut s) = (0.0, 0.0);
        if max != min {
            let d = max - min;
            s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
            h = if max == r {
                ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
            } else if max == g {
                ((b - r) / d + 2.0) / 6.0
            } else {
                ((r - g) / d + 4.0) / 6.0
            };
        }
        (
            (h * 360.0).round() as i64,
            (s * 100.0).round() as i64,
            (l * 100.0).round() as i64,
        )
    }

    fn describe(&self, index: usize) -> String {
        let (h, s, l) = self.hsl();
        format!(
            "Color {index}:\n  HEX: {}\n  RGB: rgb({}, {}, {})\n  HSL: hsl({h}, {s}%, {l}%)",
            self.hex(),
            self.0,
            self.1,
            self.2
        )
    }
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let count = parse_count(input, 6, 1, 20) as usize;
    let mut rng = rand::thread_rng();
    let output = (1..=count)
        .map(|i| Rgb::random(&mut rng).describe(i))
        .collect::<Vec<_>>()
        .join("\n\n");
    ToolResult::success(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Rgb(255, 0, 0), (0, 100, 50))]
    #[case(Rgb(0, 255, 0), (120, 100, 50))]
    #[case(Rgb(0, 0, 255), (240, 100, 50))]
    #[case(Rgb(128, 128, 128), (0, 0, 50))]
    #[case(Rgb(255, 255, 255), (0, 0, 100))]
    fn test_hsl(#[case] color: Rgb, #[case] expected: (i64, i64, i64)) {
        assert_eq!(color.hsl(), expected);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Rgb(10, 20, 255).describe(2),
            "Color 2:\n  HEX: #0a14ff\n  RGB: rgb(10, 20, 255)\n  HSL: hsl(238, 100%, 52%)"
        );
    }

    #[test]
    fn test_count() {
        let result = run("3", &ToolOptions::default());
        assert_eq!(result.output().matches("HEX: #").count(), 3);
    }
}

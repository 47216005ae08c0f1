// File: crates/speedup-core/src/theme.rs
// Summary: Figure colour themes and the categorical palette series cycle through.

use skia_safe as skia;

fn rgb(r: u8, g: u8, b: u8) -> skia::Color {
    skia::Color::from_argb(255, r, g, b)
}

/// Ten-colour categorical palette used by the light theme.
fn category10() -> [skia::Color; 10] {
    [
        rgb(0x1f, 0x77, 0xb4),
        rgb(0xff, 0x7f, 0x0e),
        rgb(0x2c, 0xa0, 0x2c),
        rgb(0xd6, 0x27, 0x28),
        rgb(0x94, 0x67, 0xbd),
        rgb(0x8c, 0x56, 0x4b),
        rgb(0xe3, 0x77, 0xc2),
        rgb(0x7f, 0x7f, 0x7f),
        rgb(0xbc, 0xbd, 0x22),
        rgb(0x17, 0xbe, 0xcf),
    ]
}

/// Solarized accents, in an order that keeps neighbours distinguishable.
fn solarized_accents() -> [skia::Color; 10] {
    [
        rgb(0x26, 0x8b, 0xd2), // blue
        rgb(0xcb, 0x4b, 0x16), // orange
        rgb(0x85, 0x99, 0x00), // green
        rgb(0xdc, 0x32, 0x2f), // red
        rgb(0x6c, 0x71, 0xc4), // violet
        rgb(0xb5, 0x89, 0x00), // yellow
        rgb(0xd3, 0x36, 0x82), // magenta
        rgb(0x2a, 0xa1, 0x98), // cyan
        rgb(0x93, 0xa1, 0xa1), // base1
        rgb(0x58, 0x6e, 0x75), // base01
    ]
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: rgb(255, 255, 255),
            plot_background: rgb(255, 255, 255),
            grid: rgb(0xb0, 0xb0, 0xb0),
            axis_line: rgb(0x20, 0x20, 0x20),
            axis_label: rgb(0x10, 0x10, 0x10),
            tick: rgb(0x20, 0x20, 0x20),
            title: rgb(0x00, 0x00, 0x00),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: rgb(0xcc, 0xcc, 0xcc),
            palette: category10(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: rgb(18, 18, 20),
            plot_background: rgb(24, 24, 28),
            grid: rgb(52, 52, 58),
            axis_line: rgb(180, 180, 190),
            axis_label: rgb(235, 235, 245),
            tick: rgb(150, 150, 160),
            title: rgb(245, 245, 250),
            legend_background: skia::Color::from_argb(220, 30, 30, 34),
            legend_border: rgb(70, 70, 78),
            palette: category10(),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: rgb(0x00, 0x2b, 0x36),        // base03
            plot_background: rgb(0x00, 0x2b, 0x36),   // base03
            grid: rgb(0x07, 0x36, 0x42),              // base02
            axis_line: rgb(0x93, 0xa1, 0xa1),         // base1
            axis_label: rgb(0xee, 0xe8, 0xd5),        // base2
            tick: rgb(0x83, 0x94, 0x96),              // base0
            title: rgb(0xfd, 0xf6, 0xe3),             // base3
            legend_background: skia::Color::from_argb(220, 0x07, 0x36, 0x42),
            legend_border: rgb(0x58, 0x6e, 0x75),
            palette: solarized_accents(),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: rgb(0xfd, 0xf6, 0xe3),        // base3
            plot_background: rgb(0xfd, 0xf6, 0xe3),
            grid: rgb(0xee, 0xe8, 0xd5),              // base2
            axis_line: rgb(0x65, 0x7b, 0x83),         // base00
            axis_label: rgb(0x00, 0x2b, 0x36),        // base03
            tick: rgb(0x58, 0x6e, 0x75),              // base01
            title: rgb(0x07, 0x36, 0x42),             // base02
            legend_background: skia::Color::from_argb(220, 0xee, 0xe8, 0xd5),
            legend_border: rgb(0x93, 0xa1, 0xa1),
            palette: solarized_accents(),
        }
    }

    /// Colour of the `index`-th series; cycles past the palette length.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::solarized_dark(),
    ]
}

/// Find a preset by `name`, ignoring ASCII case.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

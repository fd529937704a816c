use ratatui::style::Color;

/// Colour palette for every view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight: Color,
    pub supports_emoji: bool,
}

pub const DEFAULT_THEME: &str = "dracula-vibe";

pub(crate) fn builtin() -> Vec<Theme> {
    vec![
        Theme {
            name: DEFAULT_THEME,
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            accent: Color::Rgb(0xff, 0x14, 0x93),
            accent_alt: Color::Rgb(0x00, 0xff, 0xff),
            muted: Color::Rgb(0x44, 0x47, 0x5a),
            border: Color::Rgb(0xff, 0x14, 0x93),
            highlight: Color::Rgb(0xbd, 0x93, 0xf9),
            supports_emoji: true,
        },
        Theme {
            name: "halloween-glitch",
            background: Color::Rgb(0x0d, 0x0b, 0x1a),
            foreground: Color::Rgb(0xf8, 0xe7, 0xcf),
            accent: Color::Rgb(0xff, 0x6b, 0x00),
            accent_alt: Color::Rgb(0x6d, 0xf3, 0xff),
            muted: Color::Rgb(0x2b, 0x20, 0x3d),
            border: Color::Rgb(0xff, 0x00, 0xaa),
            highlight: Color::Rgb(0xaa, 0xff, 0x00),
            supports_emoji: true,
        },
        Theme {
            name: "mono-chill",
            background: Color::Rgb(0x10, 0x10, 0x10),
            foreground: Color::Rgb(0xe6, 0xe6, 0xe6),
            accent: Color::Rgb(0x8e, 0xc0, 0x7c),
            accent_alt: Color::Rgb(0x83, 0xa5, 0x98),
            muted: Color::Rgb(0x3c, 0x38, 0x36),
            border: Color::Rgb(0x92, 0x83, 0x74),
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),
            supports_emoji: false,
        },
    ]
}

use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xc0, 0x84, 0xfc);
pub const ACCENT_PINK: Color = Color::Rgb(0xec, 0x48, 0x99);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PRICE_TEXT: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x3b, 0x23, 0x4f);

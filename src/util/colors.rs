use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub active: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::from_u32(0x00ffffff),
    surface: Color::from_u32(0x00f3f4f6),
    text: Color::from_u32(0x00111827),
    muted: Color::from_u32(0x004b5563),
    accent: Color::from_u32(0x002563eb),
    active: Color::from_u32(0x00dc2626),
};

pub const DARK: Palette = Palette {
    background: Color::from_u32(0x00111827),
    surface: Color::from_u32(0x001f2937),
    text: Color::from_u32(0x00ffffff),
    muted: Color::from_u32(0x00d1d5db),
    accent: Color::from_u32(0x003b82f6),
    active: Color::from_u32(0x00ef4444),
};

pub fn palette(dark: bool) -> &'static Palette {
    if dark { &DARK } else { &LIGHT }
}

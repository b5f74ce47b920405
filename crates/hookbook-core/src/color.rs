#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let channel = |i: usize| {
            s.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
        };
        match s.len() {
            6 => Color(
                channel(0).unwrap_or(0),
                channel(2).unwrap_or(0),
                channel(4).unwrap_or(0),
                255,
            ),
            8 => Color(
                channel(0).unwrap_or(0),
                channel(2).unwrap_or(0),
                channel(4).unwrap_or(0),
                channel(6).unwrap_or(255),
            ),
            _ => Color::BLACK,
        }
    }
}

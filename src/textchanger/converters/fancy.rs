//! Enclosed alphanumerics.
//!
//! "Circle" and "Filled Circle" currently produce the same glyphs. The filled
//! variant is kept as its own catalogue entry until its glyph range is settled.

fn circled(c: char) -> char {
    let code = match c {
        '0' => 0x24EA,
        '1'..='9' => 0x2460 + (u32::from(c) - u32::from('1')),
        'a'..='z' => 0x24D0 + (u32::from(c) - u32::from('a')),
        'A'..='Z' => 0x24B6 + (u32::from(c) - u32::from('A')),
        _ => return c,
    };
    char::from_u32(code).unwrap_or(c)
}

pub fn circle(text: &str) -> String {
    text.chars().map(circled).collect()
}

pub fn filled_circle(text: &str) -> String {
    text.chars().map(circled).collect()
}

//! Binary and code point renderings of text.

fn join_mapped<I, F>(items: I, f: F) -> String
where
    I: Iterator,
    F: FnMut(I::Item) -> String,
{
    items.map(f).collect::<Vec<_>>().join(" ")
}

/// Each character's code point in binary, padded to at least 8 digits.
pub fn ascii_binary(text: &str) -> String {
    join_mapped(text.chars(), |c| format!("{:08b}", u32::from(c)))
}

/// Each UTF-8 byte in binary, without padding.
pub fn utf8_binary(text: &str) -> String {
    join_mapped(text.bytes(), |b| format!("{:b}", b))
}

pub fn decimal(text: &str) -> String {
    join_mapped(text.chars(), |c| u32::from(c).to_string())
}

pub fn code(text: &str) -> String {
    join_mapped(text.chars(), |c| format!("U+{:04X}", u32::from(c)))
}

//! "Cursed" text: ASCII letters and digits buried under combining marks.

use rand::{Rng, RngCore};
use std::ops::Range;

/// Combining Diacritical Marks block, upper bound exclusive.
pub const COMBINING_MARKS: Range<u32> = 0x0300..0x036F;

pub const SLIGHTLY_CURSED_MARKS: usize = 5;
pub const MEDIUM_CURSED_MARKS: usize = 25;
pub const VERY_CURSED_MARKS: usize = 50;

fn random_mark(rng: &mut dyn RngCore) -> char {
    char::from_u32(rng.gen_range(COMBINING_MARKS)).unwrap_or('\u{0300}')
}

/// Appends `amount` random combining marks after every ASCII alphanumeric
/// character. Everything else is copied through untouched.
pub fn curse(text: &str, amount: usize, rng: &mut dyn RngCore) -> String {
    let mut out = String::with_capacity(text.len() * (1 + amount * 2));
    for c in text.chars() {
        out.push(c);
        if c.is_ascii_alphanumeric() {
            for _ in 0..amount {
                out.push(random_mark(rng));
            }
        }
    }
    out
}

pub fn slightly(text: &str, rng: &mut dyn RngCore) -> String {
    curse(text, SLIGHTLY_CURSED_MARKS, rng)
}

pub fn medium(text: &str, rng: &mut dyn RngCore) -> String {
    curse(text, MEDIUM_CURSED_MARKS, rng)
}

pub fn very(text: &str, rng: &mut dyn RngCore) -> String {
    curse(text, VERY_CURSED_MARKS, rng)
}

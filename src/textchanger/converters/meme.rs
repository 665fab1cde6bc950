use rand::{Rng, RngCore};

/// Chance that a mappable character is actually substituted.
pub const LEET_SUBSTITUTION_RATE: f64 = 0.999;

fn leet_digit(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    let single = match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => return None,
    };
    let digit = match single {
        'e' => '3',
        't' => '7',
        'i' => '1',
        'o' => '0',
        'a' => '4',
        's' => '5',
        'g' => '9',
        'l' => '1',
        'z' => '2',
        'b' => '8',
        _ => return None,
    };
    Some(digit)
}

/// Swaps letters for look-alike digits. Almost always, but not quite.
pub fn leetspeak(text: &str, rng: &mut dyn RngCore) -> String {
    text.chars()
        .map(|c| match leet_digit(c) {
            Some(digit) if rng.gen_bool(LEET_SUBSTITUTION_RATE) => digit,
            _ => c,
        })
        .collect()
}

fn is_lowercase_form(c: char) -> bool {
    c.to_lowercase().eq(std::iter::once(c))
}

/// Every word becomes a moo of the same length; uppercase letters moo louder.
pub fn cow(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            word.chars()
                .enumerate()
                .map(|(i, c)| match (i == 0, is_lowercase_form(c)) {
                    (true, true) => 'm',
                    (false, true) => 'o',
                    (true, false) => 'M',
                    (false, false) => 'O',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

use crate::float;

/// The smallest positive magnitude representable by an `f64` (the smallest
/// positive subnormal), recognized as a special input and spelled as
/// `"Double Epsilon"`.
pub const DOUBLE_EPSILON: f64 = f64::from_bits(1);

/// The fixed character-to-word vocabulary.
///
/// Total over every character the decimal rendering can emit: the digits,
/// both signs, the decimal point, and the exponent marker.
pub const WORDS: &[(char, &'static str)] = &[
    ('0', "zero"),
    ('1', "one"),
    ('2', "two"),
    ('3', "three"),
    ('4', "four"),
    ('5', "five"),
    ('6', "six"),
    ('7', "seven"),
    ('8', "eight"),
    ('9', "nine"),
    ('-', "minus"),
    ('+', "plus"),
    ('.', "point"),
    ('E', "E"),
];

/// Returns the word token for a recognized character, or `None` for any
/// character outside the vocabulary.
pub fn word_for(c: char) -> Option<&'static str> {
    WORDS
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, word)| *word)
}

/// Spells out a floating-point number as English words.
///
/// Special values map to fixed phrases; every other value is rendered to its
/// decimal string and transliterated character by character, joined with
/// single spaces, with the first letter capitalized. Total over all `f64`
/// inputs.
///
/// ```
/// use numwords::to_words;
///
/// assert_eq!(to_words(2.345), "Two point three four five");
/// assert_eq!(to_words(-0.0), "Minus zero");
/// ```
pub fn to_words(value: f64) -> String {
    if value.is_nan() {
        return "Not a Number".to_string();
    }
    if value == f64::INFINITY {
        return "Positive Infinity".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "Negative Infinity".to_string();
    }
    if value == DOUBLE_EPSILON {
        return "Double Epsilon".to_string();
    }

    let mut words = String::new();
    for c in float::render(value).chars() {
        if let Some(word) = word_for(c) {
            if !words.is_empty() {
                words.push(' ');
            }
            words.push_str(word);
        }
    }
    capitalize_first(&words)
}

/// Uppercases the first character, leaving the rest untouched. Well-defined
/// for any leading character, not just lowercase ASCII.
fn capitalize_first(words: &str) -> String {
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

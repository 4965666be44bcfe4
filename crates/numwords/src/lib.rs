//! Spell out floating-point numbers as English words.
//!
//! Each value is rendered to a fixed, locale-independent decimal string,
//! then transliterated character by character against a fixed vocabulary
//! (`'2'` → "two", `'.'` → "point", `'-'` → "minus"), joined with single
//! spaces, with the first letter capitalized. Special values map to fixed
//! phrases.
//!
//! ```
//! use numwords::{to_words, transform};
//!
//! assert_eq!(to_words(2.345), "Two point three four five");
//! assert_eq!(to_words(f64::NAN), "Not a Number");
//!
//! let words = transform(Some(&[0.1, -0.0])).unwrap();
//! assert_eq!(words, ["Zero point one", "Minus zero"]);
//! ```

pub mod logging;

mod float;
mod transform;
mod words;

pub use crate::transform::{transform, TransformError};
pub use crate::words::{to_words, word_for, DOUBLE_EPSILON, WORDS};

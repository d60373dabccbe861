//! Unicode text classification.
//!
//! Predicates look at unicode scalar values (`char`s), never bytes, and all
//! of them reject the empty string. [`only_emoji`] is the exception to the
//! scalar rule: it walks extended grapheme clusters, so a thumbs-up with a
//! skin-tone modifier or a ZWJ family counts as one emoji.
//!
//! Property sources:
//!
//! - general categories and `Emoji_Presentation`: `unicode-properties`
//!   (Unicode 16.0);
//! - case and white space: `char` methods from core;
//! - grapheme clusters: `unicode-segmentation`.

use serde::{Deserialize, Serialize};
use unicode_properties::{
    EmojiStatus, GeneralCategory, GeneralCategoryGroup, UnicodeEmoji, UnicodeGeneralCategory,
};
use unicode_segmentation::UnicodeSegmentation;

// ============================================================================
// SCALAR CLASSES
// ============================================================================

// Cased and uncased letters only. Case checks look at these.
#[inline]
fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

// Letters plus combining marks, so decomposed accents and Indic vowel
// signs stay part of a word.
#[inline]
fn is_alphabetic(c: char) -> bool {
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Letter | GeneralCategoryGroup::Mark
    )
}

#[inline]
fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

#[inline]
fn is_emoji_presentation(c: char) -> bool {
    matches!(
        c.emoji_status(),
        EmojiStatus::EmojiPresentation
            | EmojiStatus::EmojiPresentationAndModifierBase
            | EmojiStatus::EmojiPresentationAndEmojiComponent
            | EmojiStatus::EmojiPresentationAndModifierAndEmojiComponent
    )
}

// Symbols and punctuation, minus anything that renders as an emoji by
// default. 😀 is `So` but must not count as a symbol.
#[inline]
fn is_symbol(c: char) -> bool {
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Symbol | GeneralCategoryGroup::Punctuation
    ) && !is_emoji_presentation(c)
}

#[inline]
fn only(text: &str, class: impl Fn(char) -> bool) -> bool {
    !text.is_empty() && text.chars().all(class)
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Has at least one character, optionally after trimming white space and
/// newlines from both ends.
///
/// Trimming uses [`str::trim`], i.e. the Unicode `White_Space` property.
pub fn is_non_empty(text: &str, trim_whitespace: bool) -> bool {
    if trim_whitespace {
        !text.trim().is_empty()
    } else {
        !text.is_empty()
    }
}

/// Has at least one letter and every letter is lowercase.
///
/// Digits, punctuation and emoji are ignored, so `"hello 123"` passes and
/// `"123"` fails.
pub fn is_lowercased(text: &str) -> bool {
    letters_all(text, char::is_lowercase)
}

/// Has at least one letter and every letter is uppercase.
pub fn is_uppercased(text: &str) -> bool {
    letters_all(text, char::is_uppercase)
}

fn letters_all(text: &str, case: fn(char) -> bool) -> bool {
    let mut letters = text.chars().filter(|&c| is_letter(c)).peekable();
    letters.peek().is_some() && letters.all(case)
}

/// Non-empty and every scalar is a letter or a combining mark (`L*`, `M*`).
pub fn only_alphabet(text: &str) -> bool {
    only(text, is_alphabetic)
}

/// Non-empty and every scalar is a decimal digit (`Nd`, any script).
pub fn only_number(text: &str) -> bool {
    only(text, is_decimal_digit)
}

/// Non-empty and every scalar is a letter, a combining mark or a decimal
/// digit.
pub fn only_alphanumeric(text: &str) -> bool {
    only(text, |c| is_alphabetic(c) || is_decimal_digit(c))
}

/// Non-empty and every scalar is a symbol or punctuation mark that is not
/// presented as an emoji.
pub fn only_symbol(text: &str) -> bool {
    only(text, is_symbol)
}

/// Non-empty and every grapheme contains an `Emoji_Presentation` scalar.
pub fn only_emoji(text: &str) -> bool {
    !text.is_empty()
        && text
            .graphemes(true)
            .all(|grapheme| grapheme.chars().any(is_emoji_presentation))
}

/// Any scalar is white space or a newline. `false` for `""`.
pub fn contains_whitespace(text: &str) -> bool {
    text.chars().any(char::is_whitespace)
}

// ============================================================================
// PROFILE
// ============================================================================

/// Every text predicate evaluated once for the same input.
///
/// Meant for consumers that list which classes an input falls into, such
/// as a form showing "lowercased", "only emoji" next to a text field.
///
/// ```
/// use verdict_validator::rules::text::TextProfile;
///
/// let profile = TextProfile::of("hello 123");
/// assert!(profile.lowercased);
/// assert!(profile.contains_whitespace);
/// assert!(!profile.only_alphanumeric);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextProfile {
    /// [`is_non_empty`] with trimming.
    pub non_empty: bool,
    /// [`is_lowercased`].
    pub lowercased: bool,
    /// [`is_uppercased`].
    pub uppercased: bool,
    /// [`only_alphabet`].
    pub only_alphabet: bool,
    /// [`only_number`].
    pub only_number: bool,
    /// [`only_alphanumeric`].
    pub only_alphanumeric: bool,
    /// [`only_symbol`].
    pub only_symbol: bool,
    /// [`only_emoji`].
    pub only_emoji: bool,
    /// [`contains_whitespace`].
    pub contains_whitespace: bool,
}

impl TextProfile {
    /// Classifies `text`.
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        Self {
            non_empty: is_non_empty(text, true),
            lowercased: is_lowercased(text),
            uppercased: is_uppercased(text),
            only_alphabet: only_alphabet(text),
            only_number: only_number(text),
            only_alphanumeric: only_alphanumeric(text),
            only_symbol: only_symbol(text),
            only_emoji: only_emoji(text),
            contains_whitespace: contains_whitespace(text),
        }
    }
}

// ============================================================================
// CAPABILITY TRAIT
// ============================================================================

/// The text capability of a validator. Provided methods forward to this
/// module's free functions.
pub trait TextRules {
    /// See [`is_non_empty`].
    fn is_non_empty(&self, text: &str, trim_whitespace: bool) -> bool {
        is_non_empty(text, trim_whitespace)
    }

    /// See [`is_lowercased`].
    fn is_lowercased(&self, text: &str) -> bool {
        is_lowercased(text)
    }

    /// See [`is_uppercased`].
    fn is_uppercased(&self, text: &str) -> bool {
        is_uppercased(text)
    }

    /// See [`only_alphabet`].
    fn only_alphabet(&self, text: &str) -> bool {
        only_alphabet(text)
    }

    /// See [`only_number`].
    fn only_number(&self, text: &str) -> bool {
        only_number(text)
    }

    /// See [`only_alphanumeric`].
    fn only_alphanumeric(&self, text: &str) -> bool {
        only_alphanumeric(text)
    }

    /// See [`only_symbol`].
    fn only_symbol(&self, text: &str) -> bool {
        only_symbol(text)
    }

    /// See [`only_emoji`].
    fn only_emoji(&self, text: &str) -> bool {
        only_emoji(text)
    }

    /// See [`contains_whitespace`].
    fn contains_whitespace(&self, text: &str) -> bool {
        contains_whitespace(text)
    }

    /// See [`TextProfile::of`].
    fn profile(&self, text: &str) -> TextProfile {
        TextProfile::of(text)
    }
}

//! Text rule objects
//!
//! Thin wrappers over [`crate::rules::text`]; see there for the exact
//! character classes.

use crate::foundation::ValidationError;
use crate::rules::text;

crate::validator! {
    /// Validates that text has at least one character.
    ///
    /// With `trim_whitespace`, white space and newlines at either end do not
    /// count.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict_validator::foundation::Validate;
    /// use verdict_validator::validators::non_empty;
    ///
    /// assert!(non_empty(false).validate("  ").is_ok());
    /// assert!(non_empty(true).validate("  ").is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub NonEmpty { trim_whitespace: bool } for str;
    rule(self, input) { text::is_non_empty(input, self.trim_whitespace) }
    error(self, input) {
        ValidationError::new("non_empty", "Text must not be empty")
            .with_param("trim_whitespace", self.trim_whitespace.to_string())
    }
    new(trim_whitespace: bool) { Self { trim_whitespace } }
    fn non_empty(trim_whitespace: bool);
}

crate::validator! {
    /// Validates that text has a letter and no uppercase letters.
    pub Lowercased for str;
    rule(input) { text::is_lowercased(input) }
    error(input) { ValidationError::new("lowercased", "Text must be lowercase") }
    fn lowercased();
}

crate::validator! {
    /// Validates that text has a letter and no lowercase letters.
    pub Uppercased for str;
    rule(input) { text::is_uppercased(input) }
    error(input) { ValidationError::new("uppercased", "Text must be uppercase") }
    fn uppercased();
}

crate::validator! {
    /// Validates that text consists of letters only.
    pub OnlyAlphabet for str;
    rule(input) { text::only_alphabet(input) }
    error(input) { ValidationError::new("only_alphabet", "Text must contain only letters") }
    fn only_alphabet();
}

crate::validator! {
    /// Validates that text consists of decimal digits only.
    pub OnlyNumber for str;
    rule(input) { text::only_number(input) }
    error(input) { ValidationError::new("only_number", "Text must contain only digits") }
    fn only_number();
}

crate::validator! {
    /// Validates that text consists of letters and decimal digits only.
    pub OnlyAlphanumeric for str;
    rule(input) { text::only_alphanumeric(input) }
    error(input) {
        ValidationError::new("only_alphanumeric", "Text must contain only letters and digits")
    }
    fn only_alphanumeric();
}

crate::validator! {
    /// Validates that text consists of symbols and punctuation only.
    pub OnlySymbol for str;
    rule(input) { text::only_symbol(input) }
    error(input) { ValidationError::new("only_symbol", "Text must contain only symbols") }
    fn only_symbol();
}

crate::validator! {
    /// Validates that every grapheme of the text is an emoji.
    pub OnlyEmoji for str;
    rule(input) { text::only_emoji(input) }
    error(input) { ValidationError::new("only_emoji", "Text must contain only emoji") }
    fn only_emoji();
}

crate::validator! {
    /// Validates that text contains no white space or newlines.
    pub NoWhitespace for str;
    rule(input) { !text::contains_whitespace(input) }
    error(input) { ValidationError::new("no_whitespace", "Text must not contain white space") }
    fn no_whitespace();
}

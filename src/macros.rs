//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits the whole match
//!   as one token of a fixed kind

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $span:expr) => {
        Token {
            kind: $kind,
            text: $text,
            span: $span,
        }
    };
}

/// Creates a lexer handler that pushes the matched text as a token of
/// `$kind` and moves the cursor past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[(){},;:]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuation),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, regex: &Regex| {
            if let Some(matched) = regex.find(lexer.remainder()) {
                let text = matched.as_str().to_string();
                let start = lexer.position();
                lexer.advance_n(text.len());
                let end = lexer.position();
                lexer.push(MK_TOKEN!($kind, text, Span { start, end }));
            }
        }
    };
}

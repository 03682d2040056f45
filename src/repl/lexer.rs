//! Command lexer: tokenizes one REPL input line.

use crate::{Error, Result};

/// A token from the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

/// Source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    New, Flip, Swap, Reflect, Rotate, Random, Invert, Reset,
    Show, Json, Color, Uncolor, Between, Subcube,
    Help, Verbose, Exit,

    // Literals
    Number,   // digits: a count, an axis or a bit string
    Pattern,  // 0, 1 and at least one *

    // Any other word, e.g. a color name
    Word,

    Eof,
}

impl TokenKind {
    /// Whether this token starts a command.
    pub fn is_command(self) -> bool {
        matches!(self,
            TokenKind::New | TokenKind::Flip | TokenKind::Swap | TokenKind::Reflect |
            TokenKind::Rotate | TokenKind::Random | TokenKind::Invert | TokenKind::Reset |
            TokenKind::Show | TokenKind::Json | TokenKind::Color | TokenKind::Uncolor |
            TokenKind::Help | TokenKind::Verbose | TokenKind::Exit
        )
    }
}

/// Tokenize a command line.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => { chars.next(); }

            // Comment to end of line
            '#' => {
                while chars.next().is_some() {}
            }

            // Numbers, bit strings and wildcard patterns
            c if c.is_ascii_digit() || c == '*' => {
                let start = pos;
                let mut text = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '*' {
                        text.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: if text.contains('*') { TokenKind::Pattern } else { TokenKind::Number },
                    span: Span { start, end: start + text.len() },
                    text,
                });
            }

            // Keywords and words
            c if c.is_alphabetic() || c == '_' => {
                let start = pos;
                let mut ident = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        ident.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let kind = keyword_or_word(&ident);
                tokens.push(Token {
                    kind,
                    span: Span { start, end: start + ident.len() },
                    text: ident,
                });
            }

            other => {
                return Err(Error::InvalidCommand {
                    position: pos,
                    message: format!("Unexpected character: '{other}'"),
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span { start: input.len(), end: input.len() },
        text: String::new(),
    });

    Ok(tokens)
}

fn keyword_or_word(s: &str) -> TokenKind {
    match s.to_lowercase().as_str() {
        "new" | "dim" => TokenKind::New,
        "flip" => TokenKind::Flip,
        "swap" => TokenKind::Swap,
        "reflect" => TokenKind::Reflect,
        "rotate" => TokenKind::Rotate,
        "random" => TokenKind::Random,
        "invert" => TokenKind::Invert,
        "reset" => TokenKind::Reset,
        "show" => TokenKind::Show,
        "json" => TokenKind::Json,
        "color" => TokenKind::Color,
        "uncolor" => TokenKind::Uncolor,
        "between" => TokenKind::Between,
        "subcube" => TokenKind::Subcube,
        "help" => TokenKind::Help,
        "verbose" => TokenKind::Verbose,
        "exit" | "quit" => TokenKind::Exit,
        _ => TokenKind::Word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(kinds("new 3 flip 0"), vec![
            TokenKind::New,
            TokenKind::Number,
            TokenKind::Flip,
            TokenKind::Number,
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(kinds("ReFlEcT 01 QUIT"), vec![
            TokenKind::Reflect,
            TokenKind::Number,
            TokenKind::Exit,
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_pattern_and_color_word() {
        let tokens = tokenize("color subcube 1*0 red").unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Pattern);
        assert_eq!(tokens[2].text, "1*0");
        assert_eq!(tokens[3].kind, TokenKind::Word);
        assert_eq!(tokens[3].text, "red");
    }

    #[test]
    fn test_bit_string_keeps_leading_zeros() {
        let tokens = tokenize("reflect 0010").unwrap();
        assert_eq!(tokens[1].text, "0010");
        assert_eq!(tokens[1].span, Span { start: 8, end: 12 });
    }

    #[test]
    fn test_comment() {
        assert_eq!(kinds("reset # back to the start"), vec![TokenKind::Reset, TokenKind::Eof]);
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("flip 0; reset").unwrap_err();
        assert!(matches!(err, Error::InvalidCommand { position: 6, .. }));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(kinds("   "), vec![TokenKind::Eof]);
    }
}

//! Command recursive descent parser.
//!
//! A line is a sequence of commands with no separators; each command
//! consumes exactly the arguments it needs.

use crate::render::Color;
use crate::{Error, Result};
use super::ast::*;
use super::lexer::{Token, TokenKind};

/// Parser state: a token slice with a cursor.
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn advance(&mut self) -> &Token {
        let tok = &self.tokens[self.pos.min(self.tokens.len() - 1)];
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<&Token> {
        let tok = self.peek();
        if tok.kind == kind {
            Ok(self.advance())
        } else {
            Err(self.error(format!("Expected {what}, got {}", describe(tok))))
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error(&self, msg: String) -> Error {
        Error::InvalidCommand {
            position: self.peek().span.start,
            message: msg,
        }
    }

    fn number(&mut self, what: &str) -> Result<usize> {
        let tok = self.expect(TokenKind::Number, what)?;
        let (text, start) = (tok.text.clone(), tok.span.start);
        text.parse().map_err(|_| Error::InvalidCommand {
            position: start,
            message: format!("{text} is too large for {what}"),
        })
    }
}

fn describe(tok: &Token) -> String {
    match tok.kind {
        TokenKind::Eof => "end of line".into(),
        _ => format!("'{}'", tok.text),
    }
}

/// Parse every command on a tokenized line. An empty line yields no commands.
pub fn parse_commands(tokens: &[Token]) -> Result<Vec<Command>> {
    let mut p = Parser::new(tokens);
    let mut commands = Vec::new();
    while !p.at(TokenKind::Eof) {
        commands.push(parse_command(&mut p)?);
    }
    Ok(commands)
}

fn parse_command(p: &mut Parser<'_>) -> Result<Command> {
    let kind = p.peek_kind();
    if !kind.is_command() {
        return Err(p.error(format!("Unknown command {}", describe(p.peek()))));
    }
    p.advance();

    Ok(match kind {
        TokenKind::New => Command::New(p.number("a dimension")?),
        TokenKind::Flip => Command::Flip(p.number("an axis")?),
        TokenKind::Swap => {
            let i = p.number("an axis")?;
            let j = p.number("a second axis")?;
            Command::Swap(i, j)
        }
        TokenKind::Reflect => {
            Command::Reflect(p.expect(TokenKind::Number, "a bit string")?.text.clone())
        }
        TokenKind::Rotate => {
            let mut order = vec![p.number("a bit order")?];
            while p.at(TokenKind::Number) {
                order.push(p.number("a bit order")?);
            }
            Command::Rotate(order)
        }
        TokenKind::Random => Command::Random,
        TokenKind::Invert => Command::Invert,
        TokenKind::Reset => Command::Reset,
        TokenKind::Show => Command::Show,
        TokenKind::Json => Command::Json,
        TokenKind::Color => {
            let target = parse_target(p)?;
            let color = parse_color(p)?;
            Command::Color { target, color }
        }
        TokenKind::Uncolor => Command::Uncolor { target: parse_target(p)? },
        TokenKind::Help => Command::Help,
        TokenKind::Verbose => Command::Verbose,
        _ => Command::Exit,
    })
}

fn parse_target(p: &mut Parser<'_>) -> Result<Target> {
    if p.eat(TokenKind::Subcube) {
        let pattern = p.expect(TokenKind::Pattern, "a pattern such as 1*0")?;
        return Ok(Target::Subcube(pattern.text.clone()));
    }
    if p.eat(TokenKind::Between) {
        return Ok(Target::Between(parse_vertex_set(p)?));
    }
    Ok(Target::Vertices(parse_vertex_set(p)?))
}

fn parse_vertex_set(p: &mut Parser<'_>) -> Result<VertexSet> {
    if p.at(TokenKind::Pattern) {
        return Ok(VertexSet::Pattern(p.advance().text.clone()));
    }
    let mut labels = vec![p.expect(TokenKind::Number, "a vertex or pattern")?.text.clone()];
    while p.at(TokenKind::Number) {
        labels.push(p.advance().text.clone());
    }
    Ok(VertexSet::Labels(labels))
}

fn parse_color(p: &mut Parser<'_>) -> Result<Color> {
    if !p.at(TokenKind::Word) {
        return Err(p.error(format!("Expected a color, got {}", describe(p.peek()))));
    }
    let name = p.peek().text.to_lowercase();
    match Color::from_name(&name) {
        Some(color) => {
            p.advance();
            Ok(color)
        }
        None => {
            let known: Vec<&str> = Color::ALL.iter().map(|c| c.name()).collect();
            Err(p.error(format!("Unknown color '{name}', expected one of {}", known.join(", "))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::lexer::tokenize;

    fn parse(input: &str) -> Result<Vec<Command>> {
        parse_commands(&tokenize(input)?)
    }

    #[test]
    fn test_single_commands() {
        assert_eq!(parse("new 4").unwrap(), vec![Command::New(4)]);
        assert_eq!(parse("dim 0").unwrap(), vec![Command::New(0)]);
        assert_eq!(parse("swap 0 2").unwrap(), vec![Command::Swap(0, 2)]);
        assert_eq!(parse("reflect 010").unwrap(), vec![Command::Reflect("010".into())]);
        assert_eq!(parse("rotate 2 0 1").unwrap(), vec![Command::Rotate(vec![2, 0, 1])]);
        assert_eq!(parse("quit").unwrap(), vec![Command::Exit]);
    }

    #[test]
    fn test_several_commands_on_one_line() {
        assert_eq!(
            parse("new 2 flip 0 rotate 1 0 show").unwrap(),
            vec![
                Command::New(2),
                Command::Flip(0),
                Command::Rotate(vec![1, 0]),
                Command::Show,
            ]
        );
    }

    #[test]
    fn test_color_targets() {
        assert_eq!(
            parse("color 000 011 red").unwrap(),
            vec![Command::Color {
                target: Target::Vertices(VertexSet::Labels(vec!["000".into(), "011".into()])),
                color: Color::Red,
            }]
        );
        assert_eq!(
            parse("color between 1*0 Blue").unwrap(),
            vec![Command::Color {
                target: Target::Between(VertexSet::Pattern("1*0".into())),
                color: Color::Blue,
            }]
        );
        assert_eq!(
            parse("uncolor subcube **1 reset").unwrap(),
            vec![Command::Uncolor { target: Target::Subcube("**1".into()) }, Command::Reset]
        );
    }

    #[test]
    fn test_empty_line() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_argument() {
        assert!(matches!(parse("flip"), Err(Error::InvalidCommand { position: 4, .. })));
        assert!(matches!(parse("swap 1"), Err(Error::InvalidCommand { .. })));
        assert!(matches!(parse("rotate"), Err(Error::InvalidCommand { .. })));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(parse("spin 3"), Err(Error::InvalidCommand { position: 0, .. })));
        assert!(matches!(parse("flip 0 between"), Err(Error::InvalidCommand { position: 7, .. })));
    }

    #[test]
    fn test_unknown_color() {
        let err = parse("color 01 mauve").unwrap_err();
        assert!(err.to_string().contains("mauve"));
    }

    #[test]
    fn test_subcube_needs_pattern() {
        assert!(parse("color subcube 101 red").is_err());
    }

    #[test]
    fn test_number_overflow() {
        assert!(matches!(
            parse("new 99999999999999999999999"),
            Err(Error::InvalidCommand { position: 4, .. })
        ));
    }
}

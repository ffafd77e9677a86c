//! End-to-end scans through the public API.

use loxscan::{Diagnostics, Literal, Reporter, ScanError, ScanOptions, Scanner, Token, TokenKind};

fn scan(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diag = Diagnostics::new();
    let tokens = Scanner::new(source).scan(&mut diag);
    (tokens, diag)
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(Token::kind).collect()
}

/// Counts reports and keeps only the lines.
#[derive(Default)]
struct Lines(Vec<usize>);

impl Reporter for Lines {
    fn report(&mut self, error: ScanError) {
        self.0.push(error.line());
    }
}

#[test]
fn empty_input_is_just_eof() {
    let (tokens, diag) = scan("");
    assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
    assert_eq!(tokens[0].line(), 1);
    assert!(!diag.had_error());
}

#[test]
fn bang_equal_is_one_token() {
    let (tokens, _) = scan("!=");
    assert_eq!(kinds(&tokens), vec![TokenKind::BangEqual, TokenKind::Eof]);
}

#[test]
fn comment_then_plus() {
    let (tokens, _) = scan("// hello\n+");
    assert_eq!(kinds(&tokens), vec![TokenKind::Plus, TokenKind::Eof]);
    assert_eq!(tokens[0].line(), 2);
    assert_eq!(tokens[1].line(), 2);
}

#[test]
fn closed_string() {
    let (tokens, diag) = scan("\"abc\"");
    assert!(!diag.had_error());
    assert_eq!(kinds(&tokens), vec![TokenKind::String, TokenKind::Eof]);
    assert_eq!(tokens[0].literal(), Some(&Literal::String("abc".into())));
}

#[test]
fn multi_line_string_takes_opening_line() {
    let (tokens, diag) = scan("\"a\nb\nc\"");
    assert!(!diag.had_error());
    assert_eq!(kinds(&tokens), vec![TokenKind::String, TokenKind::Eof]);
    assert_eq!(tokens[0].line(), 1);
    assert_eq!(tokens[1].line(), 3);
}

#[test]
fn unterminated_string_reports_once() {
    let (tokens, diag) = scan("\"abc");
    assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
    assert_eq!(diag.len(), 1);
    assert_eq!(
        diag.errors()[0].to_string(),
        "[line 1] Error: Unterminated string."
    );
}

#[test]
fn whitespace_only() {
    let (tokens, diag) = scan("  \t\r\n");
    assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
    assert_eq!(tokens[0].line(), 2);
    assert!(!diag.had_error());
}

#[test]
fn bad_character_does_not_abort() {
    let (tokens, diag) = scan("@+");
    assert_eq!(kinds(&tokens), vec![TokenKind::Plus, TokenKind::Eof]);
    assert_eq!(diag.len(), 1);
    assert_eq!(
        diag.errors()[0].to_string(),
        "[line 1] Error: Unexpected character."
    );
}

#[test]
fn coalescing_is_opt_in() {
    let (_, diag) = scan("@@@+");
    assert_eq!(diag.len(), 3);

    let mut diag = Diagnostics::new();
    let options = ScanOptions {
        coalesce_unexpected: true,
    };
    let tokens = Scanner::with_options("@@@+", options).scan(&mut diag);
    assert_eq!(kinds(&tokens), vec![TokenKind::Plus, TokenKind::Eof]);
    assert_eq!(diag.len(), 1);
    assert_eq!(diag.errors()[0].message(), "Unexpected characters.");
}

#[test]
fn custom_reporter_sees_every_error() {
    let mut lines = Lines::default();
    let tokens = Scanner::new("@\n#\n\"open").scan(&mut lines);
    assert_eq!(lines.0, vec![1, 2, 3]);
    assert_eq!(tokens.last().map(Token::line), Some(3));
}

#[test]
fn small_program() {
    let source = r#"// greet
var name = "lox";
if (name != nil) {
    print name + 1.5;
}
"#;
    let (tokens, diag) = scan(source);
    assert!(!diag.had_error());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::String,
            TokenKind::Semicolon,
            TokenKind::If,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::BangEqual,
            TokenKind::Nil,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Print,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Eof,
        ]
    );

    let lines: Vec<_> = tokens.iter().map(Token::line).collect();
    assert_eq!(
        lines,
        vec![2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 5, 6]
    );
    assert_eq!(tokens[15].literal(), Some(&Literal::Number(1.5)));
}

#[test]
fn newline_count_matches_eof_line() {
    let sources = [
        "",
        "\n\n\n",
        "a\nb // c\n\"d\ne\"\n@\n",
        "\"never\nclosed\n",
        "\r\n\r\n",
    ];

    for source in sources {
        let (tokens, _) = scan(source);
        let eofs = tokens.iter().filter(|t| t.kind() == TokenKind::Eof).count();
        assert_eq!(eofs, 1, "{source:?}");
        assert_eq!(tokens.last().map(Token::kind), Some(TokenKind::Eof));
        assert_eq!(
            tokens.last().map(Token::line),
            Some(source.matches('\n').count() + 1),
            "{source:?}"
        );
    }
}

use logos::Logos;

/// Represents a lexical token in an arithmetic expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// The literal text is kept verbatim and only parsed during postfix
    /// evaluation, so a malformed run like `1.2.3` still lexes as a single
    /// literal.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Tokenizes a variable-substituted expression in a single left-to-right
/// scan.
///
/// Characters that match no token (anything other than digits, `.`, the
/// four operators, and parentheses) are dropped; in a well-formed pipeline
/// variable substitution has already consumed every letter.
///
/// # Parameters
/// - `expression`: Expression text with whitespace stripped and variables
///   substituted.
///
/// # Returns
/// The ordered token sequence.
///
/// # Example
/// ```
/// use shunt::evaluator::lexer::{tokenize, Token};
///
/// let tokens = tokenize("(1+2)*3");
/// assert_eq!(tokens.len(), 7);
/// assert_eq!(tokens[0], Token::LParen);
/// assert_eq!(tokens[1], Token::Number("1".to_string()));
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        }
    }

    tokens
}

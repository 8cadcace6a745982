use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\n\f]+")] // Whitespace carries no meaning in signature text
pub enum Token {
    // --- Delimiters ---
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("->")]
    Arrow, // General notation (inputs...) -> result

    // --- Literals ---

    // Operand references (ex: %a, %arg0, %0); the leading % is stripped
    #[regex(r"%[a-zA-Z0-9_]+", |lex| lex.slice()[1..].to_string())]
    ValueRef(String),

    // One dimension of a tensor shape (ex: the "4x" in tensor<4x8xf32>)
    #[regex(r"[0-9]+x", |lex| { let s = lex.slice(); s[..s.len() - 1].parse::<u64>().ok() })]
    Dim(u64),

    // Bare integers (ex: attribute values)
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    // Identifiers: operation names, type keywords, scalar names (ex: "tensor", "i32", "e5m2")
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Anything the grammar has no token for; surfaced as a parse error later
    #[regex(r"[^ \t\n\f]", priority = 0)]
    Error,
}

// This helps to show the token prettily in the print
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

//! Tokenizer for replacement formulas.

use list2d_core::ExpressionError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Int(i64),
    Float(f64),
    Str(String),
    Ident(String),
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    Percent,
    LParen,
    RParen,
    Comma,
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub offset: usize,
}

pub fn tokenize(src: &str) -> Result<Vec<Spanned>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let token = match c {
            '0'..='9' | '.' => lex_number(src, &mut chars)?,
            '\'' | '"' => lex_string(src, &mut chars)?,
            c if c.is_alphabetic() || c == '_' => {
                let mut end = offset;
                while let Some(&(i, ch)) = chars.peek() {
                    if ch.is_alphanumeric() || ch == '_' {
                        end = i + ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Ident(src[offset..end].to_string())
            }
            _ => {
                chars.next();
                match c {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '%' => Token::Percent,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    ',' => Token::Comma,
                    '*' => {
                        if chars.next_if(|&(_, ch)| ch == '*').is_some() {
                            Token::DoubleStar
                        } else {
                            Token::Star
                        }
                    }
                    '/' => {
                        if chars.next_if(|&(_, ch)| ch == '/').is_some() {
                            Token::DoubleSlash
                        } else {
                            Token::Slash
                        }
                    }
                    other => {
                        return Err(ExpressionError::Syntax {
                            offset,
                            message: format!("unexpected character {other:?}"),
                        })
                    }
                }
            }
        };
        tokens.push(Spanned { token, offset });
    }

    Ok(tokens)
}

type CharStream<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

fn lex_number(src: &str, chars: &mut CharStream<'_>) -> Result<Token, ExpressionError> {
    let start = chars.peek().map_or(src.len(), |&(i, _)| i);
    let mut end = start;
    let mut seen_dot = false;

    while let Some(&(i, ch)) = chars.peek() {
        if ch.is_ascii_digit() || (ch == '.' && !seen_dot) {
            seen_dot |= ch == '.';
            end = i + 1;
            chars.next();
        } else {
            break;
        }
    }

    let text = &src[start..end];
    if text == "." {
        return Err(ExpressionError::Syntax {
            offset: start,
            message: "expected digits around '.'".to_string(),
        });
    }

    if seen_dot {
        text.parse::<f64>()
            .map(Token::Float)
            .map_err(|e| ExpressionError::Syntax {
                offset: start,
                message: format!("invalid float literal {text:?}: {e}"),
            })
    } else {
        text.parse::<i64>()
            .map(Token::Int)
            .map_err(|_| ExpressionError::Syntax {
                offset: start,
                message: format!("integer literal {text} does not fit in 64 bits"),
            })
    }
}

fn lex_string(src: &str, chars: &mut CharStream<'_>) -> Result<Token, ExpressionError> {
    let (start, quote) = match chars.next() {
        Some(pair) => pair,
        None => {
            return Err(ExpressionError::Syntax {
                offset: src.len(),
                message: "expected string literal".to_string(),
            })
        }
    };
    let mut out = String::new();

    loop {
        match chars.next() {
            Some((_, ch)) if ch == quote => return Ok(Token::Str(out)),
            Some((i, '\\')) => match chars.next() {
                Some((_, 'n')) => out.push('\n'),
                Some((_, 't')) => out.push('\t'),
                Some((_, 'r')) => out.push('\r'),
                Some((_, '\\')) => out.push('\\'),
                Some((_, '\'')) => out.push('\''),
                Some((_, '"')) => out.push('"'),
                Some((_, other)) => {
                    return Err(ExpressionError::Syntax {
                        offset: i,
                        message: format!("unknown escape \\{other}"),
                    })
                }
                None => break,
            },
            Some((_, ch)) => out.push(ch),
            None => break,
        }
    }

    Err(ExpressionError::Syntax {
        offset: start,
        message: "unterminated string literal".to_string(),
    })
}

// Line-oriented JSON highlighting for the result viewer

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Key,
    String,
    Number,
    /// true / false / null
    Literal,
    /// Braces, brackets, separators and indentation
    Punctuation,
}

impl TokenKind {
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::Key => "json-key",
            TokenKind::String => "json-string",
            TokenKind::Number => "json-number",
            TokenKind::Literal => "json-literal",
            TokenKind::Punctuation => "json-punct",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: TokenKind,
    pub text: String,
}

/// Pretty-print `value` and split every line into highlighted spans
pub fn highlight_json(value: &Value) -> Vec<Vec<Span>> {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_default();
    pretty.lines().map(highlight_line).collect()
}

/// Tokenize one line of pretty-printed JSON.
/// Concatenating the span texts reproduces the line.
pub fn highlight_line(line: &str) -> Vec<Span> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = i;
        let kind = match chars[i] {
            '"' => {
                i += 1;
                while i < chars.len() {
                    match chars[i] {
                        '\\' => i += 2,
                        '"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
                i = i.min(chars.len());
                let next = chars[i..].iter().find(|c| !c.is_whitespace());
                if next == Some(&':') {
                    TokenKind::Key
                } else {
                    TokenKind::String
                }
            }
            c if c == '-' || c.is_ascii_digit() => {
                while i < chars.len()
                    && (chars[i].is_ascii_digit() || matches!(chars[i], '-' | '+' | '.' | 'e' | 'E'))
                {
                    i += 1;
                }
                TokenKind::Number
            }
            c if c.is_ascii_alphabetic() => {
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                TokenKind::Literal
            }
            _ => {
                i += 1;
                TokenKind::Punctuation
            }
        };

        push_span(&mut spans, kind, chars[start..i].iter().collect());
    }

    spans
}

fn push_span(spans: &mut Vec<Span>, kind: TokenKind, text: String) {
    if kind == TokenKind::Punctuation {
        if let Some(last) = spans.last_mut() {
            if last.kind == TokenKind::Punctuation {
                last.text.push_str(&text);
                return;
            }
        }
    }
    spans.push(Span { kind, text });
}

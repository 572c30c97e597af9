//! Template parser.
//!
//! Parsing runs in three passes:
//!
//! ```text
//! source ─► tokens (nom) ─► standalone-line stripping ─► node tree
//! ```
//!
//! A section, inverted-section, closing or comment tag that is the only
//! non-blank content of its line removes that whole line, so a template can
//! place section tags on their own lines without leaving blank lines behind.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{one_of, space0},
    combinator::{all_consuming, map, opt, rest, verify},
    multi::many0,
    sequence::{delimited, pair},
};

use crate::ast::{FIRST_SECTION, Node};
use crate::error::{Result, TemplateError};

const SNIPPET_CHARS: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(String),
    Variable { name: &'a str, escape: bool },
    Open(&'a str),
    Inverted(&'a str),
    Close(&'a str),
    Comment,
}

impl Token<'_> {
    fn may_stand_alone(&self) -> bool {
        matches!(
            self,
            Token::Open(_) | Token::Inverted(_) | Token::Close(_) | Token::Comment
        )
    }
}

/// Parse template source into a node tree.
pub fn parse(source: &str) -> Result<Vec<Node>> {
    let mut tokens = tokenize(source)?;
    strip_standalone_lines(&mut tokens);
    build_tree(tokens)
}

// ============================================================================
// Tokens
// ============================================================================

fn tokenize(source: &str) -> Result<Vec<Token<'_>>> {
    match all_consuming(many0(token))(source) {
        Ok((_, tokens)) => Ok(tokens),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(syntax_error(source, e.input)),
        Err(nom::Err::Incomplete(_)) => Err(syntax_error(source, "")),
    }
}

fn syntax_error(source: &str, remaining: &str) -> TemplateError {
    TemplateError::Syntax {
        offset: source.len() - remaining.len(),
        snippet: remaining.chars().take(SNIPPET_CHARS).collect(),
    }
}

fn token(input: &str) -> IResult<&str, Token<'_>> {
    alt((verbatim_variable, comment, tag_token, text))(input)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

fn name(input: &str) -> IResult<&str, &str> {
    delimited(space0, take_while1(is_name_char), space0)(input)
}

fn verbatim_variable(input: &str) -> IResult<&str, Token<'_>> {
    map(delimited(tag("{{{"), name, tag("}}}")), |name| {
        Token::Variable {
            name,
            escape: false,
        }
    })(input)
}

fn comment(input: &str) -> IResult<&str, Token<'_>> {
    map(
        delimited(tag("{{!"), take_until("}}"), tag("}}")),
        |_| Token::Comment,
    )(input)
}

fn tag_token(input: &str) -> IResult<&str, Token<'_>> {
    map(
        delimited(
            pair(tag("{{"), space0),
            pair(opt(one_of("#^/&")), name),
            tag("}}"),
        ),
        |(sigil, name)| match sigil {
            Some('#') => Token::Open(name),
            Some('^') => Token::Inverted(name),
            Some('/') => Token::Close(name),
            Some(_) => Token::Variable {
                name,
                escape: false,
            },
            None => Token::Variable { name, escape: true },
        },
    )(input)
}

fn text(input: &str) -> IResult<&str, Token<'_>> {
    map(
        verify(alt((take_until("{{"), rest)), |s: &str| !s.is_empty()),
        |s: &str| Token::Text(s.to_string()),
    )(input)
}

// ============================================================================
// Standalone lines
// ============================================================================

fn strip_standalone_lines(tokens: &mut [Token<'_>]) {
    if tokens.is_empty() {
        return;
    }
    let last = tokens.len() - 1;
    let mut strip_head = vec![false; tokens.len()];
    let mut strip_tail = vec![false; tokens.len()];

    for i in 0..tokens.len() {
        if tokens[i].may_stand_alone()
            && line_is_blank_before(tokens, i)
            && line_is_blank_after(tokens, i, last)
        {
            if i > 0 {
                strip_tail[i - 1] = true;
            }
            if i < last {
                strip_head[i + 1] = true;
            }
        }
    }

    for (i, token) in tokens.iter_mut().enumerate() {
        if let Token::Text(text) = token
            && (strip_head[i] || strip_tail[i])
        {
            *text = trim_line_edges(text, strip_head[i], strip_tail[i]);
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.chars().all(|c| matches!(c, ' ' | '\t' | '\r'))
}

fn line_is_blank_before(tokens: &[Token<'_>], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    match &tokens[i - 1] {
        Token::Text(text) => match text.rfind('\n') {
            Some(pos) => is_blank(&text[pos + 1..]),
            None => i == 1 && is_blank(text),
        },
        _ => false,
    }
}

fn line_is_blank_after(tokens: &[Token<'_>], i: usize, last: usize) -> bool {
    if i == last {
        return true;
    }
    match &tokens[i + 1] {
        Token::Text(text) => match text.find('\n') {
            Some(pos) => is_blank(&text[..pos]),
            None => i + 1 == last && is_blank(text),
        },
        _ => false,
    }
}

/// Drop the first line (through its newline) and/or the trailing partial line.
fn trim_line_edges(text: &str, head: bool, tail: bool) -> String {
    let start = if head {
        text.find('\n').map_or(text.len(), |pos| pos + 1)
    } else {
        0
    };
    let end = if tail {
        text.rfind('\n').map_or(0, |pos| pos + 1)
    } else {
        text.len()
    };
    text[start..end.max(start)].to_string()
}

// ============================================================================
// Tree
// ============================================================================

struct Frame {
    name: String,
    inverted: bool,
    children: Vec<Node>,
}

impl Frame {
    fn new(name: &str, inverted: bool) -> Self {
        Self {
            name: name.to_string(),
            inverted,
            children: Vec::new(),
        }
    }
}

fn build_tree(tokens: Vec<Token<'_>>) -> Result<Vec<Node>> {
    let mut root = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for token in tokens {
        let node = match token {
            Token::Text(text) if text.is_empty() => continue,
            Token::Text(text) => Node::Text(text),
            Token::Comment => continue,
            Token::Variable { name, escape } => Node::Variable {
                name: name.to_string(),
                escape,
            },
            Token::Open(name) => {
                stack.push(Frame::new(name, false));
                continue;
            }
            Token::Inverted(name) => {
                stack.push(Frame::new(name, true));
                continue;
            }
            Token::Close(name) => {
                let frame = stack.pop().ok_or_else(|| TemplateError::UnexpectedClose {
                    name: name.to_string(),
                })?;
                if frame.name != name {
                    return Err(TemplateError::MismatchedSection {
                        expected: frame.name,
                        found: name.to_string(),
                    });
                }
                if frame.name == FIRST_SECTION && !frame.inverted {
                    Node::First(frame.children)
                } else {
                    Node::Section {
                        name: frame.name,
                        inverted: frame.inverted,
                        children: frame.children,
                    }
                }
            }
        };
        match stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => root.push(node),
        }
    }

    match stack.pop() {
        Some(frame) => Err(TemplateError::UnclosedSection { name: frame.name }),
        None => Ok(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_all_tag_kinds() {
        let tokens = tokenize("a {{{road}}} {{city}} {{& x}}{{#s}}{{^t}}{{/t}}{{/s}}{{! note }}")
            .expect("valid template");
        assert_eq!(
            tokens,
            vec![
                Token::Text("a ".to_string()),
                Token::Variable {
                    name: "road",
                    escape: false
                },
                Token::Text(" ".to_string()),
                Token::Variable {
                    name: "city",
                    escape: true
                },
                Token::Text(" ".to_string()),
                Token::Variable {
                    name: "x",
                    escape: false
                },
                Token::Open("s"),
                Token::Inverted("t"),
                Token::Close("t"),
                Token::Close("s"),
                Token::Comment,
            ]
        );
    }

    #[test]
    fn tag_names_tolerate_inner_spaces() {
        let tokens = tokenize("{{ # first }}{{/first}}").expect("valid template");
        assert_eq!(tokens, vec![Token::Open("first"), Token::Close("first")]);
    }

    #[test]
    fn reports_offset_of_malformed_tag() {
        let err = tokenize("road {{city").unwrap_err();
        assert_eq!(
            err,
            TemplateError::Syntax {
                offset: 5,
                snippet: "{{city".to_string()
            }
        );
    }

    #[test]
    fn trims_line_edges() {
        assert_eq!(trim_line_edges("  \nnext", true, false), "next");
        assert_eq!(trim_line_edges("prev\n  ", false, true), "prev\n");
        assert_eq!(trim_line_edges("\n", true, true), "");
        assert_eq!(trim_line_edges("   ", true, true), "");
    }
}

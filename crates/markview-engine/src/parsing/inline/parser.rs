use std::sync::OnceLock;

use regex::Regex;

use super::{
    kinds::{CodeSpan, Email, Emphasis, Link, Strikethrough, Strong},
    types::Span,
};

/// Alternation used to split a line into delimiter tokens and the text
/// between them. Branch order is precedence order: at a given position
/// the first branch that matches wins.
fn split_pattern() -> &'static Regex {
    static SPLIT: OnceLock<Regex> = OnceLock::new();
    SPLIT.get_or_init(|| {
        let pattern = format!(
            r"\*\*.*?\*\*|__.*?__|_.*?_|~~.*?~~|`.*?`|\[.*?\]\(.*?\)|\*.*?\*|{}",
            Email::PATTERN
        );
        Regex::new(&pattern).expect("Invalid inline split regex")
    })
}

/// Tokenizes one line of text into an ordered sequence of [`Span`]s.
///
/// The line is split into delimiter tokens (matched pairs only) and the
/// plain text between them. Each token is then classified in order:
/// email, code, `**` bold, `__` bold, `_` italic, `~~` strikethrough,
/// link, `*` italic, plain. A token containing an address anywhere, even
/// inside code or link markup, becomes an email span of just that address.
///
/// `**bold**` content is tokenized again and every child span gets the
/// bold flag, so `**bold _and italic_**` keeps its italic part. `__bold__`
/// content stays flat.
///
/// Unterminated markers never produce a token, so they remain plain text.
pub fn tokenize(line: &str) -> Vec<Span> {
    let mut out = vec![];
    for part in split_keeping_delimiters(line) {
        push_token(&mut out, part);
    }
    out
}

/// Splits `line` around every match of the split pattern, keeping both the
/// matches and the non-empty text between them.
fn split_keeping_delimiters(line: &str) -> Vec<&str> {
    let mut parts = vec![];
    let mut last = 0usize;
    for m in split_pattern().find_iter(line) {
        if m.start() > last {
            parts.push(&line[last..m.start()]);
        }
        if !m.as_str().is_empty() {
            parts.push(m.as_str());
        }
        last = m.end();
    }
    if last < line.len() {
        parts.push(&line[last..]);
    }
    parts
}

fn push_token(out: &mut Vec<Span>, part: &str) {
    if let Some(address) = Email::find(part) {
        out.push(Span {
            email_target: Some(address.to_string()),
            ..Span::plain(address)
        });
    } else if let Some(code) = CodeSpan::inner(part) {
        out.push(Span {
            inline_code: true,
            ..Span::plain(code)
        });
    } else if let Some(inner) = Strong::stars_inner(part) {
        out.extend(tokenize(inner).into_iter().map(|child| Span {
            bold: true,
            ..child
        }));
    } else if let Some(inner) = Strong::underscores_inner(part) {
        out.push(Span {
            bold: true,
            ..Span::plain(inner)
        });
    } else if let Some(inner) = Emphasis::underscore_inner(part) {
        out.push(Span {
            italic: true,
            ..Span::plain(inner)
        });
    } else if let Some(inner) = Strikethrough::inner(part) {
        out.push(Span {
            strikethrough: true,
            ..Span::plain(inner)
        });
    } else if let Some((text, target)) = Link::parse(part) {
        out.push(Span {
            link_target: Some(target.to_string()),
            ..Span::plain(text)
        });
    } else if let Some(inner) = Emphasis::star_inner(part) {
        out.push(Span {
            italic: true,
            ..Span::plain(inner)
        });
    } else {
        out.push(Span::plain(part));
    }
}

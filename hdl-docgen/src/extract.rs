use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tracing::debug;

static MODULE_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bmodule\s+(?:(?:automatic|static)\s+)?([A-Za-z_][A-Za-z0-9_$]*)")
        .expect("module keyword pattern")
});

static ENDMODULE_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bendmodule\b").expect("endmodule pattern"));

/// One `module ... endmodule` block, sliced out of comment-free source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleBoundary<'a> {
    pub name: &'a str,
    /// Text inside `#( ... )`, if the header has a parameter section.
    pub parameters: Option<&'a str>,
    /// Text inside the header port list; empty for `module top;`.
    pub ports: &'a str,
    /// Everything between the header's `;` and `endmodule`.
    pub body: &'a str,
}

struct Header {
    parameters: Option<Range<usize>>,
    ports: Range<usize>,
    body_start: usize,
}

/// Find every module block in `content`, in source order.
///
/// A `module` keyword whose header cannot be closed, or which has no
/// following `endmodule`, is skipped and scanning resumes after it.
pub fn extract_modules(content: &str) -> Vec<ModuleBoundary<'_>> {
    let mut boundaries = Vec::new();
    let mut cursor = 0;

    while let Some(caps) = MODULE_KEYWORD.captures_at(content, cursor) {
        let Some(name) = caps.get(1) else {
            break;
        };
        cursor = name.end();

        let Some(header) = scan_header(content, name.end()) else {
            debug!("skipping module '{}': unterminated header", name.as_str());
            continue;
        };

        let Some(end) = ENDMODULE_KEYWORD.find_at(content, header.body_start) else {
            debug!("skipping module '{}': no endmodule", name.as_str());
            continue;
        };

        debug!("found module '{}'", name.as_str());
        boundaries.push(ModuleBoundary {
            name: name.as_str(),
            parameters: header.parameters.map(|range| &content[range]),
            ports: &content[header.ports],
            body: &content[header.body_start..end.start()],
        });
        cursor = end.end();
    }

    boundaries
}

/// Parse `[#( params )] [( ports )] ;` starting at `pos`.
fn scan_header(content: &str, pos: usize) -> Option<Header> {
    let mut pos = skip_whitespace(content, pos);

    let parameters = if content[pos..].starts_with('#') {
        pos = skip_whitespace(content, pos + 1);
        let (inner, after) = balanced_group(content, pos)?;
        pos = skip_whitespace(content, after);
        Some(inner)
    } else {
        None
    };

    let ports = if content[pos..].starts_with('(') {
        let (inner, after) = balanced_group(content, pos)?;
        pos = skip_whitespace(content, after);
        inner
    } else {
        pos..pos
    };

    if !content[pos..].starts_with(';') {
        return None;
    }

    Some(Header {
        parameters,
        ports,
        body_start: pos + 1,
    })
}

fn skip_whitespace(content: &str, pos: usize) -> usize {
    let rest = &content[pos..];
    pos + (rest.len() - rest.trim_start().len())
}

/// Given the index of a `(`, return the range of the text inside it and the
/// index just past its matching `)`.
fn balanced_group(content: &str, open: usize) -> Option<(Range<usize>, usize)> {
    if !content[open..].starts_with('(') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, c) in content[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let close = open + offset;
                    return Some((open + 1..close, close + 1));
                }
            }
            _ => {}
        }
    }

    None
}

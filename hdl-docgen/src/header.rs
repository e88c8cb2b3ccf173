//! Parsing of the `#( ... )` parameter section and the header port list.

/// Split a parameter section into its declarations, in order.
///
/// The `parameter` keyword is dropped; default values stay attached
/// (`parameter WIDTH=8` becomes `WIDTH=8`).
pub fn parse_parameters(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    split_top_level(raw)
        .into_iter()
        .map(|part| strip_keyword(part.trim(), "parameter").trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Port names listed in a module header, in order.
///
/// Only the declared name of each entry is kept, so ANSI-style entries such
/// as `input wire [7:0] data` or `input logic mem [0:3]` reduce to the name.
pub fn parse_port_names(raw: &str) -> Vec<String> {
    split_top_level(raw)
        .into_iter()
        .filter_map(|part| declared_name(part.trim_end().trim_end_matches(')')))
        .collect()
}

/// Name in a declaration fragment: text before `=`, bracketed dimensions
/// removed, last remaining token.
///
/// `data = 8'h0` -> `data`, `mem [0:3]` -> `mem`, `[7:0]data` -> `data`.
pub(crate) fn declared_name(fragment: &str) -> Option<String> {
    let lhs = fragment.split('=').next().unwrap_or(fragment);

    let mut depth = 0i32;
    let mut cleaned = String::with_capacity(lhs.len());
    for c in lhs.chars() {
        match c {
            '[' => {
                depth += 1;
                cleaned.push(' ');
            }
            ']' => {
                depth -= 1;
                cleaned.push(' ');
            }
            _ if depth > 0 => {}
            _ => cleaned.push(c),
        }
    }

    cleaned.split_whitespace().last().map(str::to_string)
}

/// Split on commas that are not nested inside `()`, `[]` or `{}`.
pub(crate) fn split_top_level(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (idx, c) in raw.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            ',' if depth <= 0 => {
                parts.push(&raw[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&raw[start..]);

    parts
}

fn strip_keyword<'a>(text: &'a str, keyword: &str) -> &'a str {
    match text.strip_prefix(keyword) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest,
        _ => text,
    }
}

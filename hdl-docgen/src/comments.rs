use chumsky::prelude::*;
use tracing::warn;

/// Remove `//` and `/* */` comments from `content`.
///
/// Newlines inside block comments are kept so the remaining text keeps its
/// line numbering. An unterminated `/*` is left as-is. String literals are
/// not recognized, so comment markers inside them are stripped too.
pub fn strip_comments(content: &str) -> String {
    match comment_stripper().parse(content) {
        Ok(stripped) => stripped,
        Err(errors) => {
            // Every character is accepted by the fallback arm, so this is
            // unreachable in practice.
            warn!("comment stripping failed ({} errors), using raw text", errors.len());
            content.to_string()
        }
    }
}

fn comment_stripper() -> impl Parser<char, String, Error = Simple<char>> {
    let line_comment = just("//")
        .then(filter(|c: &char| *c != '\n').repeated())
        .to(String::new());

    let block_comment = just("/*")
        .ignore_then(take_until(just("*/")))
        .map(|(body, _): (Vec<char>, _)| {
            body.into_iter().filter(|c| *c == '\n').collect::<String>()
        });

    let plain = filter(|c: &char| *c != '/')
        .repeated()
        .at_least(1)
        .collect::<String>();

    let slash = any().map(|c: char| c.to_string());

    choice((plain, line_comment, block_comment, slash))
        .repeated()
        .then_ignore(end())
        .map(|pieces: Vec<String>| pieces.concat())
}

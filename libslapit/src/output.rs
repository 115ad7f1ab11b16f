//! Terminal rendering for timelines and errors

use std::io::Write;

use colored::Colorize;

use crate::error::SlapitError;
use crate::types::Tweet;

pub const WRAP_WIDTH: usize = 54;
pub const INDENT: &str = "    ";

const TAB_SIZE: usize = 8;

/// Wrap tweet text to `WRAP_WIDTH` columns with every line indented
///
/// Tabs are expanded to 8-column stops, then ASCII whitespace becomes plain
/// spaces. Lines break only at spaces and after hyphens, so URLs stay whole
/// unless they are longer than a line. Whitespace-only text yields no lines.
pub fn wrap_text(text: &str) -> Vec<String> {
    let flattened: String = expand_tabs(text)
        .chars()
        .map(|c| if is_ascii_space(c) { ' ' } else { c })
        .collect();

    if flattened.trim_matches(' ').is_empty() {
        return Vec::new();
    }

    let options = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent(INDENT)
        .subsequent_indent(INDENT)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);

    textwrap::wrap(&flattened, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

fn expand_tabs(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut column = 0;

    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                expanded.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                expanded.push(c);
                column = 0;
            }
            _ => {
                expanded.push(c);
                column += 1;
            }
        }
    }

    expanded
}

fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Render one timeline entry
pub fn render_tweet<W: Write>(out: &mut W, tweet: &Tweet) -> std::io::Result<()> {
    let header = format!("{}    {}", tweet.user.name, tweet.created_at);
    writeln!(out, "{}", header.green())?;
    writeln!(out, "{}", wrap_text(&tweet.full_text).join("\n"))?;
    writeln!(out, "{}{}", INDENT, tweet.permalink().cyan())?;
    writeln!(out, "\n")?;
    Ok(())
}

/// Render every entry in the order given
pub fn render_timeline<W: Write>(out: &mut W, tweets: &[Tweet]) -> std::io::Result<()> {
    for tweet in tweets {
        render_tweet(out, tweet)?;
    }
    out.flush()
}

/// The single line printed when a command fails
pub fn error_banner(error: &SlapitError) -> String {
    format!("An error occured.  {}::{}", error.kind(), error.detail())
}

//! Doc comment summaries
//!
//! Symbols carry their documentation as the raw XML the compiler keeps
//! (`<doc><summary>...</summary><param .../></doc>`). Only the text of the
//! first `<summary>` element is exported.

use crate::error::DocCommentError;
use crate::symbols::InfoLocation;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;

/// Summary for a symbol, or `None`.
///
/// External symbols and blank comments have no summary. A malformed
/// comment is logged and treated as absent.
pub fn summary_of(location: InfoLocation, comment: Option<&str>, full_name: &str) -> Option<String> {
    if location != InfoLocation::Project {
        return None;
    }
    let comment = comment.filter(|c| !c.trim().is_empty())?;

    match parse_summary(comment) {
        Ok(summary) => summary,
        Err(err) => {
            warn!(symbol = %full_name, error = %err, "couldn't parse XML doc comment");
            None
        }
    }
}

/// Parse a doc comment fragment and return the trimmed text of its first
/// `summary` element below the root.
///
/// The fragment must be well-formed XML with a single root element. Nested
/// markup inside the summary is flattened to its text; entities are decoded
/// and CDATA sections are kept. An empty summary yields `None`.
pub fn parse_summary(comment: &str) -> Result<Option<String>, DocCommentError> {
    let mut reader = Reader::from_str(comment);
    let mut open: Vec<String> = Vec::new();
    let mut root_seen = false;

    // Depth of the first <summary>, while we are inside it
    let mut summary_depth: Option<usize> = None;
    let mut summary: Option<String> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DocCommentError::xml(reader.error_position() as u64, e))?;

        match event {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if open.is_empty() {
                    if root_seen {
                        return Err(DocCommentError::MultipleRoots(name));
                    }
                    root_seen = true;
                }
                if name == "summary" && summary.is_none() && !open.is_empty() {
                    summary_depth = Some(open.len());
                    summary = Some(String::new());
                }
                open.push(name);
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if open.is_empty() {
                    if root_seen {
                        return Err(DocCommentError::MultipleRoots(name));
                    }
                    root_seen = true;
                }
                if name == "summary" && summary.is_none() && !open.is_empty() {
                    summary = Some(String::new());
                }
            }
            Event::End(e) => {
                if open.pop().is_none() {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    return Err(DocCommentError::UnmatchedEnd(name));
                }
                if summary_depth == Some(open.len()) {
                    summary_depth = None;
                }
            }
            Event::Text(t) => {
                let text = t
                    .unescape()
                    .map_err(|e| DocCommentError::xml(reader.buffer_position() as u64, e))?;
                if open.is_empty() {
                    if !text.trim().is_empty() {
                        return Err(DocCommentError::TextOutsideRoot);
                    }
                } else if summary_depth.is_some() {
                    if let Some(summary) = summary.as_mut() {
                        summary.push_str(&text);
                    }
                }
            }
            Event::CData(c) => {
                if open.is_empty() {
                    return Err(DocCommentError::TextOutsideRoot);
                }
                if summary_depth.is_some() {
                    if let Some(summary) = summary.as_mut() {
                        summary.push_str(&String::from_utf8_lossy(&c.into_inner()));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(name) = open.pop() {
        return Err(DocCommentError::UnclosedElement(name));
    }
    if !root_seen {
        return Err(DocCommentError::MissingRoot);
    }

    Ok(summary
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

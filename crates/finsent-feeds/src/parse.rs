//! RSS title extraction.

use quick_xml::events::Event;
use quick_xml::Reader;

use finsent_core::Headline;

use crate::error::FeedError;

/// Extract the text of every `<title>` that is a direct child of an `<item>`,
/// trimmed, in document order.
///
/// Text and CDATA content are concatenated; entities are unescaped. Titles
/// that are empty after trimming are skipped. Documents without any
/// `item/title` (including Atom `entry/title` feeds) yield an empty list.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] on syntax errors such as mismatched end tags,
/// or [`FeedError::Malformed`] if the document has no root element, more than
/// one root, stray text outside the root, or elements left open at EOF.
pub fn parse_feed_titles(xml: &str) -> Result<Vec<Headline>, FeedError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut saw_root = false;
    let mut in_title = false;
    let mut title = String::new();
    let mut titles = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                open_element(&stack, &mut saw_root)?;
                let name = e.name().as_ref().to_vec();
                if !in_title && is_item_title(&stack, &name) {
                    in_title = true;
                    title.clear();
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                open_element(&stack, &mut saw_root)?;
                if is_item_title(&stack, e.name().as_ref()) {
                    tracing::debug!("skipping empty item title");
                }
            }
            Event::End(_) => {
                let name = stack
                    .pop()
                    .ok_or_else(|| FeedError::Malformed("unexpected closing tag".to_string()))?;
                if in_title && is_item_title(&stack, &name) {
                    in_title = false;
                    let headline = Headline::new(&title);
                    if headline.is_empty() {
                        tracing::debug!("skipping empty item title");
                    } else {
                        titles.push(headline);
                    }
                }
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                if in_title {
                    title.push_str(&text);
                } else if stack.is_empty() && !text.trim().is_empty() {
                    return Err(FeedError::Malformed(
                        "text content outside the root element".to_string(),
                    ));
                }
            }
            Event::CData(e) => {
                if in_title {
                    title.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(FeedError::Malformed(
            "document has no root element".to_string(),
        ));
    }
    if let Some(open) = stack.last() {
        return Err(FeedError::Malformed(format!(
            "unclosed element <{}> at end of document",
            String::from_utf8_lossy(open)
        )));
    }

    Ok(titles)
}

fn open_element(stack: &[Vec<u8>], saw_root: &mut bool) -> Result<(), FeedError> {
    if stack.is_empty() {
        if *saw_root {
            return Err(FeedError::Malformed(
                "document has more than one root element".to_string(),
            ));
        }
        *saw_root = true;
    }
    Ok(())
}

fn is_item_title(parents: &[Vec<u8>], name: &[u8]) -> bool {
    name == b"title" && parents.last().is_some_and(|parent| parent == b"item")
}

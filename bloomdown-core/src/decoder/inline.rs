//! Markdown text to block markup

use pulldown_cmark::{html, Event, Options, Parser};

/// Convert the markdown of one language block into markup.
///
/// Blank-line separated paragraphs become `<p>` elements, headings become
/// `<h1>`..`<h6>`, emphasis and links become their inline tags. Single line
/// breaks inside a paragraph collapse to a space. Top-level blocks are joined
/// with no separator.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut output = String::with_capacity(text.len() + text.len() / 2);
    let mut block = Vec::new();
    let mut depth = 0usize;

    for event in Parser::new_ext(text, options) {
        let event = match event {
            Event::SoftBreak => Event::Text(" ".into()),
            other => other,
        };
        match &event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
        block.push(event);

        if depth == 0 {
            push_block(&mut output, block.drain(..));
        }
    }
    push_block(&mut output, block.drain(..));

    output
}

/// Render one top-level block without its trailing newline
fn push_block<'a>(output: &mut String, events: impl Iterator<Item = Event<'a>>) {
    let mut rendered = String::new();
    html::push_html(&mut rendered, events);
    output.push_str(rendered.trim_end_matches('\n'));
}

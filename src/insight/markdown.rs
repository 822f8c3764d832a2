//! Parser for the small markdown subset the coaching response uses:
//! `### ` headings, `- ` bullets, `1. ` numbered items, and `**bold**` spans.
//! Everything else is plain paragraph text.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
}

pub type Line = Vec<Inline>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Line),
    Bullets(Vec<Line>),
    Numbered(Vec<Line>),
    Paragraph(Line),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullets,
    Numbered,
}

struct ListBuffer {
    kind: Option<ListKind>,
    items: Vec<Line>,
}

impl ListBuffer {
    fn new() -> Self {
        ListBuffer {
            kind: None,
            items: Vec::new(),
        }
    }

    fn push(&mut self, kind: ListKind, item: Line, blocks: &mut Vec<Block>) {
        if self.kind != Some(kind) {
            self.flush(blocks);
            self.kind = Some(kind);
        }
        self.items.push(item);
    }

    fn flush(&mut self, blocks: &mut Vec<Block>) {
        let items = std::mem::take(&mut self.items);
        match self.kind.take() {
            Some(ListKind::Bullets) if !items.is_empty() => blocks.push(Block::Bullets(items)),
            Some(ListKind::Numbered) if !items.is_empty() => blocks.push(Block::Numbered(items)),
            _ => {}
        }
    }
}

pub fn parse(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut list = ListBuffer::new();

    for raw in text.lines() {
        let line = raw.trim_end();

        if let Some(rest) = line.strip_prefix("### ") {
            list.flush(&mut blocks);
            blocks.push(Block::Heading(parse_inline(rest)));
        } else if let Some(rest) = line.strip_prefix("- ") {
            list.push(ListKind::Bullets, parse_inline(rest), &mut blocks);
        } else if let Some(rest) = numbered_item(line) {
            list.push(ListKind::Numbered, parse_inline(rest), &mut blocks);
        } else {
            list.flush(&mut blocks);
            if !line.trim().is_empty() {
                blocks.push(Block::Paragraph(parse_inline(line)));
            }
        }
    }

    list.flush(&mut blocks);
    blocks
}

/// Returns the item text for lines like `12. text`.
fn numbered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => Some(chars.as_str()),
        _ => None,
    }
}

/// Splits `**bold**` spans out of a line. An unpaired `**` stays literal.
pub fn parse_inline(line: &str) -> Line {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            spans.push(Inline::Text(rest[..open].to_string()));
        }
        spans.push(Inline::Bold(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() {
        spans.push(Inline::Text(rest.to_string()));
    }
    spans
}

//! Documentation pages: table of contents and a small line-based block parser.

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]+\)").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`{1,3}([^`]+?)`{1,3}").unwrap());
static STRONG_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static STRONG_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());
static EM_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static EM_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());
static STRAY_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*_]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());
static TOC_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{2,4})\s+(.+)$").unwrap());
static IMAGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)\s]+)[^)]*\)$").unwrap());
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*+]|\d+\.)\s+(.+)$").unwrap());
static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"`(?P<code>[^`]+)`|\*\*(?P<strong>[^*]+?)\*\*|\*(?P<em>[^\s*](?:[^*]*[^\s*])?)\*|\[(?P<link>[^\]]+)\]\((?P<href>[^)\s]+)\)",
    )
    .unwrap()
});
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(\d{1,3}(,\d{3})*|\d+)(\.\d+)?%?$").unwrap());
static TABLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|?\s*:?-{3,}:?\s*(\|\s*:?-{3,}:?\s*)*\|?$").unwrap());

/// Characters dropped from heading ids.
const SLUG_PUNCTUATION: &str = "`~!@#$%^&*()+={}[]|\\:;\"'’“”，。、《》？,.<>/?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocItem {
    pub id: String,
    pub text: String,
    pub depth: u8,
}

/// Strip inline markup and HTML from heading text.
pub fn clean_heading_text(raw: &str) -> String {
    let t = TAG.replace_all(raw, "");
    let t = IMAGE.replace_all(&t, "$1");
    let t = LINK.replace_all(&t, "$1");
    let t = CODE.replace_all(&t, "$1");
    let t = STRONG_STAR.replace_all(&t, "$1");
    let t = STRONG_UNDERSCORE.replace_all(&t, "$1");
    let t = EM_STAR.replace_all(&t, "$1");
    let t = EM_UNDERSCORE.replace_all(&t, "$1");
    let t = STRAY_EMPHASIS.replace_all(&t, "");
    t.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .trim()
        .to_string()
}

pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = TAG.replace_all(lowered.trim(), "");
    let kept: String = stripped
        .chars()
        .filter(|c| !SLUG_PUNCTUATION.contains(*c))
        .collect();
    WHITESPACE.replace_all(&kept, "-").into_owned()
}

/// Headings of depth 2 to 4, in document order. Headings that clean to
/// nothing are skipped.
pub fn parse_toc(markdown: &str) -> Vec<TocItem> {
    markdown
        .lines()
        .filter_map(|line| {
            let caps = TOC_HEADING.captures(line)?;
            let text = clean_heading_text(caps[2].trim());
            if text.is_empty() {
                return None;
            }
            Some(TocItem {
                id: slugify(&text),
                depth: caps[1].len() as u8,
                text,
            })
        })
        .collect()
}

/// Table cells that look like numbers (`1,234`, `-3.5`, `12%`) are right-aligned.
pub fn is_numeric_text(text: &str) -> bool {
    NUMERIC.is_match(text.trim())
}

/// Inline span of body text. Anything that is not recognised markup stays
/// literal, so `snake_case` and `2 * 3` survive untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    Emphasis(String),
    Code(String),
    Link { text: String, href: String },
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(t) | Inline::Strong(t) | Inline::Emphasis(t) | Inline::Code(t) => t,
            Inline::Link { text, .. } => text,
        }
    }
}

pub type Spans = Vec<Inline>;

/// Concatenated visible text of a span list.
pub fn plain_text(spans: &[Inline]) -> String {
    spans.iter().map(Inline::text).collect()
}

pub fn parse_inline(text: &str) -> Spans {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in INLINE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(Inline::Text(text[last..whole.start()].to_string()));
        }
        let span = if let Some(m) = caps.name("code") {
            Inline::Code(m.as_str().to_string())
        } else if let Some(m) = caps.name("strong") {
            Inline::Strong(m.as_str().to_string())
        } else if let Some(m) = caps.name("em") {
            Inline::Emphasis(m.as_str().to_string())
        } else {
            Inline::Link {
                text: caps.name("link").map_or("", |m| m.as_str()).to_string(),
                href: caps.name("href").map_or("", |m| m.as_str()).to_string(),
            }
        };
        spans.push(span);
        last = whole.end();
    }
    if last < text.len() {
        spans.push(Inline::Text(text[last..].to_string()));
    }
    spans
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { depth: u8, id: String, text: String },
    Paragraph(Spans),
    ListItem(Spans),
    Image { alt: String, src: String },
    Table { header: Vec<Spans>, rows: Vec<Vec<Spans>> },
}

fn split_row(line: &str) -> Vec<Spans> {
    line.trim()
        .trim_start_matches('|')
        .trim_end_matches('|')
        .split('|')
        .map(|cell| parse_inline(cell.trim()))
        .collect()
}

/// Split a Markdown document into renderable blocks. Consecutive text lines
/// join into one paragraph; blank lines end it.
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut lines = markdown.lines().map(str::trim_end).peekable();

    let flush = |paragraph: &mut Vec<String>, blocks: &mut Vec<Block>| {
        if !paragraph.is_empty() {
            blocks.push(Block::Paragraph(parse_inline(&paragraph.join(" "))));
            paragraph.clear();
        }
    };

    while let Some(line) = lines.next() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush(&mut paragraph, &mut blocks);
            continue;
        }

        if let Some(caps) = HEADING.captures(trimmed) {
            flush(&mut paragraph, &mut blocks);
            let text = clean_heading_text(&caps[2]);
            blocks.push(Block::Heading {
                depth: caps[1].len() as u8,
                id: slugify(&text),
                text,
            });
            continue;
        }

        if let Some(caps) = IMAGE_LINE.captures(trimmed) {
            flush(&mut paragraph, &mut blocks);
            blocks.push(Block::Image {
                alt: caps[1].to_string(),
                src: caps[2].to_string(),
            });
            continue;
        }

        if trimmed.starts_with('|')
            && lines.peek().is_some_and(|next| TABLE_SEPARATOR.is_match(next.trim()))
        {
            flush(&mut paragraph, &mut blocks);
            let header = split_row(trimmed);
            lines.next();
            let mut rows = Vec::new();
            while let Some(row) = lines.next_if(|l| l.trim().starts_with('|')) {
                rows.push(split_row(row));
            }
            blocks.push(Block::Table { header, rows });
            continue;
        }

        if let Some(caps) = LIST_ITEM.captures(trimmed) {
            flush(&mut paragraph, &mut blocks);
            blocks.push(Block::ListItem(parse_inline(caps[1].trim())));
            continue;
        }

        paragraph.push(trimmed.to_string());
    }
    flush(&mut paragraph, &mut blocks);
    blocks
}

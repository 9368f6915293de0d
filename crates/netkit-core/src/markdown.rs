//! Minimal Markdown to HTML rendering for help panels
//!
//! Line-based and intentionally small: headings, lists, fenced code, rules,
//! single-line paragraphs and the common inline forms. Not CommonMark.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:-{3,}|\*{3,}|_{3,})\s*$").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+\.\s+(.*)$").unwrap());
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(.*)$").unwrap());

static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static STRONG_STARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static STRONG_UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());
static EM_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static EM_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

/// Marks a stashed fragment inside inline text
const STASH_MARK: char = '\u{1}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

#[derive(Debug, Default)]
struct Renderer {
    out: Vec<String>,
    list: Option<ListKind>,
    code: Option<Vec<String>>,
}

impl Renderer {
    fn close_list(&mut self) {
        if let Some(kind) = self.list.take() {
            self.out.push(kind.close_tag().to_string());
        }
    }

    fn open_list(&mut self, kind: ListKind) {
        if self.list != Some(kind) {
            self.close_list();
            self.out.push(kind.open_tag().to_string());
            self.list = Some(kind);
        }
    }

    fn flush_code(&mut self, lines: Vec<String>) {
        self.out
            .push(format!("<pre><code>{}</code></pre>", escape_html(&lines.join("\n"))));
    }

    fn line(&mut self, raw: &str) {
        let line = raw.replace('\t', "    ");

        if line.trim().starts_with("```") {
            match self.code.take() {
                Some(lines) => self.flush_code(lines),
                None => self.code = Some(Vec::new()),
            }
            return;
        }

        if let Some(lines) = self.code.as_mut() {
            lines.push(line);
            return;
        }

        if line.trim().is_empty() {
            self.close_list();
            self.out.push(String::new());
            return;
        }

        if HORIZONTAL_RULE.is_match(&line) {
            self.close_list();
            self.out.push("<hr/>".to_string());
            return;
        }

        if let Some(caps) = HEADING.captures(&line) {
            self.close_list();
            let level = caps[1].len();
            self.out
                .push(format!("<h{level}>{}</h{level}>", render_inline(caps[2].trim())));
            return;
        }

        if let Some(caps) = ORDERED_ITEM.captures(&line) {
            self.open_list(ListKind::Ordered);
            self.out.push(format!("<li>{}</li>", render_inline(caps[1].trim())));
            return;
        }

        if let Some(caps) = UNORDERED_ITEM.captures(&line) {
            self.open_list(ListKind::Unordered);
            self.out.push(format!("<li>{}</li>", render_inline(caps[1].trim())));
            return;
        }

        self.close_list();
        self.out.push(format!("<p>{}</p>", render_inline(line.trim())));
    }

    fn finish(mut self) -> String {
        if let Some(lines) = self.code.take() {
            self.flush_code(lines);
        }
        self.close_list();
        self.out.join("\n")
    }
}

/// Render Markdown to HTML
///
/// An unterminated code fence is flushed as a code block at the end. Blank
/// lines end lists and are kept as empty output lines.
pub fn md_to_html(md: &str) -> String {
    if md.is_empty() {
        return String::new();
    }

    let mut renderer = Renderer::default();
    for raw in md.replace("\r\n", "\n").split('\n') {
        renderer.line(raw);
    }
    renderer.finish()
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline markup on one line of text
///
/// Code spans and links are rendered first and set aside so emphasis markers
/// inside them (`snake_case`, URLs) are left alone.
fn render_inline(text: &str) -> String {
    let mut stash: Vec<String> = Vec::new();
    let mut set_aside = |html: String| {
        stash.push(html);
        format!("{STASH_MARK}{}{STASH_MARK}", stash.len() - 1)
    };

    let escaped = escape_html(text);
    let with_code = INLINE_CODE
        .replace_all(&escaped, |caps: &Captures| set_aside(format!("<code>{}</code>", &caps[1])))
        .into_owned();
    let with_links = LINK
        .replace_all(&with_code, |caps: &Captures| {
            set_aside(format!(
                r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                &caps[2],
                emphasize(&caps[1])
            ))
        })
        .into_owned();

    let mut out = emphasize(&with_links);

    // Links may hold stashed code spans, so restore newest first
    for (idx, html) in stash.iter().enumerate().rev() {
        out = out.replace(&format!("{STASH_MARK}{idx}{STASH_MARK}"), html);
    }
    out
}

fn emphasize(text: &str) -> String {
    let text = STRONG_STARS.replace_all(text, "<strong>$1</strong>");
    let text = STRONG_UNDERSCORES.replace_all(&text, "<strong>$1</strong>");
    let text = EM_STAR.replace_all(&text, "<em>$1</em>");
    EM_UNDERSCORE.replace_all(&text, "<em>$1</em>").into_owned()
}

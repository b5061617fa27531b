//! Render markdown to styled lines with heading anchors

use folio_core::content::Slugger;
use pulldown_cmark::{BlockQuoteKind, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::wrap::wrap_spans;
use super::{HeadingAnchor, RenderedDocument};
use crate::tui::themes::Theme;

/// Border characters for code blocks
const TOP_LEFT: char = '╭';
const TOP_RIGHT: char = '╮';
const BOTTOM_LEFT: char = '╰';
const BOTTOM_RIGHT: char = '╯';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Narrowest column budget text is wrapped to, however deep the nesting
const MIN_TEXT_WIDTH: usize = 10;

/// Render `text` for a pane `width` columns wide. `accent` is the active
/// tab's color, used for the title, strong text and links.
pub fn render_markdown(text: &str, width: usize, accent: Color, theme: &Theme) -> RenderedDocument {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_GFM);

    let mut renderer = MarkdownRenderer::new(width, accent, theme);
    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(tag) => renderer.start(tag),
            Event::End(_) => renderer.end(),
            Event::Text(text) => renderer.add_text(&text),
            Event::Code(code) => renderer.add_inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => renderer.add_text(&html),
            Event::SoftBreak => renderer.add_text(" "),
            Event::HardBreak => renderer.flush_inline(),
            Event::Rule => renderer.add_rule(),
            Event::TaskListMarker(done) => {
                renderer.add_text(if done { "[x] " } else { "[ ] " });
            }
            _ => {}
        }
    }
    renderer.finish()
}

/// Open element; every start event pushes one, every end event pops one
#[derive(Debug, Clone, PartialEq)]
enum Open {
    Paragraph,
    Heading(u8),
    Quote,
    CodeBlock,
    List,
    Item,
    Emphasis,
    Strong,
    Strikethrough,
    Link,
    Other,
}

struct MarkdownRenderer<'a> {
    width: usize,
    accent: Color,
    theme: &'a Theme,
    lines: Vec<Line<'static>>,
    headings: Vec<HeadingAnchor>,
    slugger: Slugger,
    stack: Vec<Open>,
    inline: Vec<Span<'static>>,
    heading_text: String,
    code: String,
    code_lang: Option<String>,
    /// Next number per open list; `None` for bullet lists
    lists: Vec<Option<u64>>,
    /// Marker waiting for the first row of the current list item
    item_marker: Option<String>,
}

impl<'a> MarkdownRenderer<'a> {
    fn new(width: usize, accent: Color, theme: &'a Theme) -> Self {
        Self {
            width,
            accent,
            theme,
            lines: Vec::new(),
            headings: Vec::new(),
            slugger: Slugger::new(),
            stack: Vec::new(),
            inline: Vec::new(),
            heading_text: String::new(),
            code: String::new(),
            code_lang: None,
            lists: Vec::new(),
            item_marker: None,
        }
    }

    fn finish(mut self) -> RenderedDocument {
        self.flush_inline();
        while self.lines.last().is_some_and(|l| l.width() == 0) {
            self.lines.pop();
        }
        RenderedDocument {
            lines: self.lines,
            headings: self.headings,
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    fn start(&mut self, tag: Tag) {
        let open = match tag {
            Tag::Paragraph => Open::Paragraph,
            Tag::Heading { level, .. } => {
                self.flush_inline();
                self.heading_text.clear();
                Open::Heading(heading_level(level))
            }
            Tag::BlockQuote(kind) => {
                self.flush_inline();
                self.stack.push(Open::Quote);
                if let Some(kind) = kind {
                    self.push_callout_label(kind);
                }
                return;
            }
            Tag::CodeBlock(kind) => {
                self.flush_inline();
                self.code.clear();
                self.code_lang = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
                Open::CodeBlock
            }
            Tag::List(start) => {
                self.flush_inline();
                self.lists.push(start);
                Open::List
            }
            Tag::Item => {
                self.flush_inline();
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.item_marker = Some(marker);
                Open::Item
            }
            Tag::Emphasis => Open::Emphasis,
            Tag::Strong => Open::Strong,
            Tag::Strikethrough => Open::Strikethrough,
            Tag::Link { .. } => Open::Link,
            _ => Open::Other,
        };
        self.stack.push(open);
    }

    fn end(&mut self) {
        let Some(open) = self.stack.pop() else {
            return;
        };
        match open {
            Open::Paragraph => {
                self.flush_inline();
                self.push_blank();
            }
            Open::Heading(level) => self.finish_heading(level),
            Open::Quote => {
                self.flush_inline();
                if !self.stack.contains(&Open::Quote) {
                    self.push_blank();
                }
            }
            Open::CodeBlock => self.finish_code_block(),
            Open::List => {
                self.flush_inline();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.push_blank();
                }
            }
            Open::Item => {
                self.flush_inline();
                self.item_marker = None;
            }
            Open::Emphasis | Open::Strong | Open::Strikethrough | Open::Link | Open::Other => {}
        }
    }

    fn add_text(&mut self, text: &str) {
        if self.stack.contains(&Open::CodeBlock) {
            self.code.push_str(text);
            return;
        }
        let text = match self.heading() {
            Some(level) => {
                self.heading_text.push_str(text);
                if level == 3 {
                    text.to_uppercase()
                } else {
                    text.to_string()
                }
            }
            None => text.to_string(),
        };
        let style = self.inline_style();
        self.inline.push(Span::styled(text, style));
    }

    fn add_inline_code(&mut self, code: &str) {
        if self.heading().is_some() {
            self.heading_text.push_str(code);
        }
        self.inline.push(Span::styled(
            code.to_string(),
            Style::default()
                .fg(self.theme.text_color)
                .bg(self.theme.kraft_light_color),
        ));
    }

    fn add_rule(&mut self) {
        self.flush_inline();
        let width = self.text_width();
        self.lines.push(Line::from(Span::styled(
            HORIZONTAL.to_string().repeat(width),
            Style::default().fg(self.theme.border_color),
        )));
        self.push_blank();
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    fn finish_heading(&mut self, level: u8) {
        let row = self.lines.len();
        self.flush_inline();
        let rows = self.lines.len() - row;
        let id = self.slugger.slug(&self.heading_text);
        self.headings.push(HeadingAnchor {
            id,
            level,
            row,
            rows,
        });
        self.push_blank();
    }

    fn finish_code_block(&mut self) {
        let style = Style::default().fg(self.theme.border_color);
        let text_style = Style::default().fg(self.theme.text_color);
        let prefix = self.quote_prefix();
        let width = self.text_width().max(4);
        let inner = width - 4;

        let label = self
            .code_lang
            .take()
            .map(|lang| format!("{}{} ", HORIZONTAL, lang))
            .unwrap_or_default();
        let fill = (width - 2).saturating_sub(label.width());
        let mut top = prefix.clone();
        top.push(Span::styled(
            format!(
                "{}{}{}{}",
                TOP_LEFT,
                label,
                HORIZONTAL.to_string().repeat(fill),
                TOP_RIGHT
            ),
            style,
        ));
        self.lines.push(Line::from(top));

        let code = std::mem::take(&mut self.code);
        for code_line in code.trim_end_matches('\n').lines() {
            let clipped = clip_to_width(code_line, inner);
            let pad = inner.saturating_sub(clipped.width());
            let mut row = prefix.clone();
            row.push(Span::styled(format!("{} ", VERTICAL), style));
            row.push(Span::styled(clipped, text_style));
            row.push(Span::raw(" ".repeat(pad)));
            row.push(Span::styled(format!(" {}", VERTICAL), style));
            self.lines.push(Line::from(row));
        }

        let mut bottom = prefix;
        bottom.push(Span::styled(
            format!(
                "{}{}{}",
                BOTTOM_LEFT,
                HORIZONTAL.to_string().repeat(width - 2),
                BOTTOM_RIGHT
            ),
            style,
        ));
        self.lines.push(Line::from(bottom));
        self.push_blank();
    }

    fn push_callout_label(&mut self, kind: BlockQuoteKind) {
        let label = match kind {
            BlockQuoteKind::Note => "Note",
            BlockQuoteKind::Tip => "Tip",
            BlockQuoteKind::Important => "Important",
            BlockQuoteKind::Warning => "Warning",
            BlockQuoteKind::Caution => "Caution",
        };
        let mut row = self.quote_prefix();
        row.push(Span::styled(
            label,
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
        ));
        self.lines.push(Line::from(row));
    }

    /// Wrap pending inline spans into rows under the current prefixes
    fn flush_inline(&mut self) {
        if self.inline.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.inline);
        let quote = self.quote_prefix();
        let indent = self.list_indent();
        let marker = self.item_marker.take();
        let marker_width = marker.as_ref().map_or(0, |m| m.width());
        let width = self.text_width().saturating_sub(marker_width);

        for (i, row) in wrap_spans(&spans, width).into_iter().enumerate() {
            let mut line = quote.clone();
            if !indent.is_empty() {
                line.push(Span::raw(indent.clone()));
            }
            match (&marker, i) {
                (Some(m), 0) => line.push(Span::styled(
                    m.clone(),
                    Style::default().fg(self.theme.dim_color),
                )),
                (Some(_), _) => line.push(Span::raw(" ".repeat(marker_width))),
                (None, _) => {}
            }
            line.extend(row);
            self.lines.push(Line::from(line));
        }
    }

    fn push_blank(&mut self) {
        if self.lines.last().is_some_and(|l| l.width() == 0) || self.lines.is_empty() {
            return;
        }
        self.lines.push(Line::default());
    }

    // =========================================================================
    // Styles and prefixes
    // =========================================================================

    fn heading(&self) -> Option<u8> {
        self.stack.iter().rev().find_map(|open| match open {
            Open::Heading(level) => Some(*level),
            _ => None,
        })
    }

    fn inline_style(&self) -> Style {
        let mut style = match self.heading() {
            Some(1) => Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
            Some(2) => Style::default()
                .fg(self.theme.text_color)
                .add_modifier(Modifier::BOLD),
            Some(_) => Style::default()
                .fg(self.theme.dim_color)
                .add_modifier(Modifier::BOLD),
            None => Style::default().fg(self.theme.secondary_color),
        };
        for open in &self.stack {
            style = match open {
                Open::Emphasis => style.add_modifier(Modifier::ITALIC),
                Open::Strong => style.fg(self.accent).add_modifier(Modifier::BOLD),
                Open::Strikethrough => style.add_modifier(Modifier::CROSSED_OUT),
                Open::Link => style.fg(self.accent).add_modifier(Modifier::UNDERLINED),
                _ => style,
            };
        }
        style
    }

    fn quote_prefix(&self) -> Vec<Span<'static>> {
        let depth = self.stack.iter().filter(|o| **o == Open::Quote).count();
        (0..depth)
            .map(|_| Span::styled("│ ", Style::default().fg(self.theme.border_color)))
            .collect()
    }

    fn list_indent(&self) -> String {
        "  ".repeat(self.lists.len().saturating_sub(1))
    }

    /// Columns left for text after quote bars and list indentation
    fn text_width(&self) -> usize {
        let depth = self.stack.iter().filter(|o| **o == Open::Quote).count();
        self.width
            .saturating_sub(depth * 2 + self.list_indent().len())
            .max(MIN_TEXT_WIDTH)
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn clip_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str, width: usize) -> RenderedDocument {
        let theme = Theme::notebook();
        render_markdown(text, width, theme.palette[0], &theme)
    }

    fn plain(doc: &RenderedDocument) -> Vec<String> {
        doc.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_headings_get_slugs_and_rows() {
        let doc = render(
            "# Projects\n\nIntro text.\n\n## Project Alpha\n\nA.\n\n## Project Beta\n\nB.\n",
            40,
        );
        let ids: Vec<&str> = doc.headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["projects", "project-alpha", "project-beta"]);

        let lines = plain(&doc);
        let beta = doc.heading("project-beta").unwrap();
        assert_eq!(lines[beta.row], "Project Beta");
        assert_eq!(beta.level, 2);
        assert_eq!(beta.rows, 1);
    }

    #[test]
    fn test_level_three_headings_are_uppercased_but_slugged_from_source() {
        let doc = render("### Tech Stack\n", 40);
        assert_eq!(plain(&doc), ["TECH STACK"]);
        assert_eq!(doc.headings[0].id, "tech-stack");
    }

    #[test]
    fn test_duplicate_headings_are_suffixed() {
        let doc = render("## Stack\n\n## Stack\n", 40);
        assert_eq!(doc.headings[1].id, "stack-1");
    }

    #[test]
    fn test_lists_and_paragraph_wrapping() {
        let doc = render("- one\n- two words that wrap\n\n1. first\n2. second\n", 14);
        let lines = plain(&doc);
        assert_eq!(lines[0], "• one");
        assert_eq!(lines[1], "• two words");
        assert_eq!(lines[2], "  that wrap");
        assert!(lines.contains(&"1. first".to_string()));
        assert!(lines.contains(&"2. second".to_string()));
    }

    #[test]
    fn test_code_block_is_boxed() {
        let doc = render("```sh\nbeta run\n```\n", 20);
        let lines = plain(&doc);
        assert!(lines[0].starts_with("╭─sh "));
        assert!(lines[0].ends_with('╮'));
        assert_eq!(lines[1], "│ beta run         │");
        assert!(lines[2].starts_with('╰'));
        assert!(doc.headings.is_empty());
    }

    #[test]
    fn test_blockquote_prefix_and_callout() {
        let doc = render("> [!NOTE]\n> Read this.\n", 30);
        let lines = plain(&doc);
        assert_eq!(lines[0], "│ Note");
        assert_eq!(lines[1], "│ Read this.");
    }

    #[test]
    fn test_no_trailing_blank_lines() {
        let doc = render("Paragraph.\n\n---\n", 10);
        assert!(doc.lines.last().is_some_and(|l| l.width() > 0));
    }
}

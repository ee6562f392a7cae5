//! Markdown to terminal text.
//!
//! A single pass over pulldown-cmark events builds styled ratatui lines.
//! Wrapping is left to the widget that displays the result.

pub mod highlight;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

use crate::presentation::config::Styles;

pub use highlight::Highlighter;

/// Styles used for the markdown elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkdownTheme {
    pub heading: Style,
    pub heading_h1: Style,
    pub emphasis: Style,
    pub strong: Style,
    pub strikethrough: Style,
    pub inline_code: Style,
    pub code_block: Style,
    pub link: Style,
    pub quote: Style,
    pub list_marker: Style,
    pub rule: Style,
    pub table_separator: Style,
}

impl MarkdownTheme {
    pub fn from_styles(styles: &Styles) -> Self {
        Self {
            heading: styles.style("heading"),
            heading_h1: styles.style("heading_h1"),
            emphasis: styles.style("emphasis"),
            strong: styles.style("strong"),
            strikethrough: styles.style("strikethrough"),
            inline_code: styles.style("inline_code"),
            code_block: styles.style("code_block"),
            link: styles.style("link"),
            quote: styles.style("quote"),
            list_marker: styles.style("list_marker"),
            rule: styles.style("rule"),
            table_separator: styles.style("table_separator"),
        }
    }
}

/// Renders slides. Holds the syntax highlighter so its bundled syntaxes are
/// loaded once.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    theme: MarkdownTheme,
    highlighter: Option<Highlighter>,
}

impl MarkdownRenderer {
    pub fn new(theme: MarkdownTheme, highlighter: Option<Highlighter>) -> Self {
        Self { theme, highlighter }
    }

    pub fn theme(&self) -> &MarkdownTheme {
        &self.theme
    }

    /// Renders `markdown` for an area `width` columns wide.
    pub fn render(&self, markdown: &str, width: u16) -> Text<'static> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_TASKLISTS);

        let mut writer = Writer::new(&self.theme, self.highlighter.as_ref(), width);
        for event in Parser::new_ext(markdown, options) {
            writer.handle(event);
        }
        writer.finish()
    }
}

struct CodeBlock {
    info: String,
    content: String,
}

struct TableRow {
    head: bool,
    cells: Vec<Vec<Span<'static>>>,
}

struct Writer<'a> {
    theme: &'a MarkdownTheme,
    highlighter: Option<&'a Highlighter>,
    width: u16,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    style_stack: Vec<Style>,
    /// Next number of each open list, `None` for bullet lists
    list_stack: Vec<Option<u64>>,
    quote_depth: usize,
    item_started: bool,
    needs_blank: bool,
    code_block: Option<CodeBlock>,
    /// Destination and the index of the first span of each open link
    link_stack: Vec<(String, usize)>,
    image_alt: Option<String>,
    table: Vec<TableRow>,
    row: Option<TableRow>,
}

impl<'a> Writer<'a> {
    fn new(theme: &'a MarkdownTheme, highlighter: Option<&'a Highlighter>, width: u16) -> Self {
        Self {
            theme,
            highlighter,
            width,
            lines: Vec::new(),
            current: Vec::new(),
            style_stack: vec![Style::default()],
            list_stack: Vec::new(),
            quote_depth: 0,
            item_started: false,
            needs_blank: false,
            code_block: None,
            link_stack: Vec::new(),
            image_alt: None,
            table: Vec::new(),
            row: None,
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push_span(code.into_string(), self.theme.inline_code),
            Event::Html(html) | Event::InlineHtml(html) => self.text(&html),
            Event::SoftBreak => self.push_span(" ".to_string(), self.style()),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.start_block();
                let width = usize::from(self.width).saturating_sub(self.prefix_width());
                let rule = Span::styled("─".repeat(width.max(1)), self.theme.rule);
                self.current.push(rule);
                self.flush_line();
                self.needs_blank = true;
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.push_span(marker.to_string(), self.theme.list_marker);
            }
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if !self.item_started {
                    self.start_block();
                }
            }
            Tag::Heading { level, .. } => {
                self.start_block();
                let style = if level == HeadingLevel::H1 {
                    self.theme.heading_h1
                } else {
                    self.theme.heading
                };
                self.push_style(style);
            }
            Tag::BlockQuote(_) => {
                self.flush_line();
                self.start_block();
                self.quote_depth += 1;
                self.push_style(self.theme.quote);
            }
            Tag::CodeBlock(kind) => {
                self.flush_line();
                self.start_block();
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.into_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code_block = Some(CodeBlock {
                    info,
                    content: String::new(),
                });
            }
            Tag::List(start) => {
                self.flush_line();
                if self.list_stack.is_empty() {
                    self.start_block();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.list_stack.len().max(1);
                let marker = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.current.push(Span::raw("  ".repeat(depth - 1)));
                self.current
                    .push(Span::styled(marker, self.theme.list_marker));
                self.item_started = true;
            }
            Tag::Emphasis => self.push_style(self.theme.emphasis),
            Tag::Strong => self.push_style(self.theme.strong),
            Tag::Strikethrough => self.push_style(self.theme.strikethrough),
            Tag::Link { dest_url, .. } => {
                self.link_stack
                    .push((dest_url.into_string(), self.current.len()));
                self.push_style(self.theme.link);
            }
            Tag::Image { .. } => {
                self.image_alt = Some(String::new());
            }
            Tag::Table(_) => {
                self.flush_line();
                self.start_block();
                self.table.clear();
            }
            Tag::TableHead => {
                self.row = Some(TableRow {
                    head: true,
                    cells: Vec::new(),
                });
            }
            Tag::TableRow => {
                self.row = Some(TableRow {
                    head: false,
                    cells: Vec::new(),
                });
            }
            Tag::TableCell => self.current.clear(),
            Tag::HtmlBlock => {
                self.flush_line();
                self.start_block();
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush_line();
                self.needs_blank = true;
            }
            TagEnd::Heading(_) => {
                self.flush_line();
                self.pop_style();
                self.needs_blank = true;
            }
            TagEnd::BlockQuote(_) => {
                self.flush_line();
                self.pop_style();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.needs_blank = true;
            }
            TagEnd::CodeBlock => {
                if let Some(block) = self.code_block.take() {
                    self.code_lines(block);
                }
                self.needs_blank = true;
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.needs_blank = true;
                }
            }
            TagEnd::Item => {
                self.flush_line();
                // loose list items end their paragraphs with a blank line
                self.needs_blank = false;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some((url, first_span)) = self.link_stack.pop() {
                    let text: String = self
                        .current
                        .get(first_span..)
                        .unwrap_or_default()
                        .iter()
                        .map(|span| span.content.as_ref())
                        .collect();
                    if !url.is_empty() && text != url {
                        self.current
                            .push(Span::styled(format!(" ({url})"), self.theme.rule));
                    }
                }
            }
            TagEnd::Image => {
                if let Some(alt) = self.image_alt.take() {
                    self.push_span(format!("[image: {alt}]"), self.theme.link);
                }
            }
            TagEnd::TableCell => {
                let cell = std::mem::take(&mut self.current);
                if let Some(row) = self.row.as_mut() {
                    row.cells.push(cell);
                }
            }
            TagEnd::TableHead | TagEnd::TableRow => {
                if let Some(row) = self.row.take() {
                    self.table.push(row);
                }
            }
            TagEnd::Table => {
                self.table_lines();
                self.needs_blank = true;
            }
            TagEnd::HtmlBlock => {
                self.flush_line();
                self.needs_blank = true;
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(block) = self.code_block.as_mut() {
            block.content.push_str(text);
            return;
        }
        if let Some(alt) = self.image_alt.as_mut() {
            alt.push_str(text);
            return;
        }

        let style = self.style();
        let mut parts = text.split('\n').peekable();
        while let Some(part) = parts.next() {
            if !part.is_empty() {
                self.push_span(part.to_string(), style);
            }
            if parts.peek().is_some() {
                self.flush_line();
            }
        }
    }

    fn style(&self) -> Style {
        self.style_stack.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, style: Style) {
        let merged = self.style().patch(style);
        self.style_stack.push(merged);
    }

    fn pop_style(&mut self) {
        if self.style_stack.len() > 1 {
            self.style_stack.pop();
        }
    }

    fn push_span(&mut self, content: String, style: Style) {
        if let Some(alt) = self.image_alt.as_mut() {
            alt.push_str(&content);
            return;
        }
        self.current.push(Span::styled(content, style));
    }

    fn quote_gutter(&self) -> Option<Span<'static>> {
        (self.quote_depth > 0).then(|| Span::styled("│ ".repeat(self.quote_depth), self.theme.quote))
    }

    fn prefix_width(&self) -> usize {
        self.quote_depth * 2
    }

    /// Separates the next block from the previous one with a blank line.
    fn start_block(&mut self) {
        if self.needs_blank && !self.lines.is_empty() {
            let blank = self.quote_gutter().map(Line::from).unwrap_or_default();
            self.lines.push(blank);
        }
        self.needs_blank = false;
    }

    fn push_line(&mut self, spans: Vec<Span<'static>>) {
        let mut line_spans = Vec::with_capacity(spans.len() + 1);
        line_spans.extend(self.quote_gutter());
        line_spans.extend(spans);
        self.lines.push(Line::from(line_spans));
    }

    fn flush_line(&mut self) {
        self.item_started = false;
        if self.current.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.current);
        self.push_line(spans);
    }

    fn code_lines(&mut self, block: CodeBlock) {
        let code = block.content.trim_end_matches('\n');
        let highlighted = self
            .highlighter
            .and_then(|highlighter| highlighter.highlight(code, &block.info));
        let lines = highlighted.unwrap_or_else(|| {
            code.lines()
                .map(|line| Line::from(Span::styled(line.to_string(), self.theme.code_block)))
                .collect()
        });

        for line in lines {
            let mut spans = vec![Span::raw("  ")];
            spans.extend(line.spans);
            self.push_line(spans);
        }
    }

    fn table_lines(&mut self) {
        let rows = std::mem::take(&mut self.table);
        let columns = rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in &rows {
            for (i, cell) in row.cells.iter().enumerate() {
                widths[i] = widths[i].max(cell_width(cell));
            }
        }

        let separator = Span::styled(" │ ", self.theme.table_separator);
        for row in rows {
            let head = row.head;
            let mut spans = Vec::new();
            for (i, cell) in row.cells.into_iter().enumerate() {
                if i > 0 {
                    spans.push(separator.clone());
                }
                let padding = widths[i].saturating_sub(cell_width(&cell));
                if head {
                    spans.extend(
                        cell.into_iter()
                            .map(|span| span.patch_style(self.theme.strong)),
                    );
                } else {
                    spans.extend(cell);
                }
                if padding > 0 {
                    spans.push(Span::raw(" ".repeat(padding)));
                }
            }
            self.push_line(spans);

            if head {
                let rule = widths
                    .iter()
                    .map(|w| "─".repeat(*w))
                    .collect::<Vec<_>>()
                    .join("─┼─");
                self.push_line(vec![Span::styled(rule, self.theme.table_separator)]);
            }
        }
    }

    fn finish(mut self) -> Text<'static> {
        self.flush_line();
        Text::from(self.lines)
    }
}

fn cell_width(cell: &[Span<'_>]) -> usize {
    cell.iter().map(|span| span.content.width()).sum()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Modifier};

    use super::*;

    fn theme() -> MarkdownTheme {
        MarkdownTheme {
            heading: Style::default().fg(Color::Cyan),
            heading_h1: Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            strong: Style::default().add_modifier(Modifier::BOLD),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            inline_code: Style::default().fg(Color::Yellow),
            link: Style::default().fg(Color::Blue),
            ..Default::default()
        }
    }

    fn render(markdown: &str) -> Text<'static> {
        MarkdownRenderer::new(theme(), None).render(markdown, 20)
    }

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_heading_and_paragraph() {
        let text = render("# Title\n\nSome *nice* text.");
        assert_eq!(plain(&text), vec!["Title", "", "Some nice text."]);
        assert_eq!(text.lines[0].spans[0].style, theme().heading_h1);
        let nice = &text.lines[2].spans[1];
        assert_eq!(nice.content, "nice");
        assert!(nice.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_nested_inline_styles() {
        let text = render("**bold _both_**");
        let both = &text.lines[0].spans[1];
        assert_eq!(both.content, "both");
        assert!(both.style.add_modifier.contains(Modifier::BOLD));
        assert!(both.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_lists() {
        let text = render("- one\n- two\n  1. inner\n  2. next\n\nafter");
        assert_eq!(
            plain(&text),
            vec!["• one", "• two", "  1. inner", "  2. next", "", "after"]
        );
    }

    #[test]
    fn test_task_list() {
        let text = render("- [x] done\n- [ ] todo");
        assert_eq!(plain(&text), vec!["• [x] done", "• [ ] todo"]);
    }

    #[test]
    fn test_code_block_without_highlighter() {
        let text = render("```rust\nlet a = 1;\n```");
        assert_eq!(plain(&text), vec!["  let a = 1;"]);
    }

    #[test]
    fn test_inline_code_and_link() {
        let text = render("Use `cargo` at [docs](https://docs.rs) or <https://a.b>");
        assert_eq!(
            plain(&text),
            vec!["Use cargo at docs (https://docs.rs) or https://a.b"]
        );
        assert_eq!(text.lines[0].spans[1].style, theme().inline_code);
    }

    #[test]
    fn test_block_quote() {
        let text = render("> quoted\n> text\n\nplain");
        assert_eq!(plain(&text), vec!["│ quoted text", "", "plain"]);
    }

    #[test]
    fn test_rule_spans_width() {
        let text = render("above\n\n---\n\nbelow");
        assert_eq!(plain(&text), vec!["above", "", "─".repeat(20).as_str(), "", "below"]);
    }

    #[test]
    fn test_image_alt() {
        let text = render("![a logo](logo.svg)");
        assert_eq!(plain(&text), vec!["[image: a logo]"]);
    }

    #[test]
    fn test_table_alignment() {
        let text = render("| a | long |\n|---|---|\n| xyz | b |");
        assert_eq!(
            plain(&text),
            vec!["a   │ long", "────┼─────", "xyz │ b   "]
        );
    }

    #[test]
    fn test_html_block_is_separated_like_a_paragraph() {
        let text = render("para\n\n<div>hi</div>\n\nafter");
        assert_eq!(plain(&text), vec!["para", "", "<div>hi</div>", "", "after"]);
    }
}

//! Syntax highlighting for fenced code blocks.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style as SyntectStyle, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Highlighter with syntect's bundled syntaxes and one theme.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("theme", &self.theme.name)
            .finish_non_exhaustive()
    }
}

impl Highlighter {
    /// Loads the bundled syntaxes. Unknown theme names fall back to the
    /// first bundled theme.
    pub fn new(theme_name: &str) -> Option<Self> {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let mut theme_set = ThemeSet::load_defaults();
        let theme = match theme_set.themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                log::warn!("Unknown code theme {theme_name:?}, using a bundled one");
                theme_set.themes.into_values().next()?
            }
        };

        Some(Self { syntax_set, theme })
    }

    fn syntax(&self, info: &str) -> Option<&SyntaxReference> {
        // "rust,ignore" or "js {1,3}" name the language first
        let token = info
            .split(|c: char| c == ',' || c.is_whitespace())
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let token = match token.as_str() {
            "jsx" | "ts" | "tsx" | "typescript" | "javascript" => "js",
            "shell" | "zsh" | "console" => "sh",
            "yml" => "yaml",
            other => other,
        };
        if token.is_empty() {
            return None;
        }

        self.syntax_set
            .find_syntax_by_token(token)
            .or_else(|| self.syntax_set.find_syntax_by_extension(token))
    }

    /// Highlights `code` for the language named by a fence info string.
    /// Returns `None` for unknown languages.
    pub fn highlight(&self, code: &str, info: &str) -> Option<Vec<Line<'static>>> {
        let syntax = self.syntax(info)?;
        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        let mut lines = Vec::new();
        for line in LinesWithEndings::from(code) {
            let ranges = match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => ranges,
                Err(e) => {
                    log::debug!("Highlighting failed: {e}");
                    return None;
                }
            };
            let spans: Vec<Span<'static>> = ranges
                .into_iter()
                .map(|(style, text)| {
                    Span::styled(
                        text.trim_end_matches(['\n', '\r']).to_string(),
                        convert_style(style),
                    )
                })
                .filter(|span| !span.content.is_empty())
                .collect();
            lines.push(Line::from(spans));
        }
        Some(lines)
    }
}

fn convert_style(style: SyntectStyle) -> Style {
    let fg = style.foreground;
    let mut converted = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        converted = converted.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        converted = converted.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        converted = converted.add_modifier(Modifier::UNDERLINED);
    }
    converted
}

use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"heading": "bold light_cyan"`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Looks up a style, falling back to the terminal default.
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, style)| (name, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parses `"<modifiers> <fg> on <bg>"`, where every part is optional.
pub fn parse_style(line: &str) -> Style {
    let line = line.to_lowercase();
    let (foreground, background) = match line.split_once(" on ") {
        Some((fg, bg)) => (fg.to_string(), Some(bg.to_string())),
        None => match line.strip_prefix("on ") {
            Some(bg) => (String::new(), Some(bg.to_string())),
            None => (line.clone(), None),
        },
    };

    let mut style = Style::default();
    let mut modifiers = Modifier::empty();
    for word in foreground.split_whitespace() {
        match parse_modifier(word) {
            Some(modifier) => modifiers |= modifier,
            None => {
                if let Some(color) = parse_color(word) {
                    style = style.fg(color);
                }
            }
        }
    }
    if let Some(color) = background.as_deref().and_then(parse_color) {
        style = style.bg(color);
    }
    style.add_modifier(modifiers)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "inverse" | "reversed" => Some(Modifier::REVERSED),
        "crossed" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().replace("grey", "gray");
    if let Some(index) = s.strip_prefix("color") {
        return index.parse::<u8>().ok().map(Color::Indexed);
    }
    Color::from_str(&s).ok()
}

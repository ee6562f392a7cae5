use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SLIDE_SEPARATOR: Regex = Regex::new(r"\n{3,}").expect("valid separator regex");
}

/// Splits one file's markdown into slides on runs of three or more newlines.
///
/// Line endings are normalised first and blank fragments are dropped.
pub fn split_slides(content: &str) -> Vec<String> {
    let normalized = content.replace("\r\n", "\n");
    SLIDE_SEPARATOR
        .split(&normalized)
        .filter(|fragment| !fragment.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

/// An ordered, immutable sequence of markdown slides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<String>,
}

impl Deck {
    pub fn new(slides: Vec<String>) -> Self {
        Self { slides }
    }

    /// Builds a deck from whole file contents, in order.
    pub fn from_contents<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let slides = contents
            .into_iter()
            .flat_map(|content| split_slides(content.as_ref()))
            .collect();
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slides.get(index).map(String::as_str)
    }

    /// The slide selected by a navigation step; step `0` has none.
    pub fn slide_for_step(&self, step: usize) -> Option<&str> {
        step.checked_sub(1).and_then(|index| self.get(index))
    }

    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    pub fn into_slides(self) -> Vec<String> {
        self.slides
    }
}

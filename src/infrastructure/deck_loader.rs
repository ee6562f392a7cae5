//! Reads a slide deck from a directory of markdown files.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use futures::future;
use tokio::fs;

use crate::model::Deck;

/// Loads every `.md` file directly inside a directory, in file name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckLoader {
    dir: PathBuf,
}

impl DeckLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Markdown files of the deck, sorted by file name.
    pub async fn markdown_files(&self) -> Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(&self.dir)
            .await
            .wrap_err_with(|| format!("failed to read directory {}", self.dir.display()))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .wrap_err("failed to read directory entry")?
        {
            let path = entry.path();
            let is_markdown = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
            if !is_markdown {
                continue;
            }
            // metadata follows symlinks; broken links stay in the list and
            // are reported when the read fails
            match fs::metadata(&path).await {
                Ok(metadata) if !metadata.is_file() => continue,
                _ => paths.push(path),
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    /// Reads all files concurrently and splits them into slides.
    ///
    /// Files that cannot be read are logged and skipped.
    pub async fn load(&self) -> Result<Deck> {
        let paths = self.markdown_files().await?;
        log::info!(
            "Loading {} markdown file(s) from {}",
            paths.len(),
            self.dir.display()
        );

        let contents = future::join_all(paths.iter().map(fs::read_to_string)).await;
        let contents = paths
            .iter()
            .zip(contents)
            .filter_map(|(path, content)| match content {
                Ok(content) => Some(content),
                Err(e) => {
                    log::warn!("Skipping {}: {e}", path.display());
                    None
                }
            });

        let deck = Deck::from_contents(contents);
        log::info!("Loaded {} slide(s)", deck.len());
        Ok(deck)
    }
}

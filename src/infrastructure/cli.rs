use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Directory containing the markdown slides [default: from config, or ./slides]
    #[arg(value_name = "SLIDES_DIR")]
    pub slides_dir: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 16.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    /// Quiet period in milliseconds before a key press changes the slide
    #[arg(short, long, value_name = "MILLIS")]
    pub debounce_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["keynote"]);
        assert_eq!(cli.slides_dir, None);
        assert_eq!(cli.tick_rate, 16.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.debounce_ms, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["keynote", "talk", "-t", "8", "--debounce-ms", "50"]);
        assert_eq!(cli.slides_dir, Some(PathBuf::from("talk")));
        assert_eq!(cli.tick_rate, 8.0);
        assert_eq!(cli.debounce_ms, Some(50));
    }
}

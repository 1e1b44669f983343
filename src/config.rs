//! Command-line arguments and the session configuration built from them.

use std::path::PathBuf;

use clap::Parser;

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "BRAMBLE_LOG";

#[derive(Parser, Debug)]
#[command(name = "bramble", version, about = "A terminal plain-text editor for long-form writing")]
pub struct Args {
    /// Document to open (NAME or NAME.txt); created on first save if missing
    pub file: Option<String>,

    /// Wrap lines at this many columns instead of the window width
    #[arg(long, value_name = "COLUMNS", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Start with a 12-hour clock
    #[arg(long = "12h")]
    pub twelve_hour: bool,

    /// Write diagnostics to this file (filter with BRAMBLE_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Settings for one editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed wrap width; None wraps at the editor pane width.
    pub wrap_width: Option<usize>,
    /// Clock format for new documents and for files without a `t` entry.
    pub clock24h: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: None,
            clock24h: true,
            log_file: None,
        }
    }
}

impl Args {
    /// Splits the arguments into the startup file and the session config.
    pub fn into_config(self) -> (Option<String>, Config) {
        let config = Config {
            wrap_width: self.width.map(usize::from),
            clock24h: !self.twelve_hour,
            log_file: self.log_file,
        };
        (self.file, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let (file, config) = Args::try_parse_from(["bramble"]).unwrap().into_config();
        assert_eq!(file, None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_fill_config() {
        let args = Args::try_parse_from([
            "bramble",
            "novel",
            "--width",
            "72",
            "--12h",
            "--log-file",
            "/tmp/bramble.log",
        ])
        .unwrap();
        let (file, config) = args.into_config();
        assert_eq!(file.as_deref(), Some("novel"));
        assert_eq!(config.wrap_width, Some(72));
        assert!(!config.clock24h);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/bramble.log")));
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Args::try_parse_from(["bramble", "--width", "0"]).is_err());
    }
}

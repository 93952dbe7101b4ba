use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tick", about = concat!("[\u{2713}] tick v", env!("CARGO_PKG_VERSION"), " - a tiny terminal todo list"), version)]
pub struct Cli {
    /// Use a different data directory for the task store
    #[arg(short = 'C', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,
}

/// Resolve the data directory: the `-C` flag if given, otherwise the
/// platform data directory plus `tick/`.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tick")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_platform_dir() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/elsewhere")));
        assert_eq!(dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn default_dir_ends_with_app_name() {
        let dir = resolve_data_dir(None);
        assert!(dir.ends_with("tick"));
    }
}

//! Command-line argument parsing.
//!
//! The defaults match the shipped configuration (15x15 grid, 100ms resize
//! debounce); flags exist mainly for poking at other sizes.

use anyhow::{anyhow, Result};

use tilegrid_types::GridConfig;

pub const USAGE: &str = "\
tui-tilegrid - terminal tile grid with an arrow-key cursor

USAGE:
    tui-tilegrid [OPTIONS]

OPTIONS:
    --rows <N>           Grid rows, 1-255 (default 15)
    --cols <N>           Grid columns, 1-255 (default 15)
    --debounce-ms <N>    Resize debounce delay in milliseconds (default 100)
    -h, --help           Print this help

KEYS:
    Arrow keys           Move the highlighted cell
    q / Esc / Ctrl-C     Quit
";

/// Parse arguments into a config.
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String]) -> Result<Option<GridConfig>> {
    let mut config = GridConfig::default();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                i += 1;
                config.rows = parse_value(args, i, "--rows")?;
            }
            "--cols" => {
                i += 1;
                config.cols = parse_value(args, i, "--cols")?;
            }
            "--debounce-ms" => {
                i += 1;
                config.debounce_ms = parse_value(args, i, "--debounce-ms")?;
            }
            "-h" | "--help" => {
                return Ok(None);
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    if config.rows == 0 || config.cols == 0 {
        return Err(anyhow!("grid dimensions must be at least 1x1"));
    }

    Ok(Some(config))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = args
        .get(i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid value for {}: {}", flag, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_gives_defaults() {
        let config = parse_args(&[]).unwrap().unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn test_dimension_overrides() {
        let config = parse_args(&args(&["--rows", "9", "--cols", "21"]))
            .unwrap()
            .unwrap();
        assert_eq!(config.rows, 9);
        assert_eq!(config.cols, 21);
        assert_eq!(config.debounce_ms, 100);
    }

    #[test]
    fn test_debounce_override() {
        let config = parse_args(&args(&["--debounce-ms", "250"])).unwrap().unwrap();
        assert_eq!(config.debounce_ms, 250);
    }

    #[test]
    fn test_help_short_circuits() {
        assert!(parse_args(&args(&["--help"])).unwrap().is_none());
        assert!(parse_args(&args(&["-h"])).unwrap().is_none());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_args(&args(&["--rows"])).is_err());
        assert!(parse_args(&args(&["--rows", "many"])).is_err());
        assert!(parse_args(&args(&["--rows", "0"])).is_err());
        assert!(parse_args(&args(&["--rows", "300"])).is_err());
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }
}

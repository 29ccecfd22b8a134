use std::path::PathBuf;

use anyhow::{Context, Result, ensure};

/// Command-line options.
///
/// All arguments are positional and optional, each defaulting when absent:
/// `pexeso-game [GLSL_DIR [ROWS [COLS [COLOURS [SIGNS]]]]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Directory the card shader sources are loaded from.
    pub glsl_dir: PathBuf,
    pub rows: usize,
    pub cols: usize,
    pub colours: usize,
    pub signs: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            glsl_dir: PathBuf::from("."),
            rows: 4,
            cols: 4,
            colours: 6,
            signs: 3,
        }
    }
}

impl Options {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();
        let mut args = args.into_iter();

        if let Some(dir) = args.next() {
            opts.glsl_dir = PathBuf::from(dir);
        }
        if let Some(v) = args.next() {
            opts.rows = parse_count(&v, "ROWS")?;
        }
        if let Some(v) = args.next() {
            opts.cols = parse_count(&v, "COLS")?;
        }
        if let Some(v) = args.next() {
            opts.colours = parse_count(&v, "COLOURS")?;
        }
        if let Some(v) = args.next() {
            opts.signs = parse_count(&v, "SIGNS")?;
        }

        opts.validate()?;
        Ok(opts)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            (1..=12).contains(&self.rows),
            "ROWS must be between 1 and 12, got {}",
            self.rows
        );
        ensure!(
            (1..=12).contains(&self.cols),
            "COLS must be between 1 and 12, got {}",
            self.cols
        );
        ensure!(
            (2..=6).contains(&self.colours),
            "COLOURS must be between 2 and 6, got {}",
            self.colours
        );
        ensure!(
            (1..=3).contains(&self.signs),
            "SIGNS must be between 1 and 3, got {}",
            self.signs
        );
        ensure!(
            self.rows * self.cols % 2 == 0,
            "a {}x{} grid holds an odd number of cards",
            self.rows,
            self.cols
        );
        Ok(())
    }
}

fn parse_count(value: &str, name: &str) -> Result<usize> {
    value
        .parse()
        .with_context(|| format!("{name} must be a number, got {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options> {
        Options::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_yields_defaults() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn prefix_of_args_overrides_in_order() {
        let opts = parse(&["shaders", "6", "8"]).unwrap();
        assert_eq!(opts.glsl_dir, PathBuf::from("shaders"));
        assert_eq!((opts.rows, opts.cols), (6, 8));
        // Trailing options keep their defaults.
        assert_eq!((opts.colours, opts.signs), (6, 3));
    }

    #[test]
    fn all_args() {
        let opts = parse(&["glsl", "2", "3", "4", "2"]).unwrap();
        assert_eq!(
            opts,
            Options {
                glsl_dir: PathBuf::from("glsl"),
                rows: 2,
                cols: 3,
                colours: 4,
                signs: 2,
            }
        );
    }

    #[test]
    fn out_of_range_rows_are_rejected() {
        assert!(parse(&[".", "0"]).is_err());
        assert!(parse(&[".", "13"]).is_err());
    }

    #[test]
    fn out_of_range_colours_and_signs_are_rejected() {
        assert!(parse(&[".", "4", "4", "1"]).is_err());
        assert!(parse(&[".", "4", "4", "7"]).is_err());
        assert!(parse(&[".", "4", "4", "6", "0"]).is_err());
        assert!(parse(&[".", "4", "4", "6", "4"]).is_err());
    }

    #[test]
    fn odd_card_count_is_rejected() {
        assert!(parse(&[".", "3", "3"]).is_err());
    }

    #[test]
    fn non_numeric_argument_is_rejected() {
        assert!(parse(&[".", "four"]).is_err());
    }
}

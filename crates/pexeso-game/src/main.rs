//! Keyboard-driven memory-card matching game.
//!
//! Arrows move the cursor, space picks a card, escape quits. Progress
//! (round banners, matches, the win line) is reported on the log.
//!
//! Usage: `pexeso-game [GLSL_DIR [ROWS [COLS [COLOURS [SIGNS]]]]]`,
//! where `GLSL_DIR` holds `CardVertex.glsl` and `CardFragment.glsl`
//! (defaults to the current directory).

mod app;
mod board;
mod options;

use anyhow::Result;

use pexeso_engine::logging::{LoggingConfig, init_logging};
use pexeso_engine::window::{Runtime, RuntimeConfig};

use crate::app::GameApp;
use crate::board::Board;
use crate::options::Options;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let opts = Options::parse(std::env::args().skip(1))?;
    log::debug!("options: {opts:?}");

    let mut rng = rand::rng();
    let board = Board::deal(opts.rows, opts.cols, opts.colours, opts.signs, &mut rng);
    let app = GameApp::new(opts.glsl_dir, board);

    let config = RuntimeConfig {
        title: "Pexeso".to_string(),
        ..RuntimeConfig::default()
    };
    Runtime::run(config, app)
}

use std::env;
use std::fs::File;

use log::{info, LevelFilter};
use simplelog::{Config as LogConfig, WriteLogger};

use gridsnake::config::GameConfig;
use gridsnake::game::SnakeGame;
use gridsnake::store::{FileScoreStore, ScoreStore, TcpScoreStore};

// Logs go to a file so raw-mode drawing is never interleaved with them.
const LOG_FILE: &str = "gridsnake.log";
const HIGH_SCORE_FILE: &str = ".gridsnake_high_score";

fn main() -> crossterm::Result<()> {
    WriteLogger::init(LevelFilter::Info, LogConfig::default(), File::create(LOG_FILE)?)
        .expect("Error initializing the logger");

    // An optional host:port argument points the game at a remote score
    // server; without one the highest score lives in a local file.
    let store: Box<dyn ScoreStore> = match env::args().nth(1) {
        Some(addr) => {
            info!("using the score server at {}", addr);
            Box::new(TcpScoreStore::new(addr))
        }
        None => {
            info!("using the local score file {}", HIGH_SCORE_FILE);
            Box::new(FileScoreStore::new(HIGH_SCORE_FILE))
        }
    };

    // A 20x20 grid keeps the board inside an ordinary terminal window.
    let config = GameConfig {
        width: 200,
        height: 200,
        cell_size: 10,
        initial_length: 4,
        tick_millis: 120,
    };

    let mut game = SnakeGame::new(config, store)?;
    game.run()
}

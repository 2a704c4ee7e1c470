//! blockdrop: a tiny rectangle game
//!
//! One blue square steered with the arrow keys inside a fixed 800x600
//! window, running a single 60 fps render loop until the window is closed.
//! Deliberately small: every frame clears, polls, moves, draws, presents.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod enemy;
mod entity;
mod game;
mod input;
mod player;

use config::Config;
use game::{cap_frame_rate, Game};
use input::KeySnapshot;
use log::info;
use macroquad::prelude::*;
use std::sync::OnceLock;

// Loaded once; window_conf() runs before main() and both need it
static CONFIG: OnceLock<Config> = OnceLock::new();

fn config() -> &'static Config {
    CONFIG.get_or_init(Config::load_or_default)
}

fn window_conf() -> Conf {
    env_logger::init();
    let config = config();
    Conf {
        window_title: format!("blockdrop v{}", VERSION),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config().clone();
    let target_frame_time = config.frame_time();
    let mut game = Game::new(config);

    info!("blockdrop v{} starting", VERSION);

    // Close requests come to us as an event instead of killing the process,
    // so the quit check below decides when the loop ends
    prevent_quit();

    while game.is_running() {
        let frame_start = get_time();

        // Quit first: a close event ends the iteration before anything
        // moves or draws
        if is_quit_requested() {
            game.terminate();
            break;
        }

        let keys = KeySnapshot::poll();
        game.frame(&keys);
        game.draw();

        cap_frame_rate(frame_start, target_frame_time);
        next_frame().await;
    }

    info!("quit requested, shutting down");
}

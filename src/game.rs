//! Loop driver
//!
//! Owns the config and the single player, and runs the two-state machine the
//! whole game is: `Running` until a quit request arrives, then `Terminated`
//! for good. Rendering stays in `draw` so the update path can be driven in
//! tests without a window.

use crate::config::Config;
use crate::input::KeySnapshot;
use crate::player::Player;
use macroquad::prelude::*;

/// Loop state. `Terminated` is absorbing - there is no pause or restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Terminated,
}

pub struct Game {
    pub config: Config,
    pub player: Player,
    pub state: RunState,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let player = Player::new(&config.player);
        Self {
            config,
            player,
            state: RunState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// A quit request ends the game unconditionally
    pub fn terminate(&mut self) {
        self.state = RunState::Terminated;
    }

    /// Advance one frame of game logic. Returns false once terminated, in
    /// which case nothing moves and nothing should be drawn this iteration.
    pub fn frame(&mut self, keys: &KeySnapshot) -> bool {
        if !self.is_running() {
            return false;
        }
        self.player.update(keys);
        true
    }

    /// Clear the surface and draw everything for the current frame
    pub fn draw(&self) {
        clear_background(self.config.background.to_color());
        self.player.draw();
    }
}

/// Block until the frame budget has elapsed: sleep for the bulk of the
/// remaining time, then spin-wait the last couple of milliseconds for
/// precision. On wasm there is no `thread::sleep`, so spin only.
pub fn cap_frame_rate(frame_start: f64, target_frame_time: f64) {
    let elapsed = get_time() - frame_start;
    if elapsed >= target_frame_time {
        return;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(Config::default())
    }

    #[test]
    fn test_starts_running() {
        let g = game();
        assert!(g.is_running());
        assert_eq!((g.player.body.x, g.player.body.y), (400.0, 300.0));
    }

    #[test]
    fn test_frame_advances_player() {
        let mut g = game();
        let keys = KeySnapshot { right: true, ..Default::default() };
        assert!(g.frame(&keys));
        assert_eq!((g.player.body.x, g.player.body.y), (405.0, 300.0));
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let mut g = game();
        g.terminate();
        assert!(!g.is_running());

        // Frames after termination do nothing
        let keys = KeySnapshot { down: true, ..Default::default() };
        assert!(!g.frame(&keys));
        assert_eq!((g.player.body.x, g.player.body.y), (400.0, 300.0));
        assert_eq!(g.state, RunState::Terminated);
    }

    #[test]
    fn test_quit_wins_over_input_in_same_frame() {
        // A close event observed during event processing stops the iteration
        // before any movement or drawing
        let mut g = game();
        let keys = KeySnapshot { right: true, up: true, ..Default::default() };
        g.terminate();
        assert!(!g.frame(&keys));
        assert_eq!((g.player.body.x, g.player.body.y), (400.0, 300.0));
    }
}

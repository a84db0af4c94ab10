//! Score, game-over and launch latches, and the HUD line

use serde::{Deserialize, Serialize};

use super::hooks::ScoreKeeper;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreManager {
    score: u32,
    game_over: bool,
    ball_launched: bool,
    display_text: String,
}

impl ScoreManager {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.update();
        manager
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn ball_launched(&self) -> bool {
        self.ball_launched
    }

    pub fn set_ball_launched(&mut self) {
        self.ball_launched = true;
    }

    /// HUD text as of the last [`update`](Self::update)
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Refresh the HUD text from the current latches
    pub fn update(&mut self) {
        self.display_text = if self.game_over {
            format!("FINAL SCORE: {}", self.score)
        } else if self.ball_launched {
            self.score.to_string()
        } else {
            "Space/A to launch ball".to_string()
        };
    }
}

impl ScoreKeeper for ScoreManager {
    fn increment_score(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    fn set_game_over(&mut self) {
        if !self.game_over {
            log::info!("Game over, final score {}", self.score);
        }
        self.game_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_text_follows_latches() {
        let mut score = ScoreManager::new();
        assert_eq!(score.display_text(), "Space/A to launch ball");

        score.set_ball_launched();
        score.increment_score();
        score.increment_score();
        score.update();
        assert_eq!(score.display_text(), "2");

        score.set_game_over();
        score.update();
        assert_eq!(score.display_text(), "FINAL SCORE: 2");
    }

    #[test]
    fn test_latches_stay_set() {
        let mut score = ScoreManager::new();
        score.set_game_over();
        score.set_game_over();
        score.set_ball_launched();
        assert!(score.is_game_over());
        assert!(score.ball_launched());
        assert_eq!(score.score(), 0);
    }

    #[test]
    fn test_text_is_stale_until_update() {
        let mut score = ScoreManager::new();
        score.set_ball_launched();
        assert_eq!(score.display_text(), "Space/A to launch ball");
        score.update();
        assert_eq!(score.display_text(), "0");
    }
}

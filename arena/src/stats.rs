//! Arena result tracking.

use std::time::Instant;

use games_quarto::{Outcome, Player};
use tracing::info;

/// Tally of a series of games between two agents.
///
/// Results are kept per agent, not per seat, so swapping seats between
/// games does not mix up who won.
#[derive(Debug)]
pub struct ArenaStats {
    names: [String; 2],
    wins: [u32; 2],
    /// Wins by whichever agent sat in the first seat
    first_seat_wins: u32,
    draws: u32,
    total_placements: u64,
    start_time: Instant,
}

impl ArenaStats {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            names: [first.to_string(), second.to_string()],
            wins: [0; 2],
            first_seat_wins: 0,
            draws: 0,
            total_placements: 0,
            start_time: Instant::now(),
        }
    }

    /// Record a finished game. `seats[i]` is the agent index sitting in seat `i`.
    pub fn record_game(&mut self, outcome: Outcome, seats: [usize; 2], placements: usize) {
        self.total_placements += placements as u64;
        match outcome {
            Outcome::Winner(player) => {
                self.wins[seats[player.index()]] += 1;
                if player == Player::First {
                    self.first_seat_wins += 1;
                }
            }
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins[0] + self.wins[1] + self.draws
    }

    pub fn wins(&self, agent: usize) -> u32 {
        self.wins[agent]
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn first_seat_wins(&self) -> u32 {
        self.first_seat_wins
    }

    /// Share of games won by `agent`, counting draws as half.
    pub fn score(&self, agent: usize) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        (self.wins[agent] as f64 + 0.5 * self.draws as f64) / games as f64
    }

    pub fn avg_game_length(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.total_placements as f64 / games as f64
    }

    /// Log the final summary.
    pub fn log_summary(&self) {
        info!(
            games = self.games(),
            first = %self.names[0],
            first_wins = self.wins[0],
            first_score = format!("{:.3}", self.score(0)),
            second = %self.names[1],
            second_wins = self.wins[1],
            second_score = format!("{:.3}", self.score(1)),
            draws = self.draws,
            first_seat_wins = self.first_seat_wins,
            avg_game_length = format!("{:.1}", self.avg_game_length()),
            runtime_secs = format!("{:.1}", self.start_time.elapsed().as_secs_f64()),
            "Arena finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats() {
        let stats = ArenaStats::new("minimax", "random");
        assert_eq!(stats.games(), 0);
        assert_eq!(stats.score(0), 0.0);
        assert_eq!(stats.avg_game_length(), 0.0);
    }

    #[test]
    fn test_wins_follow_agents_across_seat_swaps() {
        let mut stats = ArenaStats::new("minimax", "random");
        // Agent 0 in the first seat wins.
        stats.record_game(Outcome::Winner(Player::First), [0, 1], 10);
        // Seats swapped: agent 0 in the second seat wins.
        stats.record_game(Outcome::Winner(Player::Second), [1, 0], 12);
        stats.record_game(Outcome::Draw, [0, 1], 16);

        assert_eq!(stats.games(), 3);
        assert_eq!(stats.wins(0), 2);
        assert_eq!(stats.wins(1), 0);
        assert_eq!(stats.draws(), 1);
        assert_eq!(stats.first_seat_wins(), 1);
        assert!((stats.score(0) - 2.5 / 3.0).abs() < 1e-9);
        assert!((stats.avg_game_length() - 38.0 / 3.0).abs() < 1e-9);
    }
}

use chrono::{DateTime, Utc};

use crate::domain::{MatchId, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub entry_fee_usd_cents: u64,
    pub prize_usd_cents: u64,
    pub player1_points: u32,
    pub player2_points: u32,
    pub winner_id: Option<PlayerId>,
    pub winner_points: u32,
    pub is_disqualification: bool,
    pub created_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Match {
    /// A match is active until it has been settled.
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    pub fn is_participant(&self, player: PlayerId) -> bool {
        self.player1_id == player || self.player2_id == player
    }

    /// The opponent of `player`, if `player` is a participant.
    pub fn other_participant(&self, player: PlayerId) -> Option<PlayerId> {
        if player == self.player1_id {
            Some(self.player2_id)
        } else if player == self.player2_id {
            Some(self.player1_id)
        } else {
            None
        }
    }

    pub fn points_of(&self, player: PlayerId) -> Option<u32> {
        if player == self.player1_id {
            Some(self.player1_points)
        } else if player == self.player2_id {
            Some(self.player2_points)
        } else {
            None
        }
    }

    pub fn is_tied(&self) -> bool {
        self.player1_points == self.player2_points
    }

    /// Winner by point totals. None on a tie.
    pub fn leader(&self) -> Option<PlayerId> {
        if self.player1_points > self.player2_points {
            Some(self.player1_id)
        } else if self.player2_points > self.player1_points {
            Some(self.player2_id)
        } else {
            None
        }
    }

    /// Whole seconds between creation and settlement (or `now` while active).
    pub fn age_seconds(&self, now: DateTime<Utc>) -> i64 {
        let end = self.ended_at.unwrap_or(now);
        let millis = (end - self.created_at).num_milliseconds();
        (millis as f64 / 1000.0).round() as i64
    }
}

use chrono::{DateTime, Utc};

use crate::domain::PlayerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
    Ambi,
}

impl Handedness {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "left" => Some(Handedness::Left),
            "right" => Some(Handedness::Right),
            "ambi" => Some(Handedness::Ambi),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
            Handedness::Ambi => "ambi",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub handedness: Handedness,
    pub is_active: bool,
    pub balance_usd_cents: u64,
    pub num_disqualifications: u32,
    pub in_active_match: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Player {
    /// Display name: first name, plus the last name when one is set.
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Aggregate match statistics for one player, computed on read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerMatchStats {
    pub num_joined: u64,
    pub num_won: u64,
    pub total_points_won: u64,
    pub total_prize_won_usd_cents: u64,
}

impl PlayerMatchStats {
    pub fn efficiency(&self) -> f64 {
        if self.num_joined == 0 {
            0.0
        } else {
            self.num_won as f64 / self.num_joined as f64
        }
    }
}

use crate::domain::{
    LedgerResult, PlayerId,
    player::{Handedness, Player, PlayerMatchStats},
};
use crate::ports::store::{MatchFilter, MatchNumericField, MatchStore};

pub mod create;
pub mod delete;
pub mod deposit;
pub mod get;
pub mod list;
pub mod update;

/// Read-facing shape of a player: stored fields plus derived aggregates.
#[derive(Clone, Debug)]
pub struct PlayerView {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub handedness: Handedness,
    pub is_active: bool,
    pub balance_usd_cents: u64,
    pub num_disqualifications: u32,
    pub in_active_match: bool,
    pub stats: PlayerMatchStats,
}

impl PlayerView {
    pub fn assemble(player: Player, stats: PlayerMatchStats) -> Self {
        let name = player.display_name();
        Self {
            id: player.id,
            first_name: player.first_name,
            last_name: player.last_name,
            name,
            handedness: player.handedness,
            is_active: player.is_active,
            balance_usd_cents: player.balance_usd_cents,
            num_disqualifications: player.num_disqualifications,
            in_active_match: player.in_active_match,
            stats,
        }
    }

    pub fn efficiency(&self) -> f64 {
        self.stats.efficiency()
    }
}

/// Aggregate queries behind the derived player stats. The win-dependent
/// sums are skipped entirely when the player never joined or never won.
pub(crate) async fn load_player_stats<MS>(
    matches: &MS,
    player_id: PlayerId,
) -> LedgerResult<PlayerMatchStats>
where
    MS: MatchStore + ?Sized,
{
    let joined = MatchFilter {
        participant: Some(player_id),
        ..Default::default()
    };
    let num_joined = matches.count(joined).await?;
    if num_joined == 0 {
        return Ok(PlayerMatchStats::default());
    }

    let won = MatchFilter {
        winner: Some(player_id),
        ..Default::default()
    };
    let num_won = matches.count(won).await?;
    let (total_points_won, total_prize_won_usd_cents) = if num_won == 0 {
        (0, 0)
    } else {
        (
            matches.sum(won, MatchNumericField::WinnerPoints).await?,
            matches.sum(won, MatchNumericField::PrizeUsdCents).await?,
        )
    };

    Ok(PlayerMatchStats {
        num_joined,
        num_won,
        total_points_won,
        total_prize_won_usd_cents,
    })
}

pub(crate) async fn assemble_player_view<MS>(
    matches: &MS,
    player: Player,
) -> LedgerResult<PlayerView>
where
    MS: MatchStore + ?Sized,
{
    let stats = load_player_stats(matches, player.id).await?;
    Ok(PlayerView::assemble(player, stats))
}

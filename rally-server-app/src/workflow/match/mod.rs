use chrono::{DateTime, Utc};

use crate::domain::{LedgerResult, MatchId, PlayerId, r#match::Match};
use crate::ports::store::PlayerStore;

pub mod award;
pub mod create;
pub mod disqualify;
pub mod end;
pub mod finalize;
pub mod get;
pub mod list;

/// Name rendered for a participant whose player record no longer exists.
const MISSING_PLAYER_NAME: &str = "unknown";

/// Read-facing shape of a match: stored fields plus resolved names and
/// the derived activity/age values.
#[derive(Clone, Debug)]
pub struct MatchView {
    pub id: MatchId,
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player1_points: u32,
    pub player2_id: PlayerId,
    pub player2_name: String,
    pub player2_points: u32,
    pub entry_fee_usd_cents: u64,
    pub prize_usd_cents: u64,
    pub winner_id: Option<PlayerId>,
    pub is_disqualification: bool,
    pub is_active: bool,
    pub age_seconds: i64,
    pub created_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

pub(crate) async fn assemble_match_view<PS>(players: &PS, m: Match) -> LedgerResult<MatchView>
where
    PS: PlayerStore + ?Sized,
{
    let now = Utc::now();
    let player1_name = resolve_name(players, m.player1_id).await?;
    let player2_name = resolve_name(players, m.player2_id).await?;
    Ok(MatchView {
        id: m.id,
        player1_id: m.player1_id,
        player1_name,
        player1_points: m.player1_points,
        player2_id: m.player2_id,
        player2_name,
        player2_points: m.player2_points,
        entry_fee_usd_cents: m.entry_fee_usd_cents,
        prize_usd_cents: m.prize_usd_cents,
        winner_id: m.winner_id,
        is_disqualification: m.is_disqualification,
        is_active: m.is_active(),
        age_seconds: m.age_seconds(now),
        created_at: m.created_at,
        ended_at: m.ended_at,
    })
}

async fn resolve_name<PS>(players: &PS, id: PlayerId) -> LedgerResult<String>
where
    PS: PlayerStore + ?Sized,
{
    Ok(players
        .get(id)
        .await?
        .map(|p| p.display_name())
        .unwrap_or_else(|| MISSING_PLAYER_NAME.to_string()))
}

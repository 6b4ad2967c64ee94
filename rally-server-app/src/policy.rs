//! Per-operation check sequences. Each function either returns a fully
//! validated command or the first applicable failure, and never writes.
//! Mutating use cases run the state-dependent checks again under the
//! entity locks they hold.

use crate::domain::{
    LedgerError, LedgerResult, MatchId, PlayerId,
    player::{Handedness, Player},
    r#match::Match,
    validate,
};
use crate::ports::store::{MatchStore, PlayerStore};

pub fn parse_player_id(raw: &str) -> LedgerResult<PlayerId> {
    match PlayerId::parse(raw) {
        Some(id) => Ok(id),
        None => LedgerError::not_found(format!("player {raw}")),
    }
}

pub fn parse_match_id(raw: &str) -> LedgerResult<MatchId> {
    match MatchId::parse(raw) {
        Some(id) => Ok(id),
        None => LedgerError::not_found(format!("match {raw}")),
    }
}

async fn fetch_player<PS>(players: &PS, id: PlayerId) -> LedgerResult<Player>
where
    PS: PlayerStore + ?Sized,
{
    players
        .get(id)
        .await?
        .ok_or_else(|| LedgerError::NotFound(format!("player {id}")))
}

async fn fetch_match<MS>(matches: &MS, id: MatchId) -> LedgerResult<Match>
where
    MS: MatchStore + ?Sized,
{
    matches
        .get(id)
        .await?
        .ok_or_else(|| LedgerError::NotFound(format!("match {id}")))
}

#[derive(Clone, Debug, Default)]
pub struct CreatePlayerInput {
    pub fname: Option<String>,
    pub lname: Option<String>,
    pub handed: Option<String>,
    pub initial_balance_usd_cents: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CreatePlayerCommand {
    pub first_name: String,
    pub last_name: String,
    pub handedness: Handedness,
    pub initial_balance_usd_cents: u64,
}

pub fn validate_create_player(input: &CreatePlayerInput) -> LedgerResult<CreatePlayerCommand> {
    let mut bad = Vec::new();

    let first_name = match input.fname.as_deref() {
        Some(name) if validate::is_valid_name(name) => name.to_string(),
        _ => {
            bad.push("fname");
            String::new()
        }
    };
    let last_name = match input.lname.as_deref() {
        None => String::new(),
        Some(name) if validate::is_valid_last_name(name) => name.to_string(),
        Some(_) => {
            bad.push("lname");
            String::new()
        }
    };
    let handedness = match input.handed.as_deref().and_then(Handedness::parse) {
        Some(handedness) => handedness,
        None => {
            bad.push("handed");
            Handedness::Ambi
        }
    };
    let initial_balance_usd_cents = match input
        .initial_balance_usd_cents
        .as_deref()
        .and_then(validate::parse_currency)
    {
        Some(amount) => amount,
        None => {
            bad.push("initial_balance_usd_cents");
            0
        }
    };

    if !bad.is_empty() {
        return LedgerError::invalid_fields(bad);
    }
    Ok(CreatePlayerCommand {
        first_name,
        last_name,
        handedness,
        initial_balance_usd_cents,
    })
}

#[derive(Clone, Debug, Default)]
pub struct UpdatePlayerInput {
    pub lname: Option<String>,
    pub is_active: Option<bool>,
    pub deposit_usd_cents: Option<String>,
}

#[derive(Clone, Debug)]
pub struct UpdatePlayerCommand {
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
    pub deposit_usd_cents: Option<u64>,
}

pub fn validate_update_player(input: &UpdatePlayerInput) -> LedgerResult<UpdatePlayerCommand> {
    let mut bad = Vec::new();

    if let Some(name) = input.lname.as_deref()
        && !validate::is_valid_last_name(name)
    {
        bad.push("lname");
    }
    let deposit_usd_cents = match input.deposit_usd_cents.as_deref() {
        None => None,
        Some(raw) => match validate::parse_currency(raw) {
            Some(amount) => Some(amount),
            None => {
                bad.push("amount_usd_cents");
                None
            }
        },
    };

    if !bad.is_empty() {
        return LedgerError::invalid_fields(bad);
    }
    Ok(UpdatePlayerCommand {
        last_name: input.lname.clone(),
        is_active: input.is_active,
        deposit_usd_cents,
    })
}

#[derive(Clone, Debug, Default)]
pub struct CreateMatchInput {
    pub pid1: Option<String>,
    pub pid2: Option<String>,
    pub entry_fee_usd_cents: Option<String>,
    pub prize_usd_cents: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CreateMatchCommand {
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub entry_fee_usd_cents: u64,
    pub prize_usd_cents: u64,
}

pub fn validate_create_match(input: &CreateMatchInput) -> LedgerResult<CreateMatchCommand> {
    let mut bad = Vec::new();
    if input.pid1.is_none() {
        bad.push("pid1");
    }
    if input.pid2.is_none() {
        bad.push("pid2");
    }
    let entry_fee = match input
        .entry_fee_usd_cents
        .as_deref()
        .and_then(validate::parse_currency)
    {
        Some(amount) => amount,
        None => {
            bad.push("entry_fee_usd_cents");
            0
        }
    };
    let prize = match input
        .prize_usd_cents
        .as_deref()
        .and_then(validate::parse_currency)
    {
        Some(amount) => amount,
        None => {
            bad.push("prize_usd_cents");
            0
        }
    };
    if !bad.is_empty() {
        return LedgerError::invalid_fields(bad);
    }

    let player1_id = parse_player_id(input.pid1.as_deref().unwrap_or_default())?;
    let player2_id = parse_player_id(input.pid2.as_deref().unwrap_or_default())?;
    if player1_id == player2_id {
        return LedgerError::invalid_fields(vec!["pid2"]);
    }

    Ok(CreateMatchCommand {
        player1_id,
        player2_id,
        entry_fee_usd_cents: entry_fee,
        prize_usd_cents: prize,
    })
}

/// State checks for match creation: both players exist, neither is tied up
/// in another match, and both can cover the entry fee.
pub async fn check_match_funding<PS>(
    players: &PS,
    cmd: &CreateMatchCommand,
) -> LedgerResult<(Player, Player)>
where
    PS: PlayerStore + ?Sized,
{
    let player1 = fetch_player(players, cmd.player1_id).await?;
    let player2 = fetch_player(players, cmd.player2_id).await?;

    if player1.in_active_match || player2.in_active_match {
        return LedgerError::conflict("player already in an active match");
    }
    if player1.balance_usd_cents < cmd.entry_fee_usd_cents
        || player2.balance_usd_cents < cmd.entry_fee_usd_cents
    {
        return Err(LedgerError::InsufficientFunds);
    }
    Ok((player1, player2))
}

/// Award gate: both entities exist, the match is still active, the point
/// value parses, and the player is one of the two participants.
pub async fn check_award<PS, MS>(
    players: &PS,
    matches: &MS,
    match_id: MatchId,
    player_id: PlayerId,
    points_raw: Option<&str>,
) -> LedgerResult<(Match, u32)>
where
    PS: PlayerStore + ?Sized,
    MS: MatchStore + ?Sized,
{
    fetch_player(players, player_id).await?;
    let m = fetch_match(matches, match_id).await?;

    if !m.is_active() {
        return LedgerError::conflict("match already ended");
    }

    let mut bad = Vec::new();
    let points = match points_raw.and_then(validate::parse_point_value) {
        Some(points) => points,
        None => {
            bad.push("points");
            0
        }
    };
    if !m.is_participant(player_id) {
        bad.push("pid");
    }
    if !bad.is_empty() {
        return LedgerError::invalid_fields(bad);
    }
    Ok((m, points))
}

/// Disqualification gate: both entities exist, the match is still active,
/// and the player is a participant.
pub async fn check_disqualify<PS, MS>(
    players: &PS,
    matches: &MS,
    match_id: MatchId,
    player_id: PlayerId,
) -> LedgerResult<(Match, Player)>
where
    PS: PlayerStore + ?Sized,
    MS: MatchStore + ?Sized,
{
    let m = fetch_match(matches, match_id).await?;
    let player = fetch_player(players, player_id).await?;

    if !m.is_active() {
        return LedgerError::conflict("match already ended");
    }
    if !m.is_participant(player_id) {
        return LedgerError::invalid_fields(vec!["pid"]);
    }
    Ok((m, player))
}

/// Normal-end gate: the match exists, is active, and is not tied.
pub async fn check_end_match<MS>(matches: &MS, match_id: MatchId) -> LedgerResult<Match>
where
    MS: MatchStore + ?Sized,
{
    let m = fetch_match(matches, match_id).await?;
    if !m.is_active() {
        return LedgerError::conflict("match already ended");
    }
    if m.is_tied() {
        return LedgerError::conflict("match is tied");
    }
    Ok(m)
}

/// Deletion gate: the player exists and is not escrowed into a live match.
pub async fn check_delete_player<PS>(players: &PS, player_id: PlayerId) -> LedgerResult<Player>
where
    PS: PlayerStore + ?Sized,
{
    let player = fetch_player(players, player_id).await?;
    if player.in_active_match {
        return LedgerError::conflict("player is in an active match");
    }
    Ok(player)
}

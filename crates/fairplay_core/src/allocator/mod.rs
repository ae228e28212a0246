//! Fair team allocation.
//!
//! Partitions a roster into teams of bounded strength skew and resolves each
//! team's starters into sport positions. The whole pass is a pure function
//! of the roster plus the injected RNG: shuffle, stable-sort by descending
//! level, deal round-robin, then fill the formation in two passes.
//!
//! An under-supplied roster is not an error here; teams simply come out with
//! fewer starters, missing position groups or no captain. Rejecting such
//! input up front is the caller's job.

mod fairness;
mod formation;

pub use fairness::{fairness_skew, FairnessRating};
pub use formation::Formation;

use crate::models::{Player, Position, Sport, Team};
use rand::seq::SliceRandom;
use rand::Rng;

/// Split `roster` into `team_count` teams of up to `starter_slots` starters.
///
/// Distribution order is strongest-first round-robin, which keeps the
/// per-team level-sum spread within one unit whenever the roster divides
/// evenly across teams. Ties between equal-level players keep their
/// shuffled order, so equally rated players land on different teams from
/// one regeneration to the next.
pub fn allocate(
    roster: &[Player],
    team_count: usize,
    starter_slots: usize,
    sport: Sport,
    rng: &mut impl Rng,
) -> Vec<Team> {
    if team_count == 0 {
        return Vec::new();
    }
    let mut pool: Vec<Player> = roster.to_vec();
    pool.shuffle(rng);
    // Stable: equal levels retain their shuffled order.
    pool.sort_by_key(|p| std::cmp::Reverse(p.level.value()));

    let mut starter_pools: Vec<Vec<Player>> = vec![Vec::new(); team_count];
    let mut substitute_pools: Vec<Vec<Player>> = vec![Vec::new(); team_count];

    for (i, player) in pool.into_iter().enumerate() {
        let team = i % team_count;
        if starter_pools[team].len() < starter_slots {
            starter_pools[team].push(player);
        } else {
            substitute_pools[team].push(player);
        }
    }

    let teams: Vec<Team> = starter_pools
        .into_iter()
        .zip(substitute_pools)
        .enumerate()
        .map(|(idx, (starters, mut substitutes))| {
            let formation = Formation::for_sport(sport, starters.len());
            let (starters_by_position, leftovers) =
                assign_positions(starters, &formation, sport);
            substitutes.extend(leftovers);

            let captain = pick_captain(&starters_by_position, rng);
            Team {
                id: idx as u32 + 1,
                name: format!("Team {}", idx + 1),
                captain,
                starters_by_position,
                substitutes,
            }
        })
        .collect();

    log::debug!(
        "allocated {} players into {} teams ({:?}, skew {})",
        roster.len(),
        team_count,
        sport,
        fairness_skew(&teams)
    );
    teams
}

/// Resolve one team's starter pool into position groups.
///
/// Pass 1 fills each position's demand with matching specialists in pool
/// order. Pass 2 fills what is still short, preferring jokers, then anyone
/// left. Players the formation has no room for come back as leftovers.
/// Positions that end up empty are dropped from the result.
fn assign_positions(
    pool: Vec<Player>,
    formation: &Formation,
    sport: Sport,
) -> (Vec<(Position, Vec<Player>)>, Vec<Player>) {
    let mut pool: Vec<Option<Player>> = pool.into_iter().map(Some).collect();
    let mut groups: Vec<(Position, Vec<Player>)> = sport
        .positions()
        .iter()
        .map(|&position| (position, Vec::new()))
        .collect();

    // Pass 1: specialists, in priority order.
    for (position, players) in groups.iter_mut() {
        let needed = formation.required(*position);
        while players.len() < needed {
            let found = pool
                .iter()
                .position(|slot| matches!(slot, Some(p) if p.position == *position));
            match found {
                Some(i) => {
                    if let Some(player) = pool[i].take() {
                        players.push(player);
                    }
                }
                None => break,
            }
        }
    }

    // Pass 2: cover the gaps with jokers first, then whoever remains.
    for (position, players) in groups.iter_mut() {
        let needed = formation.required(*position);
        while players.len() < needed {
            let pick = pool
                .iter()
                .position(|slot| matches!(slot, Some(p) if p.position == Position::Joker))
                .or_else(|| pool.iter().position(Option::is_some));
            match pick {
                Some(i) => {
                    if let Some(player) = pool[i].take() {
                        players.push(player);
                    }
                }
                None => break,
            }
        }
    }

    let leftovers: Vec<Player> = pool.into_iter().flatten().collect();
    groups.retain(|(_, players)| !players.is_empty());
    (groups, leftovers)
}

fn pick_captain(
    groups: &[(Position, Vec<Player>)],
    rng: &mut impl Rng,
) -> Option<Player> {
    let starters: Vec<&Player> = groups
        .iter()
        .flat_map(|(_, players)| players.iter())
        .collect();
    starters.choose(rng).map(|p| (*p).clone())
}

//! Round pairing over the current standings

use std::collections::VecDeque;

use rand::seq::SliceRandom;

use arena_core::{Pairing, RoundPairings, ScoreTable};

pub struct PairingScheduler;

impl PairingScheduler {
    /// Pair every registered player for one round.
    ///
    /// Shuffle first, then stable-sort by points descending, so equal
    /// scores break ties randomly. Pairs pop from the top; the seat
    /// with fewer games played takes White. An odd roster leaves the
    /// last player as the bye.
    pub fn next_round(table: &ScoreTable) -> RoundPairings {
        let mut entries = table.standings();
        let mut rng = rand::thread_rng();
        entries.shuffle(&mut rng);
        entries.sort_by(|a, b| {
            b.points
                .partial_cmp(&a.points)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut queue: VecDeque<_> = entries.into();
        let mut pairings = Vec::new();
        while queue.len() >= 2 {
            let (Some(first), Some(second)) = (queue.pop_front(), queue.pop_front()) else {
                break;
            };
            let (white, black) = if second.games_played < first.games_played {
                (second.id, first.id)
            } else {
                (first.id, second.id)
            };
            pairings.push(Pairing { white, black });
        }
        let bye = queue.pop_front().map(|standing| standing.id);
        RoundPairings { pairings, bye }
    }
}

//! Rank table - the fixed, totally ordered hierarchy of ranks (patentes)
//!
//! Ordering is by `id` ascending. `id = 1` is the entry rank and the highest
//! defined id is the ceiling for promotions.

use std::fmt;

use serde::Serialize;

/// A single rank in the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Rank {
    pub id: i32,
    pub name: &'static str,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Lowest rank id, assigned to freshly provisioned members
pub const MIN_RANK_ID: i32 = 1;

/// Name returned for ids that are not in the table
pub const UNKNOWN_RANK_NAME: &str = "Patente desconhecida";

const RANKS: [Rank; 13] = [
    Rank { id: 1, name: "Soldado" },
    Rank { id: 2, name: "Cabo" },
    Rank { id: 3, name: "Sargento" },
    Rank { id: 4, name: "Subtenente" },
    Rank { id: 5, name: "Aspirante a oficial" },
    Rank { id: 6, name: "Tenente" },
    Rank { id: 7, name: "Capitao" },
    Rank { id: 8, name: "Major" },
    Rank { id: 9, name: "Coronel" },
    Rank { id: 10, name: "General" },
    Rank { id: 11, name: "Marechal" },
    Rank { id: 12, name: "Comandante" },
    Rank { id: 13, name: "Comandante-geral" },
];

/// All ranks, lowest first
pub fn all() -> &'static [Rank] {
    &RANKS
}

/// Highest defined rank id
pub fn max_rank_id() -> i32 {
    RANKS[RANKS.len() - 1].id
}

/// Look up a rank by id
pub fn find(id: i32) -> Option<Rank> {
    RANKS.iter().copied().find(|rank| rank.id == id)
}

/// Check whether `id` names a rank
#[inline]
pub fn is_valid(id: i32) -> bool {
    find(id).is_some()
}

/// The rank directly above `id`, or `None` at the ceiling (or for unknown ids)
pub fn rank_after(id: i32) -> Option<Rank> {
    if !is_valid(id) {
        return None;
    }
    find(id + 1)
}

/// The rank directly below `id`, or `None` at the floor (or for unknown ids)
pub fn rank_before(id: i32) -> Option<Rank> {
    if !is_valid(id) {
        return None;
    }
    find(id - 1)
}

/// Display name for a rank id; never fails so stale foreign ids still render
pub fn name_of(id: i32) -> &'static str {
    find(id).map_or(UNKNOWN_RANK_NAME, |rank| rank.name)
}

/// Case-insensitive reverse lookup
pub fn id_by_name(name: &str) -> Option<i32> {
    let name = name.trim();
    RANKS
        .iter()
        .find(|rank| rank.name.eq_ignore_ascii_case(name))
        .map(|rank| rank.id)
}

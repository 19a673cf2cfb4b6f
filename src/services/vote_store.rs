use std::collections::HashMap;

use crate::entity::{SeedPolicy, VoteChoice, VoteTally};

/// In-memory vote tallies keyed by token id.
///
/// Keys remember the order they were first seeded in, so the most recently
/// scanned token is always the last key. Entries are never removed.
#[derive(Debug, Default)]
pub struct VoteStore {
    tallies: HashMap<String, VoteTally>,
    order: Vec<String>,
    policy: SeedPolicy,
}

impl VoteStore {
    pub fn new(policy: SeedPolicy) -> Self {
        Self {
            tallies: HashMap::new(),
            order: Vec::new(),
            policy,
        }
    }

    /// Starts a zeroed tally for `token`. A token seeded again keeps its
    /// position; its counts survive unless the policy is `Reset`.
    pub fn seed(&mut self, token: &str) {
        match self.tallies.get_mut(token) {
            Some(tally) => {
                if self.policy == SeedPolicy::Reset {
                    *tally = VoteTally::default();
                }
            }
            None => {
                self.tallies.insert(token.to_string(), VoteTally::default());
                self.order.push(token.to_string());
            }
        }
    }

    pub fn most_recent(&self) -> Option<&str> {
        self.order.last().map(String::as_str)
    }

    /// Adds one vote and returns the new tally, or `None` for a token that was never seeded.
    pub fn record_vote(&mut self, token: &str, choice: VoteChoice) -> Option<VoteTally> {
        let tally = self.tallies.get_mut(token)?;
        match choice {
            VoteChoice::Approve => tally.approve += 1,
            VoteChoice::Reject => tally.reject += 1,
        }
        Some(*tally)
    }

    pub fn get(&self, token: &str) -> Option<VoteTally> {
        self.tallies.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_most_recent() {
        let store = VoteStore::default();
        assert!(store.is_empty());
        assert_eq!(store.most_recent(), None);
    }

    #[test]
    fn approve_then_reject_counts_both() {
        let mut store = VoteStore::default();
        store.seed("ABC");
        store.record_vote("ABC", VoteChoice::Approve);
        let tally = store.record_vote("ABC", VoteChoice::Reject).unwrap();
        assert_eq!(tally, VoteTally { approve: 1, reject: 1 });
    }

    #[test]
    fn vote_for_unknown_token_is_ignored() {
        let mut store = VoteStore::default();
        store.seed("ABC");

        assert_eq!(store.record_vote("XYZ", VoteChoice::Approve), None);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("XYZ"), None);
        assert_eq!(store.get("ABC"), Some(VoteTally::default()));
    }

    #[test]
    fn last_seeded_token_is_most_recent() {
        let mut store = VoteStore::default();
        store.seed("ABC");
        store.seed("XYZ");
        assert_eq!(store.most_recent(), Some("XYZ"));
    }

    #[test]
    fn reseeding_keeps_position_and_votes_by_default() {
        let mut store = VoteStore::new(SeedPolicy::Preserve);
        store.seed("ABC");
        store.record_vote("ABC", VoteChoice::Approve);
        store.seed("XYZ");
        store.seed("ABC");

        assert_eq!(store.len(), 2);
        assert_eq!(store.most_recent(), Some("XYZ"));
        assert_eq!(store.get("ABC"), Some(VoteTally { approve: 1, reject: 0 }));
    }

    #[test]
    fn reset_policy_zeroes_counts_on_rescan() {
        let mut store = VoteStore::new(SeedPolicy::Reset);
        store.seed("ABC");
        store.record_vote("ABC", VoteChoice::Reject);
        store.record_vote("ABC", VoteChoice::Reject);
        store.seed("XYZ");
        store.seed("ABC");

        assert_eq!(store.get("ABC"), Some(VoteTally::default()));
        assert_eq!(store.most_recent(), Some("XYZ"));
    }
}

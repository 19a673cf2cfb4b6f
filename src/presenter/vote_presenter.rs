use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

use crate::entity::{Reply, VoteChoice, VoteTally};
use crate::interactor::VoteInteractor;

pub const SCAN_FIRST: &str = "ℹ️ You need to scan a token before voting.";

/// Telegram rejects inline buttons whose callback data exceeds this many bytes
pub const MAX_CALLBACK_DATA_BYTES: usize = 64;

#[async_trait]
pub trait VotePresenter: Send + Sync {
    /// Ballot for the most recently scanned token
    async fn show_ballot(&self) -> Vec<Reply>;

    /// Running totals after a vote; empty when the token was never scanned
    async fn show_vote_result(&self, token: &str, choice: VoteChoice) -> Vec<Reply>;
}

pub struct VotePresenterImpl<I> {
    interactor: Arc<I>,
}

impl<I> VotePresenterImpl<I>
where
    I: VoteInteractor,
{
    pub fn new(interactor: Arc<I>) -> Self {
        Self { interactor }
    }
}

#[async_trait]
impl<I> VotePresenter for VotePresenterImpl<I>
where
    I: VoteInteractor + Send + Sync,
{
    async fn show_ballot(&self) -> Vec<Reply> {
        match self.interactor.current_ballot().await {
            Some(token) => vec![ballot_reply(&token)],
            None => vec![Reply::text(SCAN_FIRST)],
        }
    }

    async fn show_vote_result(&self, token: &str, choice: VoteChoice) -> Vec<Reply> {
        self.interactor
            .cast_vote(token, choice)
            .await
            .map(|tally| vec![tally_reply(&tally)])
            .unwrap_or_default()
    }
}

pub fn ballot_reply(token: &str) -> Reply {
    let text = format!("🗳 Voting for token: {}", token);
    let choices = [VoteChoice::Approve, VoteChoice::Reject];

    if choices
        .iter()
        .any(|choice| choice.callback_data(token).len() > MAX_CALLBACK_DATA_BYTES)
    {
        warn!(
            "Token id of {} bytes is too long for vote buttons: {}",
            token.len(),
            token
        );
        return Reply::text(format!(
            "{}\n⚠️ This token id is too long for voting buttons.",
            text
        ));
    }

    Reply::Keyboard {
        text,
        buttons: choices
            .iter()
            .map(|choice| (choice.label().to_string(), choice.callback_data(token)))
            .collect(),
    }
}

pub fn tally_reply(tally: &VoteTally) -> Reply {
    Reply::text(format!(
        "🗳 Results so far:\n✅ BAN: {} | ❌ PASS: {}",
        tally.approve, tally.reject
    ))
}

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::entity::{VoteChoice, VoteTally};
use crate::services::VoteStore;

#[async_trait]
pub trait VoteInteractor: Send + Sync {
    /// Token that `/voting` should put to a vote, if any scan has happened yet
    async fn current_ballot(&self) -> Option<String>;

    async fn cast_vote(&self, token: &str, choice: VoteChoice) -> Option<VoteTally>;
}

pub struct VoteInteractorImpl {
    vote_store: Arc<Mutex<VoteStore>>,
}

impl VoteInteractorImpl {
    pub fn new(vote_store: Arc<Mutex<VoteStore>>) -> Self {
        Self { vote_store }
    }
}

#[async_trait]
impl VoteInteractor for VoteInteractorImpl {
    async fn current_ballot(&self) -> Option<String> {
        self.vote_store
            .lock()
            .await
            .most_recent()
            .map(str::to_string)
    }

    async fn cast_vote(&self, token: &str, choice: VoteChoice) -> Option<VoteTally> {
        self.vote_store.lock().await.record_vote(token, choice)
    }
}

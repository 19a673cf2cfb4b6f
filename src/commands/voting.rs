use std::sync::Arc;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::entity::Reply;
use crate::interactor::VoteInteractorImpl;
use crate::presenter::{VotePresenter, VotePresenterImpl};

pub struct VotingCommand;

impl CommandHandler for VotingCommand {
    fn command_name() -> &'static str {
        "voting"
    }

    async fn execute(_args: &str, services: &ServiceContainer) -> Vec<Reply> {
        let interactor = Arc::new(VoteInteractorImpl::new(services.vote_store()));
        let presenter = VotePresenterImpl::new(interactor);

        presenter.show_ballot().await
    }
}

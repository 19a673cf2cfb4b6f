use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use std::sync::Arc;

use crate::di::ServiceContainer;
use crate::entity::{Reply, VoteChoice};
use crate::interactor::VoteInteractorImpl;
use crate::presenter::{VotePresenter, VotePresenterImpl};

// Main callback handler function
pub async fn handle_callback(callback_data: &str, services: &ServiceContainer) -> Vec<Reply> {
    let Some((choice, token)) = parse_vote_callback(callback_data) else {
        debug!("Ignoring callback: {}", callback_data);
        return Vec::new();
    };

    info!("Vote {:?} received for token {}", choice, token);

    let interactor = Arc::new(VoteInteractorImpl::new(services.vote_store()));
    let presenter = VotePresenterImpl::new(interactor);

    presenter.show_vote_result(token, choice).await
}

// Parse "<action>:<token>", splitting at the first colon
pub fn parse_vote_callback(data: &str) -> Option<(VoteChoice, &str)> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^(vote_yes|vote_no|Approve|Reject):(.+)$").unwrap();
    }

    let cap = RE.captures(data)?;
    let choice = match cap.get(1)?.as_str() {
        "vote_yes" | "Approve" => VoteChoice::Approve,
        "vote_no" | "Reject" => VoteChoice::Reject,
        _ => return None,
    };

    Some((choice, cap.get(2)?.as_str()))
}

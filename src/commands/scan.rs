use log::info;
use std::sync::Arc;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::entity::{BotError, Reply};
use crate::interactor::ScanInteractorImpl;
use crate::presenter::scan_presenter::error_reply;
use crate::presenter::{ScanPresenter, ScanPresenterImpl};

pub struct ScanCommand;

impl CommandHandler for ScanCommand {
    fn command_name() -> &'static str {
        "scan"
    }

    async fn execute(args: &str, services: &ServiceContainer) -> Vec<Reply> {
        let mint = match parse_mint(args) {
            Ok(mint) => mint,
            Err(e) => return vec![error_reply(&e)],
        };

        info!("Scan command received for mint: {}", mint);

        let interactor = Arc::new(ScanInteractorImpl::new(
            services.market_client(),
            services.vote_store(),
        ));
        let presenter = ScanPresenterImpl::new(interactor, services.assets());

        presenter.show_scan(mint).await
    }
}

/// `/scan` takes exactly one whitespace-separated argument
pub fn parse_mint(args: &str) -> Result<&str, BotError> {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(mint), None) => Ok(mint),
        _ => Err(BotError::Usage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_argument_is_the_mint() {
        assert_eq!(parse_mint("  So1anaMint \n").unwrap(), "So1anaMint");
    }

    #[test]
    fn zero_or_many_arguments_are_usage_errors() {
        assert!(matches!(parse_mint(""), Err(BotError::Usage)));
        assert!(matches!(parse_mint("   "), Err(BotError::Usage)));
        assert!(matches!(parse_mint("a b"), Err(BotError::Usage)));
    }
}

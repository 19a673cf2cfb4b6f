pub mod scan_interactor;
pub mod vote_interactor;

pub use scan_interactor::{ScanInteractor, ScanInteractorImpl, ScanReport};
pub use vote_interactor::{VoteInteractor, VoteInteractorImpl};

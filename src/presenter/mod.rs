pub mod scan_presenter;
pub mod vote_presenter;

pub use scan_presenter::{ScanPresenter, ScanPresenterImpl};
pub use vote_presenter::{VotePresenter, VotePresenterImpl};

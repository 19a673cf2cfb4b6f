pub mod assets;
pub mod scoring;
pub mod vote_store;

pub use assets::{AssetProvider, FsAssetProvider, RandomSource, ThreadRandom, START_IMAGE};
pub use scoring::compute_toxicity;
pub use vote_store::VoteStore;

#[cfg(test)]
pub use assets::{MockAssetProvider, MockRandomSource};

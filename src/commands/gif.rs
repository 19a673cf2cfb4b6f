use log::info;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::entity::Reply;

pub const NO_GIFS: &str = "No GIFs found.";

pub struct GifCommand;

impl CommandHandler for GifCommand {
    fn command_name() -> &'static str {
        "gif"
    }

    async fn execute(_args: &str, services: &ServiceContainer) -> Vec<Reply> {
        let gifs = services.assets().gifs();
        if gifs.is_empty() {
            return vec![Reply::text(NO_GIFS)];
        }

        let index = services.random().pick_index(gifs.len()).min(gifs.len() - 1);
        let path = gifs[index].clone();
        info!("Sending gif {}", path.display());

        vec![Reply::Animation { path }]
    }
}

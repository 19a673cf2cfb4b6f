use async_trait::async_trait;
use std::sync::Arc;

use crate::entity::{BotError, Reply};
use crate::interactor::{ScanInteractor, ScanReport};
use crate::services::AssetProvider;
use crate::utils::{format_price, format_thousands};

#[async_trait]
pub trait ScanPresenter: Send + Sync {
    async fn show_scan(&self, mint: &str) -> Vec<Reply>;
}

pub struct ScanPresenterImpl<I> {
    interactor: Arc<I>,
    assets: Arc<dyn AssetProvider + Send + Sync>,
}

impl<I> ScanPresenterImpl<I>
where
    I: ScanInteractor,
{
    pub fn new(interactor: Arc<I>, assets: Arc<dyn AssetProvider + Send + Sync>) -> Self {
        Self { interactor, assets }
    }
}

#[async_trait]
impl<I> ScanPresenter for ScanPresenterImpl<I>
where
    I: ScanInteractor + Send + Sync,
{
    async fn show_scan(&self, mint: &str) -> Vec<Reply> {
        match self.interactor.scan(mint).await {
            Ok(report) => {
                let caption = report.toxicity.tier.caption();
                let mut replies = vec![Reply::Markdown(format_scan_report(&report))];

                if let Some(path) = self.assets.image(report.toxicity.tier.image_key()) {
                    replies.push(Reply::Photo {
                        path,
                        caption: caption.to_string(),
                    });
                }

                replies
            }
            Err(e) => vec![error_reply(&e)],
        }
    }
}

pub fn error_reply(error: &BotError) -> Reply {
    match error {
        BotError::Usage | BotError::NotFound => Reply::text(error.to_string()),
        BotError::Adapter(reason) => Reply::text(format!("❌ Scan error: {}", reason)),
    }
}

pub fn format_scan_report(report: &ScanReport) -> String {
    let metrics = &report.metrics;

    format!(
        "🧪 *SCAN REPORT* — DEXScreener Module 🧪\n\n\
        📛 *Name*: {} ({})\n\
        🔗 *Mint*: `{}`\n\
        💰 *Price*: ${}\n\
        🧃 *Liquidity*: ${}\n\
        📈 *24h Volume*: ${}\n\
        🏷 *FDV*: ${}\n\
        ☣️ *Toxicity Score*: {}%\n\n\
        🔍 [View on DEXScreener]({})\n\
        🧬 *Emotional Profile*: {}",
        metrics.name,
        metrics.symbol,
        report.mint,
        format_price(metrics.price_usd),
        format_thousands(metrics.liquidity_usd),
        format_thousands(metrics.volume_24h_usd),
        format_thousands(metrics.fdv_usd),
        report.toxicity.score,
        metrics.external_url,
        report.toxicity.tier.caption(),
    )
}

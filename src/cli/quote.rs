use super::text::Label;
use super::ui;
use crate::core::cache::QuoteCache;
use crate::core::config::{AppConfig, Language};
use crate::core::quote::{GoldQuote, QuoteProvider};
use crate::providers::goldapi::GoldApiProvider;
use crate::store::{self, SecretStore};
use anyhow::Result;
use comfy_table::Cell;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.goldapi.io";

/// Renders the display-only quote panel.
pub fn quote_table(quote: &GoldQuote, lang: Language) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text(Label::QuoteTitle.text(lang), ui::StyleType::Title)
    );

    output.push_str(&format!(
        "{} ({}): {:.2}\n",
        ui::style_text(Label::PerOunce.text(lang), ui::StyleType::TotalLabel),
        quote.currency,
        quote.price_per_ounce
    ));

    if !quote.gram_prices.is_empty() {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell(Label::Karat.text(lang)),
            ui::header_cell(&format!(
                "{} ({})",
                Label::PricePerGram.text(lang),
                quote.currency
            )),
        ]);
        for karat in &quote.gram_prices {
            table.add_row(vec![
                Cell::new(karat.karat),
                ui::amount_cell(karat.price_per_gram),
            ]);
        }
        output.push('\n');
        output.push_str(&table.to_string());
        output.push('\n');
    }

    if let Some(timestamp) = quote.timestamp {
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                &format!(
                    "{} {}",
                    Label::UpdatedAt.text(lang),
                    timestamp.format("%Y-%m-%d %H:%M UTC")
                ),
                ui::StyleType::Subtle
            )
        ));
    }

    output
}

/// Fetches a quote and renders the outcome. A failed lookup is surfaced as
/// a notification; it is not an application error and leaves any existing
/// items and totals untouched.
pub async fn fetch_and_display(
    provider: &dyn QuoteProvider,
    currency: &str,
    lang: Language,
) -> Result<()> {
    let pb = ui::new_spinner(Label::FetchingQuote.text(lang));
    let result = provider.fetch_quote(currency).await;
    pb.finish_and_clear();

    match result {
        Ok(quote) => {
            println!("{}", quote_table(&quote, lang));
            ui::notify(Label::QuoteFetched.text(lang));
        }
        Err(e) => {
            debug!("Quote lookup failed: {e:?}");
            ui::notify_error(&format!("{}: {e}", Label::QuoteFailed.text(lang)));
        }
    }

    Ok(())
}

/// Stores the service credential, or looks up the current gold quote.
pub async fn run(
    config: &AppConfig,
    store: &dyn SecretStore,
    save_key: Option<String>,
) -> Result<()> {
    let lang = config.language;

    if let Some(key) = save_key {
        store.put(store::API_KEY, key.trim())?;
        ui::notify(Label::ApiKeySaved.text(lang));
        return Ok(());
    }

    let Some(api_key) = store.get(store::API_KEY)? else {
        ui::notify_error(Label::ApiKeyMissing.text(lang));
        return Ok(());
    };

    let base_url = config
        .providers
        .goldapi
        .as_ref()
        .map_or(DEFAULT_BASE_URL, |p| p.base_url.as_str());
    let provider = GoldApiProvider::new(base_url, &api_key, Arc::new(QuoteCache::new()));

    fetch_and_display(&provider, &config.currency, lang).await
}

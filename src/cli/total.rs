use super::text::{Direction, Label};
use super::ui;
use crate::core::config::{AppConfig, Language};
use crate::core::item::Tax;
use crate::core::pricing::{self, Totals};
use crate::core::sheet::Sheet;
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};

fn tax_terms(tax: &Tax) -> String {
    match tax {
        Tax::Percent(rate) => format!("{rate:.1}%"),
        Tax::Fixed(amount) => format!("{amount:.2}/g"),
    }
}

/// Renders the per-item breakdown. A right-to-left language reverses the
/// column order; the numbers themselves are identical either way.
pub fn sheet_table(sheet: &Sheet, lang: Language, currency: &str) -> String {
    let mut table = ui::new_styled_table();

    let mut headers = vec![
        ui::header_cell(Label::Item.text(lang)),
        ui::header_cell(Label::Weight.text(lang)),
        ui::header_cell(Label::Quantity.text(lang)),
        ui::header_cell(&format!("{} ({currency})", Label::PricePerGram.text(lang))),
        ui::header_cell(Label::TaxRate.text(lang)),
        ui::header_cell(Label::ProviderFee.text(lang)),
        ui::header_cell(Label::Subtotal.text(lang)),
        ui::header_cell(Label::Tax.text(lang)),
        ui::header_cell(Label::Total.text(lang)),
    ];
    if lang.direction() == Direction::Rtl {
        headers.reverse();
    }
    table.set_header(headers);

    for (index, entry) in sheet.entries().iter().enumerate() {
        let totals = pricing::item_total(&entry.item);

        let mut row = vec![
            Cell::new(index + 1),
            ui::amount_cell(entry.item.weight),
            Cell::new(entry.item.quantity).set_alignment(CellAlignment::Right),
            ui::amount_cell(entry.item.price_per_gram),
            Cell::new(tax_terms(&entry.item.tax)).set_alignment(CellAlignment::Right),
            ui::amount_cell(entry.item.provider_fee),
            ui::amount_cell(totals.subtotal),
            ui::amount_cell(totals.tax),
            ui::amount_cell(totals.total),
        ];
        if lang.direction() == Direction::Rtl {
            row.reverse();
        }
        table.add_row(row);
    }

    table.to_string()
}

/// Renders the grand-total block shown below the table.
pub fn totals_block(totals: &Totals, lang: Language, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}: {:.2}\n",
        ui::style_text(Label::Subtotal.text(lang), ui::StyleType::TotalLabel),
        totals.subtotal
    ));
    output.push_str(&format!(
        "{}: {:.2}\n",
        ui::style_text(Label::TotalTax.text(lang), ui::StyleType::TotalLabel),
        totals.tax
    ));
    output.push_str(&format!(
        "{}: {:.2}\n",
        ui::style_text(Label::TotalFees.text(lang), ui::StyleType::TotalLabel),
        totals.provider_fee
    ));
    output.push_str(&format!(
        "{} ({currency}): {}",
        ui::style_text(Label::GrandTotal.text(lang), ui::StyleType::TotalLabel),
        ui::style_text(&format!("{:.2}", totals.total), ui::StyleType::TotalValue)
    ));

    output
}

/// Computes and displays totals for the items in the config file.
pub fn run(config: &AppConfig) -> Result<()> {
    let sheet = Sheet::from_items(config.defaults.price_per_gram, config.items.iter().cloned());
    let lang = config.language;

    // An empty sheet renders no totals block at all.
    if sheet.is_empty() {
        println!(
            "{}",
            ui::style_text(Label::NoItems.text(lang), ui::StyleType::Subtle)
        );
        return Ok(());
    }

    println!("{}", sheet_table(&sheet, lang, &config.currency));
    println!();
    println!(
        "{}",
        totals_block(&sheet.grand_total(), lang, &config.currency)
    );
    Ok(())
}

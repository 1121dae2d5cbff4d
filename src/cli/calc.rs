//! Interactive calculator session.
//!
//! Mutations are applied one line at a time and the breakdown is
//! re-rendered after each, so the totals on screen always reflect the
//! latest edit.

use super::text::Label;
use super::ui;
use crate::core::cache::QuoteCache;
use crate::core::config::{AppConfig, Language};
use crate::core::item::{Tax, parse_amount, parse_quantity};
use crate::core::sheet::{Edit, Sheet};
use crate::providers::goldapi::GoldApiProvider;
use crate::store::{self, SecretStore};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::str::SplitWhitespace;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Add,
    /// Zero-based display position.
    Remove(usize),
    Set(usize, Edit),
    List,
    Lang,
    Quote,
    Help,
    Quit,
    Unknown,
}

fn parse_set(words: &mut SplitWhitespace) -> Option<Command> {
    let index = words.next()?.parse::<usize>().ok().filter(|n| *n >= 1)? - 1;
    let field = words.next()?;

    // Numeric text that fails to parse coerces to the field's safe
    // default rather than erroring out.
    let edit = match field {
        "weight" | "w" => Edit::Weight(parse_amount(words.next().unwrap_or(""))),
        "qty" | "quantity" => Edit::Quantity(parse_quantity(words.next().unwrap_or(""))),
        "price" | "p" => Edit::PricePerGram(parse_amount(words.next().unwrap_or(""))),
        "fee" | "f" => Edit::ProviderFee(parse_amount(words.next().unwrap_or(""))),
        "tax" | "t" => {
            let mode = words.next()?;
            let value = parse_amount(words.next().unwrap_or(""));
            match mode {
                "pct" | "percent" => Edit::Tax(Tax::Percent(value)),
                "fixed" | "flat" => Edit::Tax(Tax::Fixed(value)),
                _ => return None,
            }
        }
        _ => return None,
    };

    Some(Command::Set(index, edit))
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?;

    let command = match head {
        "add" | "a" => Command::Add,
        "rm" | "remove" | "del" => match words.next().and_then(|w| w.parse::<usize>().ok()) {
            Some(n) if n >= 1 => Command::Remove(n - 1),
            _ => Command::Unknown,
        },
        "set" | "s" => parse_set(&mut words).unwrap_or(Command::Unknown),
        "list" | "ls" => Command::List,
        "lang" => Command::Lang,
        "quote" => Command::Quote,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown,
    };

    Some(command)
}

fn render(sheet: &Sheet, lang: Language, currency: &str) {
    if sheet.is_empty() {
        println!(
            "{}",
            ui::style_text(Label::NoItems.text(lang), ui::StyleType::Subtle)
        );
        return;
    }
    println!("{}", super::total::sheet_table(sheet, lang, currency));
    println!(
        "{}",
        super::total::totals_block(&sheet.grand_total(), lang, currency)
    );
}

fn print_help() {
    let help = "\
  add                       append a new item
  rm <n>                    remove item n
  set <n> weight <grams>    set weight per unit
  set <n> qty <count>       set unit count
  set <n> price <amount>    set price per gram
  set <n> fee <amount>      set flat provider fee
  set <n> tax pct <rate>    tax as percentage per gram
  set <n> tax fixed <amt>   tax as fixed amount per gram
  list                      re-render the sheet
  lang                      toggle display language
  quote                     fetch the current gold quote
  quit                      end the session";
    println!("{}", ui::style_text(help, ui::StyleType::Subtle));
}

pub async fn run(config: &AppConfig, store: &dyn SecretStore) -> Result<()> {
    let mut sheet = Sheet::from_items(config.defaults.price_per_gram, config.items.iter().cloned());
    let mut lang = config.language;
    let currency = config.currency.clone();

    let base_url = config
        .providers
        .goldapi
        .as_ref()
        .map_or(super::quote::DEFAULT_BASE_URL, |p| p.base_url.as_str());
    let provider = store
        .get(store::API_KEY)?
        .map(|key| GoldApiProvider::new(base_url, &key, Arc::new(QuoteCache::new())));

    println!(
        "{}",
        ui::style_text(Label::CalcTitle.text(lang), ui::StyleType::Title)
    );
    println!();
    render(&sheet, lang, &currency);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        // EOF ends the session like `quit`
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Add => {
                sheet.add();
                ui::notify(Label::ItemAdded.text(lang));
                render(&sheet, lang, &currency);
            }
            Command::Remove(index) => match sheet.id_at(index) {
                Some(id) => {
                    sheet.remove(id);
                    ui::notify(Label::ItemRemoved.text(lang));
                    render(&sheet, lang, &currency);
                }
                None => ui::notify_error(Label::NoSuchItem.text(lang)),
            },
            Command::Set(index, edit) => match sheet.id_at(index) {
                Some(id) => {
                    sheet.update(id, edit);
                    render(&sheet, lang, &currency);
                }
                None => ui::notify_error(Label::NoSuchItem.text(lang)),
            },
            Command::List => render(&sheet, lang, &currency),
            Command::Lang => {
                lang = lang.toggled();
                render(&sheet, lang, &currency);
            }
            Command::Quote => match &provider {
                Some(p) => super::quote::fetch_and_display(p, &currency, lang).await?,
                None => ui::notify_error(Label::ApiKeyMissing.text(lang)),
            },
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown => {
                println!(
                    "{}",
                    ui::style_text(Label::UnknownCommand.text(lang), ui::StyleType::Subtle)
                );
            }
        }
    }

    Ok(())
}

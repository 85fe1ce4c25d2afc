//! # Storefront Shell
//!
//! Drives the storefront page from a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  > add 0                                                                │
//! │  [savat] 1                                                              │
//! │  [toast +] Klassik ko'ylak savatga qo'shildi                            │
//! │  [toast] Klassik ko'ylak savatga qo'shildi                              │
//! │  ...3 s later                                                           │
//! │  [toast -] Klassik ko'ylak savatga qo'shildi                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Toast timers run on the same single-threaded runtime that reads stdin,
//! like the browser's event loop.

mod command;
mod terminal;

use std::sync::Arc;

use anyhow::Result;
use storefront_page::catalog::ProductCard;
use storefront_page::contact::{Banner, SubmitOutcome};
use storefront_page::{PageConfig, Storefront};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::command::{Command, HELP};
use crate::terminal::{TerminalCounter, TerminalSurface};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let config = PageConfig::from_env()?;
    info!(label = %config.add_button_label, "Configuration loaded");

    let mut page = Storefront::builder(config)
        .count_display(Arc::new(TerminalCounter))
        .notification_surface(Arc::new(TerminalSurface::new()))
        .product_cards(demo_catalog())
        .sections(["home", "products", "about", "contact"])
        .build()?;

    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        if let Err(err) = run(&mut page, command) {
            warn!(error = %err, "Command failed");
            println!("xato: {}", err);
        }
    }

    let cancelled = page.teardown();
    info!(cancelled, "Storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber; logs go to stderr so stdout stays
/// the "page".
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(page: &mut Storefront, command: Command) -> Result<()> {
    match command {
        Command::Help => println!("{}", HELP),
        Command::Products => {
            for (index, card) in page.catalog().cards().iter().enumerate() {
                let marker = if page.catalog().has_trigger(index) { "+" } else { " " };
                println!("{} {:>2}  {:<24} {}", marker, index, card.title, card.price_text);
            }
        }
        Command::Add(card) => page.click_add_to_cart(card)?,
        Command::Cart => {
            let snapshot = page.cart().snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            println!("Jami: {}", page.config().format_price(snapshot.total));
        }
        Command::Fill(field, value) => page.fill_contact(field, value),
        Command::Submit => {
            if let SubmitOutcome::Accepted(values) = page.submit_contact() {
                info!(email = %values.email, "Contact message accepted");
            }
            match page.contact().banner() {
                Some(Banner::Errors(lines)) => lines.iter().for_each(|line| println!("! {}", line)),
                Some(Banner::Success(text)) => println!("{}", text),
                None => {}
            }
        }
        Command::Anchor(href) => match page.follow_anchor(&href) {
            Some(request) => println!("{}", serde_json::to_string(&request)?),
            None => println!("(no scroll)"),
        },
        Command::HoverEnter(card) => println!("{:?}", page.hover_enter(card)?),
        Command::HoverLeave(card) => println!("{:?}", page.hover_leave(card)?),
        Command::SearchOpen => {
            page.open_search();
            print_search(page);
        }
        Command::SearchClose => {
            page.close_search();
            print_search(page);
        }
        Command::SearchClick(target) => {
            page.click_search_overlay(target);
            print_search(page);
        }
        Command::Scroll(offset) => {
            if page.on_scroll(offset) {
                let state = if page.scroll_top_visible() { "shown" } else { "hidden" };
                println!("scroll-to-top {}", state);
            }
        }
        Command::Top => println!("{}", serde_json::to_string(&page.click_scroll_top())?),
        Command::Quit => {}
    }
    Ok(())
}

fn print_search(page: &Storefront) {
    let state = if page.search_open() { "open" } else { "closed" };
    println!("search {}", state);
}

fn demo_catalog() -> Vec<ProductCard> {
    vec![
        ProductCard::new("Klassik ko'ylak", "150 000 so'm", "Savatga"),
        ProductCard::new("Yozgi shlyapa", "75 000 so'm", "Savatga"),
        ProductCard::new("Charm kamar", "120 000 so'm", "Savatga"),
        ProductCard::new("Sovg'a kartasi", "Narxi kelishiladi", "Savatga"),
        ProductCard::new("Kuzgi to'plam", "Tez kunda", "Batafsil"),
    ]
}

//! Visitor actions typed at the shell prompt.

use anyhow::{anyhow, bail, Result};
use storefront_core::validation::ContactField;
use storefront_page::chrome::OverlayClick;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// List product cards.
    Products,
    /// Click "add to cart" on a card.
    Add(usize),
    /// Print the cart snapshot as JSON.
    Cart,
    /// Type into a contact form field.
    Fill(ContactField, String),
    Submit,
    Anchor(String),
    HoverEnter(usize),
    HoverLeave(usize),
    SearchOpen,
    SearchClose,
    SearchClick(OverlayClick),
    Scroll(u32),
    Top,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "help" | "?" => Command::Help,
            "products" | "ls" => Command::Products,
            "add" => Command::Add(number(rest, "add <card>")?),
            "cart" => Command::Cart,
            "name" => Command::Fill(ContactField::Name, rest.to_string()),
            "email" => Command::Fill(ContactField::Email, rest.to_string()),
            "message" => Command::Fill(ContactField::Message, rest.to_string()),
            "submit" => Command::Submit,
            "anchor" | "goto" => Command::Anchor(rest.to_string()),
            "hover" => Command::HoverEnter(number(rest, "hover <card>")?),
            "leave" => Command::HoverLeave(number(rest, "leave <card>")?),
            "search" => match rest {
                "" | "open" => Command::SearchOpen,
                "close" => Command::SearchClose,
                "backdrop" => Command::SearchClick(OverlayClick::Backdrop),
                "panel" => Command::SearchClick(OverlayClick::Panel),
                other => bail!("unknown search action: {}", other),
            },
            "scroll" => Command::Scroll(number(rest, "scroll <px>")?),
            "top" => Command::Top,
            "quit" | "exit" => Command::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command: {} (try 'help')", other),
        };
        Ok(command)
    }
}

fn number<T: std::str::FromStr>(raw: &str, usage: &str) -> Result<T> {
    raw.parse().map_err(|_| anyhow!("usage: {}", usage))
}

pub const HELP: &str = "\
products              list product cards
add <card>            click \"Savatga\" on a card
cart                  show the cart as JSON
name|email|message <text>
submit                submit the contact form
anchor #<section>     follow an in-page link
hover|leave <card>    pointer over / off a card
search [open|close|backdrop|panel]
scroll <px>           set the page offset
top                   click scroll-to-top
quit";

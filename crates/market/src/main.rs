//! PartsBay - secondhand PC-parts marketplace shell.
//!
//! An interactive command loop over the marketplace engine. This is the
//! thin presentation layer: it navigates the named views, invokes the
//! store contracts, and renders query results and notifications. All
//! behavior of note lives in the `partsbay-market` library.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use std::io::{BufRead, Write as _};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use partsbay_core::{Category, Condition, ListingId};
use partsbay_market::config::MarketConfig;
use partsbay_market::models::{Listing, ListingDraft};
use partsbay_market::routes::View;
use partsbay_market::state::Market;
use partsbay_market::views::{ListingQuery, SortKey, filter_listings, latest_listings};

const HELP: &str = "\
Commands:
  home                       latest listings
  browse [sort]              all available listings (sort: newest|cheap|pricey)
  search <text>              filter listings by name
  view <id>                  listing details
  login <email> <password>   open a session (demo: any credential)
  register <name> <email> <password>
  logout                     close the session
  sell <name>|<category>|<price>|<condition>|<description>
  describe <category> <name> draft a description with AI
  account                    your listings
  sold <id>                  mark one of your listings sold
  cart                       show the cart
  add <id>                   add a listing to the cart
  remove <id>                remove a listing from the cart
  checkout                   clear the cart
  quit";

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "partsbay_market=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MarketConfig::from_env();
    let mut market = match Market::open(&config) {
        Ok(market) => market,
        Err(err) => {
            tracing::error!(error = %err, "failed to open the local store");
            return;
        }
    };

    println!("PartsBay - used PC parts, from builders like you.");
    println!("Type 'help' for commands.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        if !dispatch(&mut market, line.trim()).await {
            break;
        }
        render_notifications(&mut market);
    }
}

/// Run one command. Returns `false` when the shell should exit.
async fn dispatch(market: &mut Market, line: &str) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((head, tail)) => (head, tail.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "help" => println!("{HELP}"),
        "quit" | "exit" => return false,
        "home" => show_home(market),
        "browse" => show_browse(market, rest),
        "search" => show_search(market, rest),
        "view" => show_listing(market, rest),
        "login" => run_login(market, rest),
        "register" => run_register(market, rest),
        "logout" => market.logout(),
        "sell" => run_sell(market, rest),
        "describe" => run_describe(market, rest).await,
        "account" => show_account(market),
        "sold" => run_sold(market, rest),
        "cart" => show_cart(market),
        "add" => with_listing_id(rest, |id| market.add_to_cart(id)),
        "remove" => with_listing_id(rest, |id| market.remove_from_cart(id)),
        "checkout" => {
            market.clear_cart();
            println!("Cart cleared. Thanks for browsing!");
        }
        _ => println!("Unknown command '{command}'. Type 'help'."),
    }
    true
}

/// Resolve a view against the session, reporting any redirect.
fn enter(market: &Market, requested: View) -> View {
    let resolved = requested.resolve(market.session().is_authenticated());
    if resolved != requested {
        println!("({requested} requires a different session state; showing {resolved})");
    }
    resolved
}

fn show_home(market: &Market) {
    println!("Latest listings:");
    print_listings(&latest_listings(market.catalog().listings()));
}

fn show_browse(market: &Market, sort: &str) {
    let sort = match sort {
        "cheap" => SortKey::PriceAsc,
        "pricey" => SortKey::PriceDesc,
        _ => SortKey::Newest,
    };
    let query = ListingQuery {
        sort,
        ..ListingQuery::default()
    };
    print_listings(&filter_listings(market.catalog().listings(), &query));
}

fn show_search(market: &Market, text: &str) {
    let query = ListingQuery {
        search_text: text.to_string(),
        ..ListingQuery::default()
    };
    print_listings(&filter_listings(market.catalog().listings(), &query));
}

fn show_listing(market: &Market, rest: &str) {
    let Ok(id) = parse_listing_id(rest) else {
        println!("Usage: view <id>");
        return;
    };
    match market.catalog().find(id) {
        Some(listing) => {
            println!("#{} {} - LKR {}", listing.id, listing.name, listing.price);
            println!(
                "  {} | {} | {} | posted {}",
                listing.category, listing.condition, listing.status, listing.date_posted
            );
            println!(
                "  Seller: {}{}",
                listing.seller.name,
                if listing.seller.is_verified {
                    " (verified)"
                } else {
                    ""
                }
            );
            println!("  {}", listing.description);
        }
        None => println!("No listing with id {id}."),
    }
}

fn run_login(market: &mut Market, rest: &str) {
    if enter(market, View::Login) != View::Login {
        return;
    }
    let (email, password) = match rest.split_once(' ') {
        Some((email, password)) => (email, password),
        None => (rest, ""),
    };
    market.login(email, password);
}

fn run_register(market: &mut Market, rest: &str) {
    if enter(market, View::Register) != View::Register {
        return;
    }
    let mut parts = rest.split_whitespace();
    let (Some(name), Some(email), Some(password)) = (parts.next(), parts.next(), parts.next())
    else {
        println!("Usage: register <name> <email> <password>");
        return;
    };
    market.register(name, email, password);
}

fn run_sell(market: &mut Market, rest: &str) {
    if enter(market, View::Sell) != View::Sell {
        return;
    }
    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    let [name, category, price, condition, description] = fields.as_slice() else {
        println!("Usage: sell <name>|<category>|<price>|<condition>|<description>");
        return;
    };
    let Ok(category) = Category::from_str(category) else {
        println!("Unknown category '{category}'.");
        return;
    };
    let Ok(condition) = Condition::from_str(condition) else {
        println!("Unknown condition '{condition}'.");
        return;
    };
    let Ok(price) = Decimal::from_str(price) else {
        println!("'{price}' is not a price.");
        return;
    };

    market.add_listing(ListingDraft {
        name: (*name).to_string(),
        category,
        price,
        description: (*description).to_string(),
        condition,
        image_url: format!("https://picsum.photos/seed/{}/600/400", category.label()),
    });
}

async fn run_describe(market: &Market, rest: &str) {
    let Some((category, name)) = rest.split_once(' ') else {
        println!("Usage: describe <category> <name>");
        return;
    };
    let Ok(category) = Category::from_str(category) else {
        println!("Unknown category '{category}'.");
        return;
    };

    // The control stays disabled until the call resolves
    println!("Generating...");
    match market.generate_description(name.trim(), category).await {
        Ok(text) => println!("{text}"),
        Err(err) => println!("Could not generate a description: {err}"),
    }
}

fn show_account(market: &Market) {
    if enter(market, View::Account) != View::Account {
        return;
    }
    let Some(current) = market.session().current() else {
        return;
    };
    println!("Logged in as {} (id {})", current.name, current.id);
    let mine = market.listings_by_seller(current.id);
    if mine.is_empty() {
        println!("You have no listings yet. Try 'sell'.");
    } else {
        print_listings(&mine);
    }
}

fn run_sold(market: &mut Market, rest: &str) {
    let Ok(id) = parse_listing_id(rest) else {
        println!("Usage: sold <id>");
        return;
    };
    // Outcome lands in the notification queue either way
    let _ = market.mark_sold(id);
}

fn show_cart(market: &Market) {
    if market.cart_lines().is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for line in market.cart_lines() {
        println!(
            "#{} {} - LKR {}",
            line.listing.id, line.listing.name, line.listing.price
        );
    }
    println!(
        "{} item(s), total LKR {}",
        market.cart().item_count(),
        market.cart().total_price()
    );
}

fn with_listing_id(rest: &str, action: impl FnOnce(ListingId)) {
    match parse_listing_id(rest) {
        Ok(id) => action(id),
        Err(()) => println!("Expected a listing id."),
    }
}

fn parse_listing_id(rest: &str) -> Result<ListingId, ()> {
    rest.trim()
        .parse::<i32>()
        .map(ListingId::new)
        .map_err(|_| ())
}

fn print_listings(listings: &[Listing]) {
    if listings.is_empty() {
        println!("No listings found.");
        return;
    }
    for listing in listings {
        println!(
            "#{:<4} {:<42} LKR {:>10}  {:<11} {:<8} {}",
            listing.id.to_string(),
            listing.name,
            listing.price.to_string(),
            listing.category.to_string(),
            listing.condition.to_string(),
            listing.status
        );
    }
}

fn render_notifications(market: &mut Market) {
    for notification in market.take_notifications() {
        println!("[{}] {}", notification.kind, notification.message);
    }
}

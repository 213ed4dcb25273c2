//! CLI command implementations.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show this category ("All" for every category).
    #[arg(long)]
    pub category: Option<String>,

    /// Match text in the name or description.
    #[arg(short = 's', long)]
    pub search: Option<String>,

    /// Lowest price, e.g. 20 or 19.99.
    #[arg(long)]
    pub min: Option<String>,

    /// Highest price. Defaults to the configured price filter maximum.
    #[arg(long)]
    pub max: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart (default)
    Show,

    /// Add a product
    Add {
        /// Product ID.
        id: String,

        /// Units to add (at least 1).
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },

    /// Set a line's quantity (0 removes it)
    Set {
        /// Product ID.
        id: String,

        /// New quantity.
        quantity: u32,
    },

    /// Remove a product
    Remove {
        /// Product ID.
        id: String,
    },

    /// Empty the cart
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// Defaults to the signed-in user's email.
    #[arg(long)]
    pub email: Option<String>,

    /// Street address.
    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub zip: Option<String>,

    /// Pay with PayPal instead of a card.
    #[arg(long, conflicts_with_all = ["card_number", "card_expiry", "card_cvc"])]
    pub paypal: bool,

    #[arg(long)]
    pub card_number: Option<String>,

    /// Card expiry, MM/YY.
    #[arg(long)]
    pub card_expiry: Option<String>,

    #[arg(long)]
    pub card_cvc: Option<String>,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Account email.
    #[arg(short, long)]
    pub email: String,

    /// Account password. Prompted for when omitted.
    #[arg(short, long)]
    pub password: Option<String>,
}

//! GameGear CLI - the storefront from a terminal.
//!
//! Commands:
//! - `gamegear products` - Browse and filter the catalog
//! - `gamegear show` - Show one product
//! - `gamegear featured` - List featured products
//! - `gamegear categories` - List category tabs
//! - `gamegear stats` - Inventory dashboard (admin)
//! - `gamegear cart` - View and change the cart
//! - `gamegear checkout` - Place an order
//! - `gamegear login` / `logout` / `whoami` - Manage the session

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use commands::{CartArgs, CheckoutArgs, LoginArgs, ProductsArgs, ShowArgs};

/// GameGear CLI - Browse gaming gear, fill a cart and check out
#[derive(Parser)]
#[command(name = "gamegear")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Products(ProductsArgs),

    /// Show a single product
    Show(ShowArgs),

    /// List featured products
    Featured,

    /// List product categories
    Categories,

    /// Show inventory statistics (admin only)
    Stats,

    /// View or change the cart
    Cart(CartArgs),

    /// Place an order for the cart contents
    Checkout(CheckoutArgs),

    /// Sign in
    Login(LoginArgs),

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::catalog::products(args, &ctx),
        Commands::Show(args) => commands::catalog::show(args, &ctx),
        Commands::Featured => commands::catalog::featured(&ctx),
        Commands::Categories => commands::catalog::categories(&ctx),
        Commands::Stats => commands::catalog::stats(&ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Login(args) => commands::account::login(args, &ctx).await,
        Commands::Logout => commands::account::logout(&ctx),
        Commands::Whoami => commands::account::whoami(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

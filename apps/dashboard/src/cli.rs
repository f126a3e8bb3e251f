//! Command line surface.
//!
//! Each subcommand maps onto one page, or onto one action of a page.

use std::path::PathBuf;

use barista_core::ItemCategory;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "barista", version, about = "Barista Shop admin dashboard")]
pub struct Cli {
    /// Config file (defaults to the platform config dir's dashboard.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in (prompts for anything not given)
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Headline figures
    Dashboard,
    /// Customer records
    Customers {
        #[command(subcommand)]
        action: Option<CustomerCommand>,
    },
    /// Menu items
    Items {
        #[command(subcommand)]
        action: Option<ItemCommand>,
    },
    /// Orders and the cart
    Orders {
        #[command(subcommand)]
        action: Option<OrderCommand>,
    },
    /// Open a page by path, e.g. `/order-details?id=65f1`
    Open { route: String },
}

// =============================================================================
// Customers
// =============================================================================

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    List {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    Add(CustomerFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: CustomerEdit,
    },
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct CustomerFields {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub telephone: String,
}

/// Fields left out keep their current value.
#[derive(Debug, Args)]
pub struct CustomerEdit {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub telephone: Option<String>,
}

// =============================================================================
// Items
// =============================================================================

#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    List {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    Add(ItemFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: ItemEdit,
    },
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct ItemFields {
    #[arg(long, default_value = "")]
    pub name: String,
    /// Cake, Beverage, Dessert or Pastry (defaults to the first)
    #[arg(long)]
    pub category: Option<ItemCategory>,
    /// Unit price, e.g. 350 or 4.50
    #[arg(long, default_value_t = 0.0)]
    pub price: f64,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub remark: Option<String>,
}

#[derive(Debug, Args)]
pub struct ItemEdit {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<ItemCategory>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub remark: Option<String>,
}

// =============================================================================
// Orders
// =============================================================================

#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    List {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    Show { id: String },
    /// Build a cart and submit it as an order
    New {
        /// Customer id
        #[arg(long)]
        customer: Option<String>,
        /// `<item-id>` or `<item-id>:<quantity>`, repeatable
        #[arg(long = "item", value_name = "ITEM[:QTY]")]
        items: Vec<String>,
    },
    /// Change an order's status (accepted, not sent)
    Status {
        id: String,
        status: barista_core::OrderStatus,
    },
}

/// Splits `id[:qty]`; a missing quantity means one.
pub fn parse_cart_entry(entry: &str) -> Result<(String, i64), String> {
    match entry.rsplit_once(':') {
        Some((id, qty)) => {
            let qty = qty
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid quantity in '{}'", entry))?;
            Ok((id.trim().to_string(), qty))
        }
        None => Ok((entry.trim().to_string(), 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_item_add() {
        let cli = Cli::parse_from([
            "barista", "items", "add", "--name", "Latte", "--category", "beverage", "--price", "350",
        ]);
        match cli.command {
            Some(Command::Items {
                action: Some(ItemCommand::Add(fields)),
            }) => {
                assert_eq!(fields.name, "Latte");
                assert_eq!(fields.category, Some(ItemCategory::Beverage));
                assert_eq!(fields.price, 350.0);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["barista", "customers", "delete", "c-1", "--yes"]);
        assert!(cli.yes);
    }

    #[test]
    fn test_cart_entries() {
        assert_eq!(parse_cart_entry("i-1"), Ok(("i-1".to_string(), 1)));
        assert_eq!(parse_cart_entry("i-1:3"), Ok(("i-1".to_string(), 3)));
        assert!(parse_cart_entry("i-1:x").is_err());
    }
}

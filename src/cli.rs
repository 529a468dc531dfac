use crate::domain::models::Category;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "kampusskill", version, about = "Campus services marketplace CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account (does not log you in)
    Register {
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, help = "Student id number, all digits, at least 8")]
        nim: String,
        #[arg(long)]
        password: String,
    },
    /// Start a session by email or student id
    Login {
        identifier: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Whoami,
    /// Browse active listings
    Browse {
        query: Option<String>,
        #[arg(long, value_enum)]
        category: Option<Category>,
        #[arg(long, value_enum, default_value_t = SortKey::Newest)]
        sort: SortKey,
    },
    /// Full detail for one listing
    Show {
        listing: String,
    },
    /// Create a listing (requires login, daily quota applies)
    Post {
        #[arg(long)]
        title: String,
        #[arg(long, value_enum)]
        category: Category,
        #[arg(long)]
        description: String,
        #[arg(long, help = "Price in the smallest currency unit")]
        price: u64,
        #[arg(long, help = "Contact string, e.g. a phone number or email")]
        contact: String,
        #[arg(long, help = "Primary image URL or path")]
        photo: Option<String>,
        #[arg(long = "gallery", help = "Additional image, repeatable")]
        gallery: Vec<String>,
        #[arg(long, help = "Map share URL for the service location")]
        map_url: Option<String>,
    },
    /// Replace an owned listing's fields; omitted flags keep current values
    Edit {
        listing: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, value_enum)]
        category: Option<Category>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<u64>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        photo: Option<String>,
        #[arg(long = "gallery")]
        gallery: Option<Vec<String>>,
        #[arg(long)]
        map_url: Option<String>,
    },
    /// Soft-delete an owned listing (admins may remove any)
    Remove {
        listing: String,
    },
    /// Rate a listing 1-5 (once per listing, never your own)
    Rate {
        listing: String,
        #[arg(long)]
        stars: u8,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Report a listing for review
    Report {
        listing: String,
    },
    Favorite {
        #[command(subcommand)]
        command: FavoriteCommands,
    },
    /// Your listings and favorites
    Profile,
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavoriteCommands {
    Add { listing: String },
    Remove { listing: String },
    List,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Listings flagged by user reports
    Review,
    /// Clear reports and restore a flagged listing
    Approve { listing: String },
    /// Soft-delete a listing
    Remove { listing: String },
    /// Dump the full users and services collections to a JSON file
    Export {
        #[arg(long)]
        out: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortKey {
    Newest,
    Rating,
    #[value(name = "price-asc")]
    PriceAsc,
}

//! Main commands enum and subcommands.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the inventory, classified by days until expiry
    List {
        /// Only show items expiring within 3 days
        #[arg(long)]
        soon: bool,
    },

    /// Add an item to the inventory
    Add {
        /// Product name
        name: String,
        /// Category tag (e.g. "Dairy")
        #[arg(short, long, default_value = "")]
        category: String,
        /// Expiry date: YYYY-MM-DD or a label form such as "15/04/2025"
        #[arg(short, long)]
        expiry: String,
    },

    /// Remove an item from the inventory
    Remove {
        /// Item ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Ask for a recipe
    ///
    /// With no options every inventory item is used as an ingredient.
    Recipes {
        /// Use a single inventory item
        #[arg(long, conflicts_with = "ingredients")]
        item: Option<i64>,
        /// Explicit ingredient (repeatable)
        #[arg(short = 'i', long = "ingredient")]
        ingredients: Vec<String>,
        /// Dietary preference (repeatable)
        #[arg(short = 'p', long = "preference")]
        preferences: Vec<String>,
    },

    /// Read a date or barcode from label text or an image
    Scan {
        /// Recognized label text
        #[arg(long, conflicts_with = "image")]
        text: Option<String>,
        /// Image file to run OCR on
        #[arg(long)]
        image: Option<PathBuf>,
        /// What to look for: barcode, date or expiry
        #[arg(short, long, default_value = "expiry")]
        mode: String,
        /// Add the scanned date to the inventory under this name
        #[arg(long)]
        add: Option<String>,
        /// Category for --add
        #[arg(long, default_value = "", requires = "add")]
        category: String,
        /// Show scans recorded so far instead of scanning
        #[arg(long, conflicts_with_all = ["text", "image", "add"])]
        history: bool,
    },

    /// View or change settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },

    /// View or change the stored profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Show resolved paths for data and configuration
    Paths,

    /// Start the web API server
    Web {
        /// Port to serve on
        #[arg(short, long, env = "LARDER_PORT", default_value = "9887")]
        port: u16,
        /// Allowed CORS origin (repeatable; default allows any)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },
}

/// Settings command variants.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show current settings
    Show,
    /// Update settings
    Set {
        /// dark or light
        #[arg(long)]
        theme: Option<String>,
        /// en or hi
        #[arg(long)]
        language: Option<String>,
    },
    /// Switch between dark and light
    ToggleTheme,
    /// Switch between English and Hindi
    ToggleLanguage,
}

/// Profile command variants.
#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the stored profile
    Show,
    /// Store a profile
    Set {
        name: String,
        email: String,
    },
    /// Forget the stored profile
    Clear,
}

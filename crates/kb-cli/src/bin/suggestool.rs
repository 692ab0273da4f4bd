use clap::{Parser, Subcommand};

use kb_cli::commands::{config_ops, query_ops};

#[derive(Parser)]
#[command(name = "suggestool", about = "Keyboard autosuggest vocabulary tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print ranked suggestions for one or more prefixes
    Query {
        /// Vocabulary file (term<TAB>weight per line)
        vocab_file: String,
        /// Prefixes to complete
        #[arg(required = true)]
        prefixes: Vec<String>,
        /// Maximum suggestions per prefix (default: settings)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Emit JSON instead of tab-separated text
        #[arg(long)]
        json: bool,
    },
    /// Show vocabulary and tree size
    Stats {
        /// Vocabulary file (term<TAB>weight per line)
        vocab_file: String,
    },
    /// Type text keystroke by keystroke and show the suggestion bar
    Simulate {
        /// Vocabulary file (term<TAB>weight per line)
        vocab_file: String,
        /// Text to type
        text: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Query {
            vocab_file,
            prefixes,
            limit,
            json,
        } => query_ops::query(&vocab_file, &prefixes, limit, json),
        Command::Stats { vocab_file } => query_ops::stats(&vocab_file),
        Command::Simulate { vocab_file, text } => query_ops::simulate(&vocab_file, &text),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

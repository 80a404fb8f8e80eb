// SPDX-License-Identifier: PMPL-1.0-or-later

//! iso639: command-line lookup over the ISO 639 language registry.

use anyhow::Result;
use clap::{Parser, Subcommand};
use iso639::report::{self, OutputFormat};
use iso639::{FieldKey, Registry};

#[derive(Parser)]
#[command(name = "iso639")]
#[command(version = "1.0.0")]
#[command(about = "ISO 639 language code lookup")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single language by code or name
    Lookup {
        /// Value to match against the selected field
        #[arg(value_name = "VALUE")]
        value: String,

        /// Field to match
        #[arg(short, long, value_enum, default_value = "alpha2")]
        key: FieldArg,

        /// Emit machine-readable output instead of text
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the full language table
    List {
        /// Key the serialized output by a field identifier (639-1, 639-2/B, 639-2/T, name)
        #[arg(short, long, value_name = "KEY")]
        index_by: Option<String>,

        /// Emit machine-readable output instead of text
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the number of registered languages
    Count,
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FieldArg {
    Name,
    Alpha2,
    Terminology,
    Bibliographic,
}

impl From<FieldArg> for FieldKey {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => FieldKey::Name,
            FieldArg::Alpha2 => FieldKey::Alpha2,
            FieldArg::Terminology => FieldKey::Terminology,
            FieldArg::Bibliographic => FieldKey::Bibliographic,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = Registry::new();

    match cli.command {
        Commands::Lookup { value, key, format } => {
            let language = match FieldKey::from(key) {
                FieldKey::Name => registry.by_name(&value)?,
                FieldKey::Alpha2 => registry.by_alpha2(&value)?,
                FieldKey::Terminology => registry.by_terminology(&value)?,
                FieldKey::Bibliographic => registry.by_bibliographic(&value)?,
            };
            match format {
                Some(format) => println!("{}", format.serialize(language)?),
                None => report::print_language(language),
            }
        }

        Commands::List { index_by, format } => match index_by {
            Some(key) => {
                let map = report::indexed_map(registry.iter_by(&key)?);
                let format = format.unwrap_or(OutputFormat::Json);
                println!("{}", format.serialize(&map)?);
            }
            None => match format {
                Some(format) => println!("{}", format.serialize(&registry.all())?),
                None => report::print_table(registry.all()),
            },
        },

        Commands::Count => {
            println!("{}", registry.len());
        }
    }

    Ok(())
}

//! `roomsearch algorithms` command - list the search strategies

use crate::cli::{Cli, OutputFormat};
use roomsearch_core::error::Result;
use roomsearch_core::records::escape_quotes;
use roomsearch_core::search::Algorithm;

/// Execute the algorithms command
pub fn execute(cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = Algorithm::ALL
                .iter()
                .map(|algorithm| {
                    serde_json::json!({
                        "key": algorithm.key(),
                        "name": algorithm.display_name(),
                        "description": algorithm.description(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for algorithm in Algorithm::ALL {
                println!("{:<20} {}", algorithm.key(), algorithm.description());
            }
        }
        OutputFormat::Records => {
            println!(
                "H roomsearch=1 records=1 mode=algorithms count={}",
                Algorithm::ALL.len()
            );
            for algorithm in Algorithm::ALL {
                println!(
                    "A {} \"{}\" \"{}\"",
                    algorithm.key(),
                    escape_quotes(algorithm.display_name()),
                    escape_quotes(algorithm.description())
                );
            }
        }
    }
    Ok(())
}

//! List the persisted property values the factories read.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::constants::{ALL_PROPERTY_KEYS, APP_BINARY_NAME};
use crate::properties::{PropertySource, PropertyStore};

/// List the recognized property keys and their effective values
#[derive(Args, Debug)]
pub struct PropertiesArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable property listing
#[derive(Serialize, Debug)]
struct PropertyOutput {
    key: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl PropertiesArgs {
    /// Execute the properties command
    pub fn execute(&self) -> Result<()> {
        let store = PropertyStore::load()?;

        if self.json {
            let listing: Vec<PropertyOutput> = ALL_PROPERTY_KEYS
                .iter()
                .map(|key| PropertyOutput {
                    key,
                    value: store.get(key).map(str::to_string),
                })
                .collect();
            let json =
                serde_json::to_string_pretty(&listing).context("Failed to serialize properties")?;
            println!("{json}");
            return Ok(());
        }

        let path = PropertyStore::file_path()?;
        println!("Property file: {}", path.display());
        println!();
        for key in ALL_PROPERTY_KEYS {
            match store.get(key) {
                Some(value) => println!("  {key}  =  {value}"),
                None => println!("  {key}  =  (default)"),
            }
        }
        println!();
        println!("To see the metrics these resolve to, run:");
        println!("  {APP_BINARY_NAME} show");

        Ok(())
    }
}

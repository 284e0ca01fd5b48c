#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive CLI entry point for the patrol map toolchain.
//!
//! Provides a unified binary (`patrol-map`) that lets users
//! interactively choose between starting the server and validating a
//! patrol locations CSV before deploying it.

use std::path::Path;

use dialoguer::{Input, Select};
use patrol_map_locations::LocationTable;

/// Top-level tool selection for the patrol map toolchain.
enum Tool {
    Server,
    ValidateLocations,
}

impl Tool {
    const ALL: &[Self] = &[Self::Server, Self::ValidateLocations];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Server => "Start server",
            Self::ValidateLocations => "Validate locations file",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Patrol Map Toolchain");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Server => {
            // The server uses actix-web's runtime, so we need to run it
            // in a blocking task to avoid nesting tokio runtimes.
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new().block_on(patrol_map_server::interactive::run())
            })
            .await??;
        }
        Tool::ValidateLocations => {
            pretty_env_logger::init_custom_env("RUST_LOG");
            validate_locations()?;
        }
    }

    Ok(())
}

/// Prompts for a CSV path and reports whether it loads as a valid
/// location table.
fn validate_locations() -> Result<(), Box<dyn std::error::Error>> {
    let path: String = Input::new()
        .with_prompt("Patrol locations CSV")
        .default(patrol_map_server::DEFAULT_LOCATIONS_CSV.to_string())
        .interact_text()?;

    match LocationTable::from_csv_path(Path::new(&path)) {
        Ok(table) => {
            println!(
                "OK: {} patrol locations across {} districts",
                table.len(),
                table.district_count()
            );
            for district in table.districts() {
                let locations: Vec<&str> = table
                    .locations(district)
                    .map(Iterator::collect)
                    .unwrap_or_default();
                println!("  {district}: {}", locations.join(", "));
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Validation failed: {e}");
            Err(Box::new(e))
        }
    }
}

//! Storefront command-line client
//!
//! Browses the product catalog and manages a cart persisted to a local file.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use storefront::{
    cart::ProductId,
    catalog::{Catalog, CatalogError},
    store::CartStore,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::{config::CliConfig, file_store::FileStore};

mod commands;
mod config;
mod file_store;
mod logging;
mod render;

/// Errors surfaced to the user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    ReadCatalog {
        /// Catalog path
        path: PathBuf,

        /// Underlying I/O failure
        source: io::Error,
    },

    /// Catalog data is invalid.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// No product has the requested id.
    #[error("no product with id {0}")]
    UnknownProduct(ProductId),

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    let Some(path) = path else {
        return Ok(Catalog::bundled()?);
    };

    let json = fs::read_to_string(path).map_err(|source| CliError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Catalog::from_json(&json)?)
}

fn run(config: &CliConfig) -> Result<(), CliError> {
    let catalog = load_catalog(config.catalog.as_deref())?;
    let storage = FileStore::new(&config.cart_file);

    debug!(path = %storage.path().display(), products = catalog.len(), "opening cart");

    let mut store = CartStore::initialize(storage);
    let stdout = io::stdout();

    commands::execute(&config.command, &catalog, &mut store, &mut stdout.lock())
}

fn main() -> ExitCode {
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    if let Err(error) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for subscriber errors"
        )]
        {
            eprintln!("Logging error: {error}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "command failed");

            #[expect(clippy::print_stderr, reason = "user-facing error message")]
            {
                eprintln!("Error: {error}");
            }

            ExitCode::FAILURE
        }
    }
}

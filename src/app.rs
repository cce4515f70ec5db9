//! Application context shared by CLI commands

use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::storage::Database;

pub struct AppContext {
    pub config: Config,
    pub db: Database,
    pub db_path: PathBuf,
    pub robot_mode: bool,
}

impl AppContext {
    /// Load configuration and open the knowledge base named by the CLI flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;

        let db_path = match &cli.db {
            Some(path) => path.clone(),
            None => config.storage.resolve_db_path()?,
        };
        debug!(path = %db_path.display(), "opening knowledge base");
        let db = Database::open(&db_path)?;

        if config.storage.seed_on_open {
            let seeded = db.seed_reference_data()?;
            if seeded > 0 {
                info!(seeded, "seeded empty knowledge base with reference entries");
            }
        }

        Ok(Self {
            config,
            db,
            db_path,
            robot_mode: cli.robot,
        })
    }
}

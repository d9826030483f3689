use std::path::PathBuf;

/// Runtime configuration. The database file path is the only input the
/// store cares about; everything else is presentation.
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Resolve the database path: an explicit `--db` override wins,
    /// otherwise the platform data directory
    /// (~/.local/share/snipbox/snippets.db or platform equivalent).
    pub fn resolve(override_path: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let db_path = match override_path {
            Some(path) => path,
            None => default_db_path()?,
        };
        Ok(Config { db_path })
    }
}

fn default_db_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data_dir = directories::ProjectDirs::from("", "", "snipbox")
        .ok_or("Could not determine data directory")?
        .data_dir()
        .to_path_buf();

    std::fs::create_dir_all(&data_dir)?;
    Ok(data_dir.join("snippets.db"))
}

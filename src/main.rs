use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

use nebula::app::App;
use nebula::catalog::CatalogStore;
use nebula::config::Config;
use nebula::storage::JsonFileStore;
use nebula::ui;

/// Get the data directory path (~/.config/nebula/)
fn default_data_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("nebula"))
}

#[derive(Parser, Debug)]
#[command(name = "nebula", about = "Terminal library browser for web games")]
struct Args {
    /// Directory holding library.json and config.toml (default: ~/.config/nebula)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Reset the library to the built-in starter catalog (the old file is backed up)
    #[arg(long)]
    reset_library: bool,

    /// Export the library as pretty-printed JSON to FILE and exit
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir).context("Failed to create data directory")?;
        println!("Created data directory: {}", data_dir.display());
    }

    // User-only access on Unix; the library is personal data
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&data_dir) {
            Ok(metadata) => {
                let mut perms = metadata.permissions();
                perms.set_mode(0o700);
                if let Err(e) = std::fs::set_permissions(&data_dir, perms) {
                    tracing::warn!(
                        path = %data_dir.display(),
                        error = %e,
                        "Failed to set data directory permissions to 0700"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %data_dir.display(),
                    error = %e,
                    "Failed to read data directory metadata"
                );
            }
        }
    }

    let library_path = data_dir.join("library.json");
    let config_path = data_dir.join("config.toml");

    if args.reset_library && library_path.exists() {
        let backup_name = format!("library.backup-{}.json", Utc::now().format("%Y%m%d%H%M%S"));
        let backup_path = data_dir.join(&backup_name);
        std::fs::copy(&library_path, &backup_path).with_context(|| {
            format!("Failed to back up library to '{}'", backup_path.display())
        })?;
        std::fs::remove_file(&library_path)
            .with_context(|| format!("Failed to remove '{}'", library_path.display()))?;
        println!("Library reset; previous file saved as {}", backup_name);
    }

    let store = JsonFileStore::new(&library_path);
    let catalog = CatalogStore::load(Box::new(store));

    if let Some(export_path) = args.export {
        let json = serde_json::to_string_pretty(catalog.entries())
            .context("Failed to serialize library")?;
        std::fs::write(&export_path, json)
            .with_context(|| format!("Failed to write '{}'", export_path.display()))?;
        println!(
            "Exported {} games to {}",
            catalog.len(),
            export_path.display()
        );
        return Ok(());
    }

    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from '{}'", config_path.display()))?;

    let mut app = App::new(catalog, &config);
    ui::run(&mut app).await
}

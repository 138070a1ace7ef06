use crate::cli::{args::ConfigArgs, global::GlobalArgs};
use base62_id::{CONFIG_FILE_NAME, Config};
use std::path::PathBuf;

pub fn handle(
    args: ConfigArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.paths {
        for path in candidate_paths() {
            let marker = if config.sources.contains(&path) {
                "loaded"
            } else if path.exists() {
                "invalid"
            } else {
                "missing"
            };
            println!("{marker:<8} {}", path.display());
        }
        return Ok(());
    }

    println!("# built-in defaults");
    for source in &config.sources {
        println!("# overridden by {}", source.display());
    }
    print!("{}", config.to_toml()?);
    println!(
        "# effective log level: {:?}",
        global.log_level(&config.settings)
    );
    Ok(())
}

/// Override files in the order they are applied.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("base62").join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from(".").join(CONFIG_FILE_NAME));
    paths
}

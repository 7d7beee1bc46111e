use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".metricard.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Metricard Configuration

[output]
default_format = "terminal"

[display]
progress_bar_width = 12
"#;

    fs::write(&config_path, default_config)?;
    println!("Created .metricard.toml configuration file");

    Ok(())
}

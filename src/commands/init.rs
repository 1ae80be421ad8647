use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Casemap Configuration

# Weights for combining the two evidence ratings into a strength score.
# Both must be between 0.0 and 1.0 and sum to 1.0.
[scoring]
reliability = 0.5
relevance = 0.5

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

use anyhow::{Context, Result};
use starmap_core::config::{Config, parse_config};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the stored API key
pub const API_KEY_ENV: &str = "STARMAP_API_KEY";

/// Get path to the user config file
fn config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Could not determine home directory")?;
    Ok(PathBuf::from(home).join(".starmap").join("config.toml"))
}

/// Load user config, or the built-in defaults when no file exists yet
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    Ok(load_config_from(&path)?.unwrap_or_default())
}

fn load_config_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let config = parse_config(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(Some(config))
}

fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config directory")?;
    }
    let contents = config
        .to_toml_string()
        .context("Failed to serialize config")?;
    fs::write(path, contents).context("Failed to write config file")?;

    // The file holds a credential.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .context("Failed to restrict config file permissions")?;
    }

    Ok(())
}

/// Pick the API key: environment first, then config file. Blank keys count
/// as unset.
pub fn resolve_api_key(env_key: Option<String>, config: &Config) -> Option<String> {
    env_key
        .filter(|k| !k.trim().is_empty())
        .or_else(|| {
            config
                .rapidapi
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty())
        })
}

/// Helper to read user input
fn read_input(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Show only the first characters of a stored key
fn key_preview(key: &str) -> String {
    let shown: String = key.chars().take(6).collect();
    format!("{}...", shown)
}

/// Prompt for the RapidAPI key and default timezone, then save
pub async fn run() -> Result<()> {
    println!("🔧 Configuring StarMap...\n");

    let path = config_path()?;
    let mut config = load_config_from(&path)?.unwrap_or_default();

    println!("📋 You'll need a RapidAPI key subscribed to The Numerology API.");
    println!("   Find it at: https://rapidapi.com/developer/apps");
    println!();

    let existing_key = config.rapidapi.api_key.clone().unwrap_or_default();
    let api_key = if !existing_key.is_empty() {
        let input = read_input(&format!(
            "API Key [current: {}]: ",
            key_preview(&existing_key)
        ))?;
        if input.is_empty() { existing_key } else { input }
    } else {
        read_input("API Key: ")?
    };

    if api_key.is_empty() {
        anyhow::bail!("API key is required");
    }
    config.rapidapi.api_key = Some(api_key);

    let tz = read_input(&format!(
        "Default timezone [current: {}]: ",
        config.defaults.tz
    ))?;
    if !tz.is_empty() {
        config.defaults.tz = tz;
    }

    save_config_to(&path, &config)?;

    println!();
    println!("✅ Configuration saved to: {}", path.display());
    println!("   {} overrides the stored key when set.", API_KEY_ENV);
    println!();
    println!("🚀 Try: starmap horoscope --dob 1990-07-16");

    Ok(())
}

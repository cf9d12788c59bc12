//! Config commands

use anyhow::Result;
use colored::Colorize;

use crate::config::{API_KEY_ENV, ReelConfig};

/// Show the effective configuration
pub fn cmd_config_show() -> Result<()> {
    let config = ReelConfig::load()?;
    let path = ReelConfig::config_path()?;

    println!("{}", "Configuration".bold());
    println!();
    let location = if ReelConfig::exists() {
        path.display().to_string()
    } else {
        format!("{} (not created yet)", path.display())
    };
    println!("  File:            {}", location);

    let key = match config.api_key() {
        Some(key) => mask_key(key).green().to_string(),
        None => format!("not set (use {} or `config set-key`)", API_KEY_ENV)
            .yellow()
            .to_string(),
    };
    println!("  API key:         {}", key);
    println!("  API base URL:    {}", config.api.base_url);
    println!("  Image base URL:  {}", config.api.image_base_url);
    println!("  Language:        {}", config.api.language);
    println!("  Timeout:         {}s", config.api.timeout_secs);
    println!();
    println!("  Page size:       {}", config.carousel.page_size);
    println!("  Search size:     {}", config.carousel.search_page_size);
    println!("  Transition:      {}ms", config.carousel.transition_ms);
    println!("  Theme:           {}", config.tui.theme);

    Ok(())
}

/// Store the API key in the config file
pub fn cmd_config_set_key(key: &str) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        println!("{} API key cannot be empty", "!".yellow());
        return Ok(());
    }

    // Load without the env override so it is not written back
    let mut config = ReelConfig::load_from(&ReelConfig::config_path()?)?;
    config.set_api_key(key);
    config.save()?;

    println!("{} API key saved", "+".green());
    println!("  Config saved to: {}", ReelConfig::config_path()?.display());

    Ok(())
}

/// Print the config file location
pub fn cmd_config_path() -> Result<()> {
    println!("{}", ReelConfig::config_path()?.display());
    Ok(())
}

/// Keep the first and last four characters visible
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
}

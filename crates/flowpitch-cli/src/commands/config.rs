use anyhow::Result;

use flowpitch_core::AppConfig;

pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if !init {
        println!("Config file: {}", path.display());
        if !path.exists() {
            println!("  (not found, using defaults; create it with `flowpitch config --init`)");
        }
        println!("Log file:    {}", config.log_path().display());
        println!("Theme:       {}", config.ui.theme.name);
        println!("Available:   {}", flowpitch_tui::available_themes().join(", "));
        return Ok(());
    }

    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    AppConfig::default().save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

//! `gocount config` – show where the config lives and what is in effect.

use anyhow::Result;
use gocount_core::config::{self, GocountConfig};

pub fn run_config(cfg: &GocountConfig) -> Result<()> {
    let path = config::config_path()?;
    println!("config: {}", path.display());
    println!("workers = {}", cfg.effective_workers());
    println!("http.follow_redirects = {}", cfg.http.follow_redirects);
    println!(
        "http.user_agent = {}",
        cfg.http.user_agent.as_deref().unwrap_or("-")
    );
    Ok(())
}

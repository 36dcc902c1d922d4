use anyhow::Result;

use crate::config::Config;

pub fn run_sources(config: &Config) -> Result<()> {
    println!("{:<8} {:<48} {}", "SOURCE", "TARGET", "STATUS");

    match (&config.directory.path, &config.directory.url) {
        (Some(path), _) => {
            let status = if path.exists() {
                "OK"
            } else {
                "MISSING (file does not exist)"
            };
            println!("{:<8} {:<48} {}", "file", path.display().to_string(), status);
        }
        (None, Some(url)) => {
            // Reachability is only known at load time; configured is all we
            // can report here.
            println!("{:<8} {:<48} {}", "url", url, "CONFIGURED");
        }
        (None, None) => {
            println!("{:<8} {:<48} {}", "-", "-", "NOT CONFIGURED");
        }
    }

    println!();
    println!(
        "cache: {} (timeout: {}s)",
        config.cache.mode, config.directory.timeout_secs
    );

    Ok(())
}

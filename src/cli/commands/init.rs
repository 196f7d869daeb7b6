use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::init_at(&path, cli.test)?;

    if cli.test {
        info(format!("Test mode: {} not written", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }
    info(format!(
        "{} shortcuts, primary time format '{}'",
        cfg.shortcuts.len(),
        cfg.format_spec()?.primary()
    ));
    Ok(())
}

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = &cli.command
    {
        let path = Config::resolve_path(cli.config.as_deref());

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            let warnings = cfg.check();
            if warnings.is_empty() {
                success("Configuration OK");
            } else {
                for w in &warnings {
                    warning(w);
                }
            }
        }
    }

    Ok(())
}

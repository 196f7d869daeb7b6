use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{Clock, FormatSpec, MemoryHost, ShortcutWidget};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::colors::colorize_field;
use crate::utils::time::today_at;

/// Handle the `pick` command: one activation against an in-memory host.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Pick {
        index,
        slot,
        at,
        format,
    } = &cli.command
    {
        let formats = if format.is_empty() {
            cfg.format_spec()?
        } else {
            FormatSpec::new(format.iter().cloned())?
        };

        let clock = match at {
            Some(t) => Clock::Fixed(today_at(t)?),
            None => Clock::System,
        };

        let host = MemoryHost::new(cfg.field_slots, formats, clock);
        let mut widget = ShortcutWidget::new(host, cfg.shortcuts.clone());
        widget.init();
        widget.host_mut().open_popup(*slot);

        let activation = widget.select(*slot, *index)?;

        if cli.test {
            for event in widget.host().journal().events() {
                println!("{}", event);
            }
        }

        let label = &widget.entries()[*index].label;
        success(format!(
            "{} → field #{}: {}",
            label,
            activation.num,
            colorize_field(&activation.value)
        ));

        let time = activation.resolved.clock_time();
        if !time.is_valid() {
            warning(format!(
                "'{}' decodes to {}, check the shortcut configuration",
                label, time
            ));
        }
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Clock, MemoryHost, ShortcutWidget};
use crate::errors::AppResult;
use crate::models::clock_time::ClockTime;
use crate::models::encoded_time::{Decoded, EncodedTime};
use crate::ui::messages::header;
use crate::utils::formatting::{colored_preview, pad_left, pad_right};
use serde::Serialize;

#[derive(Serialize)]
struct MenuRow<'a> {
    index: usize,
    label: &'a str,
    code: EncodedTime,
    /// `None` for the current-time shortcut.
    time: Option<ClockTime>,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let host = MemoryHost::new(cfg.field_slots, cfg.format_spec()?, Clock::System);
        let mut widget = ShortcutWidget::new(host, cfg.shortcuts.clone());
        widget.init();

        let menu = widget.host().menu();

        if *json {
            let rows: Vec<MenuRow> = menu
                .iter()
                .enumerate()
                .map(|(index, e)| MenuRow {
                    index,
                    label: &e.label,
                    code: e.code,
                    time: match e.code.decode() {
                        Decoded::CurrentTime => None,
                        Decoded::At(t) => Some(t),
                    },
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if menu.is_empty() {
            println!("No shortcuts configured.");
            return Ok(());
        }

        let width = menu.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);

        header("Shortcuts");
        for (i, e) in menu.iter().enumerate() {
            println!(
                "{}  {}  {}  {}",
                pad_left(&i.to_string(), 2),
                pad_right(&e.label, width),
                pad_left(&e.code.to_string(), 6),
                colored_preview(e.code)
            );
        }
    }
    Ok(())
}

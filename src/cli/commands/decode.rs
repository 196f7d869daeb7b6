use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::encoded_time::{Decoded, EncodedTime};
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Decode { code } = cmd {
        let code: EncodedTime = code.parse()?;

        match code.decode() {
            Decoded::CurrentTime => println!("{} → current time", code),
            Decoded::At(t) => {
                println!("{} → {}", code, t);
                if !t.is_valid() {
                    warning(format!("{} is not a valid time of day", t));
                }
            }
        }
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::encoded_time::EncodedTime;
use crate::utils::time::parse_clock_time;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Encode { time } = cmd {
        let clock = parse_clock_time(time)?;
        let code = EncodedTime::encode(clock)?;
        println!("{} → {}", clock, code);
    }
    Ok(())
}

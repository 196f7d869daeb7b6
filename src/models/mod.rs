pub mod clock_time;
pub mod encoded_time;
pub mod resolved;
pub mod shortcut;

pub use clock_time::ClockTime;
pub use encoded_time::{Decoded, EncodedTime};
pub use resolved::{FixedDateTime, LiveDateTime, ResolvedTime};
pub use shortcut::ShortcutEntry;

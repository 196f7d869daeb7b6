use crate::core::format::{format, format_live};
use crate::core::host::ShortcutHost;
use crate::errors::{AppError, AppResult};
use crate::models::encoded_time::{Decoded, EncodedTime};
use crate::models::resolved::{FixedDateTime, LiveDateTime, ResolvedTime};

/// Result of one activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub num: usize,
    pub resolved: ResolvedTime,
    pub value: String,
}

/// Pluggable behaviour run when a shortcut is picked.
pub trait ActivationStrategy {
    fn activate(
        &self,
        host: &mut dyn ShortcutHost,
        num: usize,
        code: EncodedTime,
    ) -> AppResult<Activation>;
}

/// Turn a code into a concrete time. Only the sentinel reads the clock.
pub fn resolve(code: EncodedTime, host: &dyn ShortcutHost) -> ResolvedTime {
    match code.decode() {
        Decoded::CurrentTime => ResolvedTime::Live(LiveDateTime(host.current_system_time())),
        Decoded::At(time) => ResolvedTime::Fixed(FixedDateTime::new(time)),
    }
}

/// Writes the chosen time into the slot's field, focuses it, then closes
/// the popup. The write always precedes focus and dismissal.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickTimeHandler;

impl ActivationStrategy for QuickTimeHandler {
    fn activate(
        &self,
        host: &mut dyn ShortcutHost,
        num: usize,
        code: EncodedTime,
    ) -> AppResult<Activation> {
        // 1️⃣ resolve
        let resolved = resolve(code, &*host);

        // 2️⃣ render with the current primary pattern
        let patterns = host.format_patterns();
        let value = match &resolved {
            ResolvedTime::Fixed(f) => format(f.time.hour, f.time.minute, &patterns),
            ResolvedTime::Live(LiveDateTime(dt)) => format_live(*dt, &patterns),
        };

        // 3️⃣ write, 4️⃣ focus
        let field = host.target_field(num).ok_or(AppError::InvalidSlot(num))?;
        field.set_value(&value);
        field.focus();

        // 5️⃣ dismiss
        host.dismiss(num);

        Ok(Activation {
            num,
            resolved,
            value,
        })
    }
}

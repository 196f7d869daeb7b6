use crate::core::activation::{Activation, ActivationStrategy, QuickTimeHandler};
use crate::core::host::ShortcutHost;
use crate::errors::{AppError, AppResult};
use crate::models::shortcut::ShortcutEntry;

/// A fixed menu of time shortcuts bound to a host.
///
/// The entry list is the whole configuration surface: replacing it replaces
/// every popup's content and order once the host is reinitialized.
pub struct ShortcutWidget<H: ShortcutHost> {
    entries: Vec<ShortcutEntry>,
    host: H,
    strategy: Box<dyn ActivationStrategy>,
}

impl<H: ShortcutHost> ShortcutWidget<H> {
    pub fn new(host: H, entries: Vec<ShortcutEntry>) -> Self {
        Self {
            entries,
            host,
            strategy: Box::new(QuickTimeHandler),
        }
    }

    /// Swap the activation behaviour.
    pub fn with_strategy(mut self, strategy: Box<dyn ActivationStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn init(&mut self) {
        self.host.reinitialize(&self.entries);
    }

    pub fn replace_entries(&mut self, entries: Vec<ShortcutEntry>) {
        self.entries = entries;
        self.init();
    }

    pub fn entries(&self) -> &[ShortcutEntry] {
        &self.entries
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Activate entry `index` for slot `num`.
    pub fn select(&mut self, num: usize, index: usize) -> AppResult<Activation> {
        let code = self
            .entries
            .get(index)
            .map(|e| e.code)
            .ok_or(AppError::InvalidEntry(index))?;
        self.strategy.activate(&mut self.host, num, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::FormatSpec;
    use crate::core::host::{Clock, HostEvent, MemoryHost};
    use crate::models::encoded_time::EncodedTime;
    use crate::models::resolved::{FixedDateTime, ResolvedTime};
    use crate::models::shortcut::default_entries;
    use crate::models::ClockTime;

    fn widget() -> ShortcutWidget<MemoryHost> {
        let host = MemoryHost::new(2, FormatSpec::new(["%H:%M"]).unwrap(), Clock::System);
        let mut w = ShortcutWidget::new(host, default_entries());
        w.init();
        w
    }

    #[test]
    fn select_uses_entry_code() {
        let mut w = widget();
        let act = w.select(1, 2).unwrap();
        assert_eq!(act.value, "10:20");
        assert_eq!(w.host().value(1), Some("10:20"));
    }

    #[test]
    fn unknown_entry_index() {
        let mut w = widget();
        assert!(matches!(w.select(0, 42), Err(AppError::InvalidEntry(42))));
    }

    #[test]
    fn replace_entries_rerenders_exactly_the_new_list() {
        let mut w = widget();
        assert_eq!(w.host().menu().len(), 7);

        let fresh = vec![
            ShortcutEntry::new("Assembly", 8.3),
            ShortcutEntry::new("Now", -1.0),
        ];
        w.replace_entries(fresh.clone());

        assert_eq!(w.host().menu(), fresh.as_slice());
        assert_eq!(
            w.host().journal().events().last(),
            Some(&HostEvent::Reinitialize {
                labels: vec!["Assembly".into(), "Now".into()]
            })
        );
        assert_eq!(w.select(0, 0).unwrap().value, "08:30");
    }

    struct Noon;

    impl ActivationStrategy for Noon {
        fn activate(
            &self,
            host: &mut dyn ShortcutHost,
            num: usize,
            _code: EncodedTime,
        ) -> AppResult<Activation> {
            host.dismiss(num);
            Ok(Activation {
                num,
                resolved: ResolvedTime::Fixed(FixedDateTime::new(ClockTime::new(12, 0))),
                value: String::new(),
            })
        }
    }

    #[test]
    fn custom_strategy_plugs_in() {
        let mut w = widget().with_strategy(Box::new(Noon));
        let act = w.select(0, 1).unwrap();
        assert_eq!(act.resolved.clock_time(), ClockTime::new(12, 0));
        assert_eq!(w.host().value(0), Some(""));
    }
}

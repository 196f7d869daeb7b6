//! Host collaborator contract and an in-memory host.
//!
//! The host owns the popup UI and the target fields; the activation handler
//! only ever reaches them through [`ShortcutHost`].

use crate::core::format::FormatSpec;
use crate::models::shortcut::ShortcutEntry;
use chrono::NaiveDateTime;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// An externally owned text input. The core only writes to it.
pub trait TargetField {
    fn set_value(&mut self, value: &str);
    fn focus(&mut self);
}

pub trait ShortcutHost {
    /// `None` when no field exists for `num`.
    fn target_field(&mut self, num: usize) -> Option<&mut dyn TargetField>;

    /// Close the popup attached to slot `num`.
    fn dismiss(&mut self, num: usize);

    fn current_system_time(&self) -> NaiveDateTime;

    fn format_patterns(&self) -> FormatSpec;

    /// Re-render every popup from `entries`.
    fn reinitialize(&mut self, entries: &[ShortcutEntry]);
}

/// Side effects observed by a [`MemoryHost`], in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Write { num: usize, value: String },
    /// `value` is what the field held when focus landed.
    Focus { num: usize, value: String },
    Dismiss { num: usize },
    Reinitialize { labels: Vec<String> },
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostEvent::Write { num, value } => write!(f, "write  #{num} {value:?}"),
            HostEvent::Focus { num, value } => write!(f, "focus  #{num} {value:?}"),
            HostEvent::Dismiss { num } => write!(f, "dismiss #{num}"),
            HostEvent::Reinitialize { labels } => {
                write!(f, "reinit {} entries", labels.len())
            }
        }
    }
}

/// Shared, append-only event log. Single-threaded by construction.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<HostEvent>>>);

impl Journal {
    pub fn push(&self, event: HostEvent) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Debug)]
pub struct TextSlot {
    num: usize,
    value: String,
    journal: Journal,
}

impl TargetField for TextSlot {
    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.journal.push(HostEvent::Write {
            num: self.num,
            value: self.value.clone(),
        });
    }

    fn focus(&mut self) {
        self.journal.push(HostEvent::Focus {
            num: self.num,
            value: self.value.clone(),
        });
    }
}

/// Where "now" comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => chrono::Local::now().naive_local(),
            Clock::Fixed(dt) => *dt,
        }
    }
}

/// In-memory host: a row of text slots, one popup per slot, and a journal.
#[derive(Debug)]
pub struct MemoryHost {
    slots: Vec<TextSlot>,
    open: BTreeSet<usize>,
    menu: Vec<ShortcutEntry>,
    clock: Clock,
    formats: FormatSpec,
    journal: Journal,
}

impl MemoryHost {
    pub fn new(slot_count: usize, formats: FormatSpec, clock: Clock) -> Self {
        let journal = Journal::default();
        let slots = (0..slot_count)
            .map(|num| TextSlot {
                num,
                value: String::new(),
                journal: journal.clone(),
            })
            .collect();

        Self {
            slots,
            open: BTreeSet::new(),
            menu: Vec::new(),
            clock,
            formats,
            journal,
        }
    }

    /// Show the popup for `num`. Unknown slots are ignored.
    pub fn open_popup(&mut self, num: usize) {
        if num < self.slots.len() {
            self.open.insert(num);
        }
    }

    pub fn is_open(&self, num: usize) -> bool {
        self.open.contains(&num)
    }

    pub fn value(&self, num: usize) -> Option<&str> {
        self.slots.get(num).map(|s| s.value.as_str())
    }

    /// Slot that most recently received focus.
    pub fn focused(&self) -> Option<usize> {
        self.journal.events().iter().rev().find_map(|e| match e {
            HostEvent::Focus { num, .. } => Some(*num),
            _ => None,
        })
    }

    /// Menu as last rendered by `reinitialize`.
    pub fn menu(&self) -> &[ShortcutEntry] {
        &self.menu
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }
}

impl ShortcutHost for MemoryHost {
    fn target_field(&mut self, num: usize) -> Option<&mut dyn TargetField> {
        self.slots
            .get_mut(num)
            .map(|slot| slot as &mut dyn TargetField)
    }

    fn dismiss(&mut self, num: usize) {
        self.open.remove(&num);
        self.journal.push(HostEvent::Dismiss { num });
    }

    fn current_system_time(&self) -> NaiveDateTime {
        self.clock.now()
    }

    fn format_patterns(&self) -> FormatSpec {
        self.formats.clone()
    }

    fn reinitialize(&mut self, entries: &[ShortcutEntry]) {
        self.menu = entries.to_vec();
        self.journal.push(HostEvent::Reinitialize {
            labels: entries.iter().map(|e| e.label.clone()).collect(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_has_no_field() {
        let mut host = MemoryHost::new(2, FormatSpec::default(), Clock::System);
        assert!(host.target_field(1).is_some());
        assert!(host.target_field(2).is_none());
    }

    #[test]
    fn focus_records_the_current_value() {
        let mut host = MemoryHost::new(1, FormatSpec::default(), Clock::System);
        if let Some(field) = host.target_field(0) {
            field.set_value("09:00");
            field.focus();
        }
        assert_eq!(host.focused(), Some(0));
        assert_eq!(
            host.journal().events().last(),
            Some(&HostEvent::Focus {
                num: 0,
                value: "09:00".into()
            })
        );
    }

    #[test]
    fn dismiss_closes_popup() {
        let mut host = MemoryHost::new(2, FormatSpec::default(), Clock::System);
        host.open_popup(1);
        host.open_popup(5);
        assert!(host.is_open(1));
        assert!(!host.is_open(5));
        host.dismiss(1);
        assert!(!host.is_open(1));
    }
}

use crate::models::encoded_time::EncodedTime;
use serde::{Deserialize, Serialize};

/// One selectable menu item: a label and the time code it writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortcutEntry {
    pub label: String,
    pub code: EncodedTime,
}

impl ShortcutEntry {
    pub fn new(label: impl Into<String>, code: f64) -> Self {
        Self {
            label: label.into(),
            code: EncodedTime::from_raw(code),
        }
    }
}

/// The school-day menu shipped by default.
pub fn default_entries() -> Vec<ShortcutEntry> {
    vec![
        ShortcutEntry::new("Now", -1.0),
        ShortcutEntry::new("Start of 1st Period", 9.0),
        ShortcutEntry::new("Start of 2nd Period", 10.2),
        ShortcutEntry::new("Start of Lunch", 11.4),
        ShortcutEntry::new("Start of 3rd Period", 12.4),
        ShortcutEntry::new("Start of 4th Period", 14.0),
        ShortcutEntry::new("End of School", 15.15),
    ]
}

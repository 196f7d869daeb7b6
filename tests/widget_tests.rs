use chrono::NaiveDate;
use timeshortcuts::core::{Clock, FormatSpec, HostEvent, MemoryHost, ShortcutWidget};
use timeshortcuts::models::shortcut::default_entries;
use timeshortcuts::models::{ResolvedTime, ShortcutEntry};

fn school_widget(h: u32, m: u32) -> ShortcutWidget<MemoryHost> {
    let now = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap();
    let formats = FormatSpec::new(["%H:%M", "%H:%M:%S"]).unwrap();
    let mut w = ShortcutWidget::new(MemoryHost::new(3, formats, Clock::Fixed(now)), default_entries());
    w.init();
    w
}

#[test]
fn test_school_day_menu() {
    let mut w = school_widget(13, 7);
    let got: Vec<String> = (0..w.entries().len())
        .map(|i| w.select(0, i).unwrap().value)
        .collect();
    assert_eq!(
        got,
        ["13:07", "09:00", "10:20", "11:40", "12:40", "14:00", "15:15"]
    );
}

#[test]
fn test_now_shortcut_is_live_others_fixed() {
    let mut w = school_widget(13, 7);
    assert!(matches!(w.select(0, 0).unwrap().resolved, ResolvedTime::Live(_)));
    assert!(matches!(w.select(0, 1).unwrap().resolved, ResolvedTime::Fixed(_)));
}

#[test]
fn test_value_is_written_before_focus_and_dismiss() {
    let mut w = school_widget(8, 0);
    w.host().journal().clear();
    w.host_mut().open_popup(1);

    w.select(1, 6).unwrap();

    assert_eq!(
        w.host().journal().events(),
        vec![
            HostEvent::Write { num: 1, value: "15:15".into() },
            HostEvent::Focus { num: 1, value: "15:15".into() },
            HostEvent::Dismiss { num: 1 },
        ]
    );
    assert!(!w.host().is_open(1));
}

#[test]
fn test_fields_are_independent() {
    let mut w = school_widget(8, 0);
    w.select(0, 1).unwrap();
    w.select(2, 3).unwrap();
    assert_eq!(w.host().value(0), Some("09:00"));
    assert_eq!(w.host().value(1), Some(""));
    assert_eq!(w.host().value(2), Some("11:40"));
}

#[test]
fn test_reinitialize_drops_previous_entries() {
    let mut w = school_widget(8, 0);
    w.replace_entries(vec![
        ShortcutEntry::new("End of School", 15.15),
        ShortcutEntry::new("Zero Period", 7.45),
    ]);

    let labels: Vec<&str> = w.host().menu().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["End of School", "Zero Period"]);
    assert_eq!(w.select(0, 1).unwrap().value, "07:45");
    assert!(w.select(0, 2).is_err());
}

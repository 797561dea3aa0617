use chrono::NaiveDate;
use hourgrid::models::slot::clamp_duration;
use hourgrid::models::{Hour, Slot, SlotStore, View};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn h(n: u8) -> Hour {
    Hour::new(n).unwrap()
}

#[test]
fn test_clamp_duration_bounds_and_garbage() {
    assert_eq!(clamp_duration("30"), 30);
    assert_eq!(clamp_duration("0"), 0);
    assert_eq!(clamp_duration("60"), 60);
    assert_eq!(clamp_duration("75"), 60);
    assert_eq!(clamp_duration("99999999999999999999999"), 60);
    assert_eq!(clamp_duration("-5"), 0);
    assert_eq!(clamp_duration("abc"), 0);
    assert_eq!(clamp_duration(""), 0);
    assert_eq!(clamp_duration("  45 "), 45);
    assert_eq!(clamp_duration("12abc"), 12);
    assert_eq!(clamp_duration("+20"), 20);

    for raw in ["-100", "0", "1", "59", "61", "1000", "x", "3.7"] {
        assert!(clamp_duration(raw) <= 60, "{raw} out of range");
    }
}

#[test]
fn test_clamp_duration_hex_prefix() {
    assert_eq!(clamp_duration("0x10"), 16);
    assert_eq!(clamp_duration("0X1e"), 30);
    assert_eq!(clamp_duration("0xff"), 60);
    assert_eq!(clamp_duration("0x"), 0);
    assert_eq!(clamp_duration("0xzz"), 0);
    assert_eq!(clamp_duration("-0x10"), 0);
    assert_eq!(clamp_duration("0b101"), 0);
}

#[test]
fn test_hour_validation() {
    assert!(Hour::new(0).is_ok());
    assert!(Hour::new(23).is_ok());
    assert!(Hour::new(24).is_err());
    assert!(Hour::parse("9").is_ok());
    assert!(Hour::parse("nine").is_err());
    assert_eq!(Hour::all().count(), 24);
}

#[test]
fn test_untouched_slot_reads_as_default() {
    let store = SlotStore::new();
    let slot = store.slot(d("2024-03-01"), h(9));

    assert_eq!(
        slot,
        Slot {
            checked: false,
            task: String::new(),
            duration: 60
        }
    );
    assert!(store.get(d("2024-03-01"), h(9)).is_none());
}

#[test]
fn test_ensure_slot_creates_checked_default_once() {
    let mut store = SlotStore::new();
    let date = d("2024-03-01");

    let created = store.ensure_slot(date, h(10)).clone();
    assert_eq!(created, Slot::touched());
    assert!(created.checked);
    assert_eq!(created.duration, 60);

    store.ensure_slot(date, h(10)).task = "Review".into();
    let again = store.ensure_slot(date, h(10)).clone();
    assert_eq!(again.task, "Review");
}

#[test]
fn test_set_checked_creates_or_preserves_fields() {
    let mut store = SlotStore::new();
    let date = d("2024-03-01");

    store.set_checked(date, h(8), false);
    assert_eq!(store.get(date, h(8)), Some(&Slot::default()));

    store.set_task(date, h(8), "Emails", View::Day);
    store.set_duration(date, h(8), "20");
    store.set_checked(date, h(8), true);

    let slot = store.slot(date, h(8));
    assert!(slot.checked);
    assert_eq!(slot.task, "Emails");
    assert_eq!(slot.duration, 20);
}

#[test]
fn test_day_view_task_does_not_touch_checked() {
    let mut store = SlotStore::new();
    let date = d("2024-03-01");

    store.set_checked(date, h(14), false);
    store.set_task(date, h(14), "Planning", View::Day);
    assert!(!store.slot(date, h(14)).checked);

    store.set_checked(date, h(14), true);
    store.set_task(date, h(14), "   ", View::Day);
    assert!(store.slot(date, h(14)).checked);
}

#[test]
fn test_week_view_task_drives_checked() {
    let mut store = SlotStore::new();
    let date = d("2024-03-04");

    store.set_checked(date, h(11), false);
    store.set_task(date, h(11), "Design review", View::Week);
    assert!(store.slot(date, h(11)).checked);

    store.set_task(date, h(11), "  \t ", View::Week);
    let slot = store.slot(date, h(11));
    assert!(!slot.checked);
    assert_eq!(slot.task, "  \t ");
}

#[test]
fn test_write_then_read_round_trip() {
    let mut store = SlotStore::new();
    let date = d("2024-03-01");

    store.set_checked(date, h(16), true);
    store.set_task(date, h(16), "Deploy", View::Day);
    let stored = store.set_duration(date, h(16), "45");

    assert_eq!(stored, 45);
    assert_eq!(
        store.slot(date, h(16)),
        Slot {
            checked: true,
            task: "Deploy".into(),
            duration: 45
        }
    );
}

#[test]
fn test_checked_slots_are_hour_ascending() {
    let mut store = SlotStore::new();
    let date = d("2024-03-01");

    for hour in [17, 3, 9] {
        store.set_checked(date, h(hour), true);
    }
    store.set_checked(date, h(12), false);

    let hours: Vec<u8> = store.checked_slots(date).map(|(hr, _)| hr.get()).collect();
    assert_eq!(hours, vec![3, 9, 17]);
}

#[test]
fn test_json_shape_matches_browser_storage() {
    let mut store = SlotStore::new();
    store.set_checked(d("2024-03-01"), h(9), true);
    store.set_task(d("2024-03-01"), h(9), "Standup", View::Day);
    store.set_duration(d("2024-03-01"), h(9), "30");

    let json: serde_json::Value = serde_json::to_value(&store).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "2024-03-01": { "9": { "checked": true, "task": "Standup", "duration": 30 } }
        })
    );

    let back: SlotStore = serde_json::from_value(json).unwrap();
    assert_eq!(back, store);
}

#[test]
fn test_json_missing_fields_and_loose_durations() {
    let raw = r#"{
        "2024-03-01": {
            "9": { "checked": true },
            "10": { "checked": true, "task": "A", "duration": "25" },
            "11": { "checked": true, "duration": 500 },
            "12": { "checked": true, "duration": -3 }
        }
    }"#;
    let store: SlotStore = serde_json::from_str(raw).unwrap();
    let date = d("2024-03-01");

    assert_eq!(store.slot(date, h(9)).duration, 60);
    assert_eq!(store.slot(date, h(9)).task, "");
    assert_eq!(store.slot(date, h(10)).duration, 25);
    assert_eq!(store.slot(date, h(11)).duration, 60);
    assert_eq!(store.slot(date, h(12)).duration, 0);
}

#[test]
fn test_merge_incoming_wins() {
    let date = d("2024-03-01");

    let mut current = SlotStore::new();
    current.set_task(date, h(9), "Old", View::Day);
    current.set_task(date, h(10), "Keep", View::Day);

    let mut incoming = SlotStore::new();
    incoming.set_task(date, h(9), "New", View::Day);
    incoming.set_task(d("2024-03-02"), h(8), "Other day", View::Day);

    let copied = current.merge(incoming);

    assert_eq!(copied, 2);
    assert_eq!(current.slot(date, h(9)).task, "New");
    assert_eq!(current.slot(date, h(10)).task, "Keep");
    assert_eq!(current.slot(d("2024-03-02"), h(8)).task, "Other day");
}

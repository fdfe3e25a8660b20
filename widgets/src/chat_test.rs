use super::*;

// =============================================================
// open / send
// =============================================================

#[test]
fn open_creates_empty_thread_once() {
    let mut threads = Threads::new();
    open(&mut threads, "Ruth").unwrap();
    send(&mut threads, "Ruth", "hi", "t1").unwrap();
    open(&mut threads, " Ruth ").unwrap();
    assert_eq!(threads["Ruth"].len(), 1);
}

#[test]
fn send_prepends_newest_first() {
    let mut threads = Threads::new();
    send(&mut threads, "Ruth", "first", "t1").unwrap();
    let latest = send(&mut threads, "Ruth", "  second ", "t2").unwrap();
    assert_eq!(latest.text, "second");
    assert_eq!(latest.from, SENDER_SELF);
    let texts: Vec<_> = threads["Ruth"].iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["second", "first"]);
}

#[test]
fn send_rejects_blank_message_without_opening() {
    let mut threads = Threads::new();
    assert!(matches!(send(&mut threads, "Ruth", "   ", "t"), Err(WidgetError::Empty { field: "message" })));
    assert!(threads.is_empty());
}

// =============================================================
// clear / previews
// =============================================================

#[test]
fn clear_keeps_thread() {
    let mut threads = Threads::new();
    send(&mut threads, "Ruth", "hi", "t").unwrap();
    clear(&mut threads, "Ruth").unwrap();
    assert!(threads["Ruth"].is_empty());
    assert!(clear(&mut threads, "Boaz").is_err());
}

#[test]
fn previews_show_newest_or_placeholder() {
    let mut threads = Threads::new();
    open(&mut threads, "Boaz").unwrap();
    send(&mut threads, "Ruth", "old", "t1").unwrap();
    send(&mut threads, "Ruth", "new", "t2").unwrap();
    assert_eq!(previews(&threads), vec![("Boaz", EMPTY_PREVIEW), ("Ruth", "new")]);
}

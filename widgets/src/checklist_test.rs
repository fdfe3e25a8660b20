use super::*;

#[test]
fn add_starts_not_done_at_top() {
    let mut goals = Vec::new();
    add(&mut goals, "Read John 1").unwrap();
    add(&mut goals, "Read John 2").unwrap();
    assert_eq!(goals[0].text, "Read John 2");
    assert!(goals.iter().all(|g| !g.done));
}

#[test]
fn toggle_flips_done() {
    let mut goals = Vec::new();
    let id = add(&mut goals, "Pray").unwrap().id.clone();
    assert!(toggle(&mut goals, &id).unwrap());
    assert!(!toggle(&mut goals, &id).unwrap());
}

#[test]
fn remove_filters_item() {
    let mut acts = Vec::new();
    let id = add(&mut acts, "Visit a neighbor").unwrap().id.clone();
    add(&mut acts, "Write a note").unwrap();
    let removed = remove(&mut acts, &id).unwrap();
    assert_eq!(removed.text, "Visit a neighbor");
    assert_eq!(acts.len(), 1);
}

#[test]
fn unknown_id_errors() {
    let mut goals: Vec<ChecklistItem> = Vec::new();
    assert!(matches!(toggle(&mut goals, "nope"), Err(WidgetError::NotFound { .. })));
    assert!(matches!(remove(&mut goals, "nope"), Err(WidgetError::NotFound { .. })));
}

#[test]
fn progress_counts_done() {
    let mut goals = Vec::new();
    let id = add(&mut goals, "a").unwrap().id.clone();
    add(&mut goals, "b").unwrap();
    toggle(&mut goals, &id).unwrap();
    assert_eq!(progress(&goals), (1, 2));
}

#[test]
fn missing_done_field_defaults_false() {
    let item: ChecklistItem = serde_json::from_str(r#"{"id":"1","text":"x"}"#).unwrap();
    assert!(!item.done);
}

use widgets::recovery::{self, BLANK};

use super::*;

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(escape(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn document_has_title_stamp_and_auto_print() {
    let html = render_plan(&RecoveryPlan::default(), "2025-06-01 07:30");
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<title>Recovery Plan</title>"));
    assert!(html.contains("<h1>Recovery Plan</h1>"));
    assert!(html.contains("Generated on 2025-06-01 07:30"));
    assert!(html.contains("window.print()"));
    assert!(html.contains("@media print"));
}

#[test]
fn every_section_is_expanded() {
    let plan = RecoveryPlan::default();
    let html = render_plan(&plan, "now");
    assert_eq!(html.matches("<details open>").count(), plan.sections.len());
    for section in &plan.sections {
        assert!(html.contains(&format!("<summary>{}</summary>", escape(&section.title))));
    }
}

#[test]
fn fields_print_label_and_value() {
    let mut plan = RecoveryPlan::default();
    recovery::set_field(&mut plan, "About Me", "Name", "Ann <A.> Smith").unwrap();
    recovery::set_field(&mut plan, "Daily Commitments", "Morning prayer", "yes").unwrap();
    let html = render_plan(&plan, "now");

    assert!(html.contains("<strong>Name:</strong> <span class=\"print-value\">Ann &lt;A.&gt; Smith</span>"));
    assert!(html.contains("<strong>Morning prayer:</strong> <span class=\"print-value\">Yes</span>"));
    assert!(html.contains(&format!("<strong>Evening reflection:</strong> <span class=\"print-value\">{BLANK}</span>")));
    assert!(!html.contains("Name *"));
}

#[test]
fn write_plan_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_FILE);
    write_plan(&RecoveryPlan::default(), "now", &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<h1>Recovery Plan</h1>"));
}

#[test]
fn write_plan_reports_path_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("plan.html");
    let err = write_plan(&RecoveryPlan::default(), "now", &path).unwrap_err();
    assert!(err.to_string().contains("plan.html"));
}

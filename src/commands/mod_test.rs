use std::io::{Read, Write};
use std::net::TcpListener;

use finder::{FinderError, RadiusMiles};
use widgets::checklist::GOALS;
use widgets::giving::{GOAL, RAISED};
use widgets::{StoreError, WidgetError};

use super::*;
use crate::cli::{ChecklistCommand, ChurchesCommand, GiveCommand, RecoveryCommand, SearchOutput};
use crate::config::AppConfig;
use crate::locate::config::LocateConfig;
use crate::services::finder::GEOCODE_FAILED;

fn temp_state() -> (tempfile::TempDir, AppState) {
    temp_state_with(LocateConfig::default())
}

fn temp_state_with(locate: LocateConfig) -> (tempfile::TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig { data_dir: dir.path().to_path_buf(), default_radius: RadiusMiles::default(), locate };
    let state = AppState::open(config).unwrap();
    (dir, state)
}

#[test]
fn short_id_truncates_uuids_only() {
    assert_eq!(short_id("0f8fad5b-d9cb-469f-a165-70867728950e"), "0f8fad5b");
    assert_eq!(short_id("abc"), "abc");
}

// =========================================================================
// storage round trips through commands
// =========================================================================

#[tokio::test]
async fn goals_add_and_toggle_persist() {
    let (_dir, state) = temp_state();
    dispatch(&state, Command::Goals(ChecklistCommand::Add { text: "Read Romans".into() })).await.unwrap();

    let goals = state.storage.load(&GOALS).unwrap();
    assert_eq!(goals.len(), 1);
    assert!(!goals[0].done);

    let id = goals[0].id[..8].to_owned();
    dispatch(&state, Command::Goals(ChecklistCommand::Toggle { id })).await.unwrap();
    assert!(state.storage.load(&GOALS).unwrap()[0].done);
}

#[tokio::test]
async fn giving_steps_and_rejects_zero_goal() {
    let (_dir, state) = temp_state();
    dispatch(&state, Command::Give(GiveCommand::Add)).await.unwrap();
    dispatch(&state, Command::Give(GiveCommand::Add)).await.unwrap();
    dispatch(&state, Command::Give(GiveCommand::Sub)).await.unwrap();
    assert_eq!(state.storage.load(&RAISED).unwrap(), 25);

    let err = dispatch(&state, Command::Give(GiveCommand::Goal { amount: 0 })).await.unwrap_err();
    assert!(matches!(err, CliError::Widget(WidgetError::Invalid { field: "goal", .. })));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(state.storage.load(&GOAL).unwrap(), 2000);
}

#[tokio::test]
async fn malformed_storage_errors_until_reset() {
    let (dir, state) = temp_state();
    std::fs::write(dir.path().join("goals.json"), "{not json").unwrap();

    let err = dispatch(&state, Command::Goals(ChecklistCommand::List)).await.unwrap_err();
    assert!(matches!(err, CliError::Store(StoreError::Malformed { ref key, .. }) if key == "goals"));

    dispatch(&state, Command::Reset { key: "goals".into() }).await.unwrap();
    dispatch(&state, Command::Goals(ChecklistCommand::List)).await.unwrap();
}

#[tokio::test]
async fn reset_rejects_unknown_key() {
    let (_dir, state) = temp_state();
    let err = dispatch(&state, Command::Reset { key: "passwords".into() }).await.unwrap_err();
    assert!(matches!(err, CliError::Store(StoreError::UnknownKey(_))));
}

#[tokio::test]
async fn recovery_print_writes_html() {
    let (dir, state) = temp_state();
    dispatch(
        &state,
        Command::Recovery(RecoveryCommand::Set { section: "About Me".into(), label: "Name".into(), value: "Ann".into() }),
    )
    .await
    .unwrap();

    let out = dir.path().join("plan.html");
    dispatch(&state, Command::Recovery(RecoveryCommand::Print { out: out.clone() })).await.unwrap();
    let html = std::fs::read_to_string(out).unwrap();
    assert!(html.contains("<strong>Name:</strong> <span class=\"print-value\">Ann</span>"));
}

#[tokio::test]
async fn unknown_tab_is_not_found() {
    let (_dir, state) = temp_state();
    let err = dispatch(&state, Command::Tab { name: Some("#nowhere".into()) }).await.unwrap_err();
    assert!(matches!(err, CliError::Widget(WidgetError::NotFound { .. })));
}

// =========================================================================
// churches --focus
// =========================================================================

/// Serve exactly one HTTP request on a local port with a canned reply.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        let header_end = loop {
            let n = stream.read(&mut buf).unwrap();
            request.extend_from_slice(&buf[..n]);
            if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
            if n == 0 {
                return;
            }
        };
        let headers = String::from_utf8_lossy(&request[..header_end]).to_ascii_lowercase();
        let length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while request.len() < header_end + length {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}/")
}

const KNOXVILLE: &str = r#"[{"lat":"35.96","lon":"-83.92","display_name":"Knoxville, Tennessee"}]"#;

fn city_search(focus: Option<usize>) -> Command {
    Command::Churches(ChurchesCommand::City {
        name: Some("Knoxville".into()),
        output: SearchOutput { radius: None, json: false, focus },
    })
}

fn locate_with(geocoder_url: String, overpass_url: String) -> LocateConfig {
    LocateConfig { geocoder_url, overpass_url, ..LocateConfig::default() }
}

#[tokio::test]
async fn focus_on_failed_geocode_reports_the_failure() {
    let geocoder = serve_once("500 Internal Server Error", "{}");
    let (_dir, state) = temp_state_with(locate_with(geocoder, "http://127.0.0.1:9/".into()));

    let err = dispatch(&state, city_search(Some(1))).await.unwrap_err();
    assert!(matches!(err, CliError::Search(_)));
    assert_eq!(err.to_string(), GEOCODE_FAILED);
}

#[tokio::test]
async fn focus_on_unknown_city_is_not_an_error() {
    let geocoder = serve_once("200 OK", "[]");
    let (_dir, state) = temp_state_with(locate_with(geocoder, "http://127.0.0.1:9/".into()));

    dispatch(&state, city_search(Some(1))).await.unwrap();
}

#[tokio::test]
async fn focus_on_empty_results_is_not_an_error() {
    let geocoder = serve_once("200 OK", KNOXVILLE);
    let overpass = serve_once("200 OK", r#"{"elements":[]}"#);
    let (_dir, state) = temp_state_with(locate_with(geocoder, overpass));

    dispatch(&state, city_search(Some(1))).await.unwrap();
}

#[tokio::test]
async fn focus_selects_within_results_and_reports_one_based_position() {
    const ONE_CHURCH: &str = r#"{"elements":[{"type":"node","id":1,"lat":35.97,"lon":-83.93,"tags":{"name":"First Baptist"}}]}"#;

    let (_dir, state) = temp_state_with(locate_with(serve_once("200 OK", KNOXVILLE), serve_once("200 OK", ONE_CHURCH)));
    dispatch(&state, city_search(Some(1))).await.unwrap();

    let (_dir, state) = temp_state_with(locate_with(serve_once("200 OK", KNOXVILLE), serve_once("200 OK", ONE_CHURCH)));
    let err = dispatch(&state, city_search(Some(3))).await.unwrap_err();
    assert!(matches!(err, CliError::Finder(FinderError::NoSuchResult(3))));
    assert_eq!(err.to_string(), "no result at position 3");
    assert_eq!(err.exit_code(), 2);
}

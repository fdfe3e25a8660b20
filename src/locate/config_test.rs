use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = LocateConfig::from_lookup(&lookup(&[])).unwrap();
    assert_eq!(cfg, LocateConfig::default());
    assert_eq!(cfg.geocoder_url, DEFAULT_GEOCODER_URL);
    assert_eq!(cfg.overpass_url, DEFAULT_OVERPASS_URL);
    assert_eq!(cfg.result_limit, 200);
    assert!(cfg.user_agent.starts_with("biblebelt/"));
    assert_eq!(cfg.timeouts, LocateTimeouts { request_secs: 25, connect_secs: 10 });
}

#[test]
fn parses_overrides() {
    let cfg = LocateConfig::from_lookup(&lookup(&[
        ("BIBLEBELT_GEOCODER_URL", "http://localhost:8080/search/"),
        ("BIBLEBELT_USER_AGENT", "test-agent"),
        ("BIBLEBELT_RESULT_LIMIT", "50"),
        ("BIBLEBELT_REQUEST_TIMEOUT_SECS", "5"),
        ("BIBLEBELT_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.geocoder_url, "http://localhost:8080/search");
    assert_eq!(cfg.user_agent, "test-agent");
    assert_eq!(cfg.result_limit, 50);
    assert_eq!(cfg.timeouts, LocateTimeouts { request_secs: 5, connect_secs: 2 });
}

#[test]
fn unparseable_numbers_fall_back() {
    let cfg = LocateConfig::from_lookup(&lookup(&[
        ("BIBLEBELT_RESULT_LIMIT", "lots"),
        ("BIBLEBELT_REQUEST_TIMEOUT_SECS", "-3"),
    ]))
    .unwrap();
    assert_eq!(cfg.result_limit, 200);
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn zero_limit_is_raised_to_one() {
    let cfg = LocateConfig::from_lookup(&lookup(&[("BIBLEBELT_RESULT_LIMIT", "0")])).unwrap();
    assert_eq!(cfg.result_limit, 1);
}

#[test]
fn blank_url_is_an_error() {
    let err = LocateConfig::from_lookup(&lookup(&[("BIBLEBELT_OVERPASS_URL", "  ")])).unwrap_err();
    assert!(matches!(err, LocateError::ConfigParse(msg) if msg.contains("BIBLEBELT_OVERPASS_URL")));
}

// Only this test touches `BIBLEBELT_USER_AGENT`.
#[test]
fn from_env_reads_process_environment() {
    unsafe { std::env::set_var("BIBLEBELT_USER_AGENT", "env-agent") };
    let cfg = LocateConfig::from_env().unwrap();
    unsafe { std::env::remove_var("BIBLEBELT_USER_AGENT") };
    assert_eq!(cfg.user_agent, "env-agent");
}

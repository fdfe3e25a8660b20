use std::collections::BTreeMap;
use std::sync::Mutex as StdMutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use finder::{Address, Place};
use tokio::sync::Notify;

use super::*;
use crate::locate::{GeocodeHit, LocateError};

fn chapel(id: &str, lat: f64, lon: f64) -> Place {
    Place {
        id: id.to_owned(),
        kind: "node".into(),
        name: format!("Chapel {id}"),
        coord: Some(Coord { lat, lon }),
        denomination: Some("baptist".into()),
        religion: Some("christian".into()),
        address: Address::default(),
        website: None,
        tags: BTreeMap::new(),
    }
}

fn hit(label: &str, lat: f64, lon: f64) -> GeocodeHit {
    GeocodeHit { coord: Coord { lat, lon }, label: label.to_owned() }
}

// =========================================================================
// Mock locators
// =========================================================================

#[derive(Default)]
struct MockLocator {
    hit: Option<GeocodeHit>,
    geocode_fails: bool,
    places: Vec<Place>,
    places_fail: bool,
    geocode_calls: AtomicUsize,
    place_radii: StdMutex<Vec<f64>>,
}

impl MockLocator {
    fn found(hit: GeocodeHit, places: Vec<Place>) -> Self {
        Self { hit: Some(hit), places, ..Self::default() }
    }
}

#[async_trait::async_trait]
impl Locator for MockLocator {
    async fn geocode(&self, _query: &str) -> Result<Option<GeocodeHit>, LocateError> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        if self.geocode_fails {
            return Err(LocateError::Status { status: 503, body: String::new() });
        }
        Ok(self.hit.clone())
    }

    async fn places_near(&self, _center: Coord, radius_meters: f64) -> Result<Vec<Place>, LocateError> {
        self.place_radii.lock().unwrap().push(radius_meters);
        if self.places_fail {
            return Err(LocateError::Request("connection reset".into()));
        }
        Ok(self.places.clone())
    }
}

/// Geocoding `slow` parks until `release` is notified; anything else
/// answers at once.
struct GatedLocator {
    slow: &'static str,
    entered: Notify,
    release: Notify,
    place_calls: AtomicUsize,
}

impl GatedLocator {
    fn new(slow: &'static str) -> Self {
        Self { slow, entered: Notify::new(), release: Notify::new(), place_calls: AtomicUsize::new(0) }
    }
}

#[async_trait::async_trait]
impl Locator for GatedLocator {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, LocateError> {
        if query == self.slow {
            self.entered.notify_one();
            self.release.notified().await;
            return Ok(Some(hit(query, 35.0, -85.0)));
        }
        Ok(Some(hit(query, 36.0, -84.0)))
    }

    async fn places_near(&self, center: Coord, _radius_meters: f64) -> Result<Vec<Place>, LocateError> {
        self.place_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![chapel("node/1", center.lat + 0.01, center.lon)])
    }
}

fn finder_with(locator: MockLocator) -> (Arc<MockLocator>, ChurchFinder) {
    let locator = Arc::new(locator);
    let finder = ChurchFinder::new(locator.clone(), RadiusMiles::default());
    (locator, finder)
}

// =========================================================================
// search_city
// =========================================================================

#[tokio::test]
async fn city_search_yields_ranked_results() {
    let (_, finder) = finder_with(MockLocator::found(
        hit("Knoxville, Tennessee", 35.96, -83.92),
        vec![chapel("node/far", 36.10, -83.92), chapel("node/near", 35.97, -83.92)],
    ));

    let state = finder.search_city("  Knoxville ").await.unwrap().unwrap();
    let SearchState::Results { view } = state else {
        panic!("expected results, got {state:?}");
    };
    assert_eq!(view.origin_label, "Knoxville, Tennessee");
    assert_eq!(view.rows[0].place_id, "node/near");
    assert_eq!(view.rows[1].place_id, "node/far");
}

#[tokio::test]
async fn blank_city_is_rejected_without_a_request() {
    let (locator, finder) = finder_with(MockLocator::default());
    assert_eq!(finder.search_city("   ").await.unwrap_err(), FinderError::EmptyQuery);
    assert_eq!(locator.geocode_calls.load(Ordering::SeqCst), 0);
    assert_eq!(finder.snapshot().await, SearchState::Idle);
}

#[tokio::test]
async fn unknown_city_is_not_found() {
    let (locator, finder) = finder_with(MockLocator::default());
    let state = finder.search_city("Atlantis").await.unwrap().unwrap();
    assert_eq!(state, SearchState::NotFound { query: "Atlantis".into() });
    assert!(locator.place_radii.lock().unwrap().is_empty());
}

#[tokio::test]
async fn geocode_failure_reports_geocode_stage() {
    let (_, finder) = finder_with(MockLocator { geocode_fails: true, ..MockLocator::default() });
    let state = finder.search_city("Knoxville").await.unwrap().unwrap();
    assert_eq!(state, SearchState::Error { stage: Stage::Geocode, message: GEOCODE_FAILED.into() });
}

#[tokio::test]
async fn place_failure_reports_places_stage() {
    let (_, finder) = finder_with(MockLocator {
        hit: Some(hit("Knoxville", 35.96, -83.92)),
        places_fail: true,
        ..MockLocator::default()
    });
    let state = finder.search_city("Knoxville").await.unwrap().unwrap();
    assert_eq!(state, SearchState::Error { stage: Stage::Places, message: PLACES_FAILED.into() });
}

#[tokio::test]
async fn no_places_is_empty() {
    let (_, finder) = finder_with(MockLocator::found(hit("Nowhere", 36.0, -84.0), Vec::new()));
    let state = finder.search_city("Nowhere").await.unwrap().unwrap();
    assert_eq!(state, SearchState::Empty { origin_label: "Nowhere".into(), radius_miles: 10 });
}

// =========================================================================
// search_near / set_radius
// =========================================================================

#[tokio::test]
async fn near_search_uses_radius_in_meters() {
    let (locator, finder) = finder_with(MockLocator::found(hit("unused", 0.0, 0.0), vec![chapel("node/1", 36.01, -84.0)]));
    let state = finder.search_near(Coord { lat: 36.0, lon: -84.0 }).await.unwrap();
    let SearchState::Results { view } = state else {
        panic!("expected results");
    };
    assert_eq!(view.origin_label, MY_LOCATION);
    assert_eq!(locator.geocode_calls.load(Ordering::SeqCst), 0);
    let radii = locator.place_radii.lock().unwrap().clone();
    assert_eq!(radii.len(), 1);
    assert!((radii[0] - 16_093.44).abs() < 1e-6);
}

#[tokio::test]
async fn radius_change_re_searches_last_origin() {
    let (locator, finder) = finder_with(MockLocator::found(hit("Knoxville", 35.96, -83.92), vec![chapel("node/1", 35.97, -83.92)]));
    finder.search_city("Knoxville").await.unwrap();

    let state = finder.set_radius(RadiusMiles::new(25).unwrap()).await.unwrap();
    let SearchState::Results { view } = state else {
        panic!("expected results");
    };
    assert_eq!(view.radius_miles, 25);
    assert_eq!(view.origin_label, "Knoxville");
    assert_eq!(locator.geocode_calls.load(Ordering::SeqCst), 1);
    assert_eq!(locator.place_radii.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn radius_change_without_origin_only_records() {
    let (locator, finder) = finder_with(MockLocator::default());
    let state = finder.set_radius(RadiusMiles::new(50).unwrap()).await.unwrap();
    assert_eq!(state, SearchState::Idle);
    assert_eq!(finder.radius().await.miles(), 50);
    assert!(locator.place_radii.lock().unwrap().is_empty());
}

// =========================================================================
// focus / clear
// =========================================================================

#[tokio::test]
async fn focus_returns_marker() {
    let (_, finder) = finder_with(MockLocator::found(hit("Knoxville", 35.96, -83.92), vec![chapel("node/1", 35.97, -83.92)]));
    assert!(finder.focus(0).await.is_err());
    finder.search_city("Knoxville").await.unwrap();
    let marker = finder.focus(0).await.unwrap();
    assert_eq!(marker.place_id, "node/1");
    assert_eq!(finder.focus(1).await.unwrap_err(), FinderError::NoSuchResult(1));
}

#[tokio::test]
async fn clear_returns_to_idle() {
    let (_, finder) = finder_with(MockLocator::found(hit("Knoxville", 35.96, -83.92), vec![chapel("node/1", 35.97, -83.92)]));
    finder.search_city("Knoxville").await.unwrap();
    finder.clear().await;
    assert_eq!(finder.snapshot().await, SearchState::Idle);
}

// =========================================================================
// Stale responses
// =========================================================================

#[tokio::test]
async fn slow_response_never_overwrites_newer_search() {
    let locator = Arc::new(GatedLocator::new("Slowtown"));
    let finder = Arc::new(ChurchFinder::new(locator.clone(), RadiusMiles::default()));

    let slow = tokio::spawn({
        let finder = finder.clone();
        async move { finder.search_city("Slowtown").await }
    });
    locator.entered.notified().await;

    let fast = finder.search_city("Knoxville").await.unwrap().unwrap();
    assert!(matches!(&fast, SearchState::Results { view } if view.origin_label == "Knoxville"));

    locator.release.notify_one();
    let slow = slow.await.unwrap().unwrap();
    assert!(slow.is_none());

    assert_eq!(finder.snapshot().await, fast);
    assert_eq!(locator.place_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn clear_drops_in_flight_search() {
    let locator = Arc::new(GatedLocator::new("Slowtown"));
    let finder = Arc::new(ChurchFinder::new(locator.clone(), RadiusMiles::default()));

    let slow = tokio::spawn({
        let finder = finder.clone();
        async move { finder.search_city("Slowtown").await }
    });
    locator.entered.notified().await;
    finder.clear().await;
    locator.release.notify_one();

    assert!(slow.await.unwrap().unwrap().is_none());
    assert_eq!(finder.snapshot().await, SearchState::Idle);
}

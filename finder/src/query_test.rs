use super::*;

fn knoxville() -> Coord {
    Coord::new(35.9606, -83.9207).unwrap()
}

#[test]
fn query_covers_nodes_ways_and_relations() {
    let q = places_of_worship(knoxville(), 8046.72, 200).unwrap();
    assert!(q.starts_with("[out:json][timeout:25];"));
    assert!(q.contains(r#"node["amenity"="place_of_worship"](around:8047,35.960600,-83.920700);"#));
    assert!(q.contains(r#"way["amenity"="place_of_worship"](around:8047,35.960600,-83.920700);"#));
    assert!(q.contains(r#"relation["amenity"="place_of_worship"](around:8047,35.960600,-83.920700);"#));
    assert!(q.ends_with("out center tags 200;"));
}

#[test]
fn query_rejects_non_positive_radius() {
    assert_eq!(places_of_worship(knoxville(), 0.0, 10), Err(FinderError::InvalidRadius(0.0)));
    assert!(places_of_worship(knoxville(), -5.0, 10).is_err());
    assert!(places_of_worship(knoxville(), f64::INFINITY, 10).is_err());
}

#[test]
fn query_limit_never_zero() {
    let q = places_of_worship(knoxville(), 1000.0, 0).unwrap();
    assert!(q.ends_with("out center tags 1;"));
}

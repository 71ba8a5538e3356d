use nalgebra::vector;
use plotzone::api::*;

fn square() -> BoundaryPolygon {
    BoundaryPolygon::from_tuples(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)])
}

#[test]
fn square_area_centroid_and_north_ray() {
    let sq = square();
    assert_eq!(polygon_area(&sq), Ok(10_000.0));
    let c = compute_centroid(&sq).unwrap();
    assert!((c - vector![50.0, 50.0]).norm() < 1e-9);
    let hit = intersect_ray(&sq, c, 0.0).unwrap();
    assert!((hit - vector![50.0, 0.0]).norm() < 1e-6);
}

#[test]
fn fine_raster_zone_sum_within_one_percent() {
    let poly = BoundaryPolygon::from_tuples(&[
        (120.0, 80.0),
        (430.0, 110.0),
        (470.0, 300.0),
        (350.0, 460.0),
        (260.0, 330.0),
        (90.0, 420.0),
    ]);
    let c = compute_centroid(&poly).unwrap();
    let areas = compute_zone_areas(&poly, Some(c), -7.5, 500, 500).unwrap();
    let shoelace = polygon_area(&poly).unwrap();
    assert!((areas.total() - shoelace).abs() / shoelace < 0.01);
}

#[test]
fn uniform_prakriti() {
    let r = aggregate_prakriti(&ZoneAreas([100.0; 16])).unwrap();
    assert_eq!(r.share(Prakriti::Fire).area, 600.0);
    assert_eq!(r.share(Prakriti::Water).area, 500.0);
    assert_eq!(r.share(Prakriti::Air).area, 500.0);
    assert!(r.label.starts_with('F'));
}

#[test]
fn failure_modes() {
    let two = BoundaryPolygon::from_tuples(&[(0.0, 0.0), (50.0, 50.0)]);
    assert!(matches!(
        compute_zone_areas(&two, Some(vector![10.0, 10.0]), 0.0, 100, 100),
        Err(Error::InsufficientGeometry(_))
    ));
    let collinear = BoundaryPolygon::from_tuples(&[(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]);
    assert_eq!(polygon_area(&collinear), Err(Error::DegeneratePolygon));
    assert_eq!(
        classify_balance_slice(&[]),
        Err(Error::InvalidAreaVector { got: 0 })
    );
    assert_eq!(
        aggregate_prakriti(&ZoneAreas::default()),
        Err(Error::ZeroPrakritiTotal)
    );
    assert_eq!(
        sector_definitions(f64::NEG_INFINITY).map(|_| ()),
        Err(Error::InvalidTilt(f64::NEG_INFINITY))
    );
}

#[test]
fn tilt_periodicity() {
    let sq = square();
    let c = Some(vector![50.0, 50.0]);
    let a0 = compute_zone_areas(&sq, c, 0.0, 120, 120).unwrap();
    let a360 = compute_zone_areas(&sq, c, 360.0, 120, 120).unwrap();
    assert_eq!(a0, a360);
}

#[test]
fn errors_render_readably() {
    assert_eq!(
        Error::InvalidPolygon { got: 2 }.to_string(),
        "polygon needs at least 3 points (got 2)"
    );
    assert_eq!(
        Error::InsufficientGeometry("center is not set").to_string(),
        "insufficient geometry for zone areas: center is not set"
    );
}

#[test]
fn tilted_plot_end_to_end() {
    // Wide rectangle: E/W beat N/S at tilt 0, and swap once north turns by 90 degrees.
    let rect = BoundaryPolygon::from_tuples(&[
        (0.0, 100.0),
        (400.0, 100.0),
        (400.0, 300.0),
        (0.0, 300.0),
    ]);
    let input = PlotInput::new(rect.clone(), 0.0, (400, 400));
    let r0 = analyze(&input, &AnalysisCfg::default()).unwrap();
    assert!(r0.zones[Zone::E] > r0.zones[Zone::N]);
    assert_eq!(r0.balance.remark(Zone::E), Remark::High);

    let input = PlotInput::new(rect, 90.0, (400, 400));
    let r90 = analyze(&input, &AnalysisCfg::default()).unwrap();
    assert!(r90.zones[Zone::N] > r90.zones[Zone::E]);
    assert_eq!(r90.zones[Zone::N], r0.zones[Zone::E]);
}

//! Property tests over synthetic boundaries and arbitrary area vectors.

use nalgebra::Vector2;
use plotzone::api::*;
use plotzone::geom::rand::{draw_boundary_radial, draw_convex_boundary, RadialCfg, ReplayToken};
use proptest::prelude::*;

fn dist_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let t = ((p - a).dot(&ab) / ab.norm_squared()).clamp(0.0, 1.0);
    (a + ab * t - p).norm()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn balance_lines_are_ordered(v in prop::collection::vec(0.0f64..1e6, 16)) {
        let r = classify_balance_slice(&v).unwrap();
        prop_assert!(r.lines.llob <= r.lines.lob);
        prop_assert!(r.lines.lob <= r.lines.ulob);
        for (zone, remark) in r.remarks {
            let a = v[zone.index()];
            match remark {
                Remark::High => prop_assert!(a > r.lines.ulob),
                Remark::Low => prop_assert!(a < r.lines.llob),
                Remark::Balanced => prop_assert!(a >= r.lines.llob && a <= r.lines.ulob),
            }
        }
    }

    #[test]
    fn prakriti_percentages_sum_to_100(v in prop::collection::vec(0.0f64..1e6, 16)) {
        let areas = ZoneAreas::from_slice(&v).unwrap();
        prop_assume!(areas.total() > 0.0);
        let r = aggregate_prakriti(&areas).unwrap();
        let pct: f64 = r.groups.iter().map(|g| g.percentage).sum();
        prop_assert!((pct - 100.0).abs() < 1e-6);
        let top = r.share(r.ranked[0]).area;
        prop_assert!(r.groups.iter().all(|g| g.area <= top));
        prop_assert_eq!(r.label.len(), 5);
    }

    #[test]
    fn convex_boundary_always_hit_from_centroid(
        seed in any::<u64>(),
        index in 0u64..1000,
        angle in -720.0f64..720.0,
    ) {
        let poly = draw_convex_boundary(RadialCfg::default(), ReplayToken { seed, index });
        prop_assume!(poly.is_some());
        let poly = poly.unwrap();
        let c = compute_centroid(&poly).unwrap();
        let hit = intersect_ray(&poly, c, angle);
        prop_assert!(hit.is_some());
        let hit = hit.unwrap();
        let on_edge = poly
            .edges()
            .map(|(a, b)| dist_to_segment(hit, a, b))
            .fold(f64::INFINITY, f64::min);
        prop_assert!(on_edge < 1e-6);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn zone_sum_tracks_shoelace_area(seed in any::<u64>(), tilt in -180.0f64..180.0) {
        let cfg = RadialCfg::default();
        let poly = draw_boundary_radial(cfg, ReplayToken { seed, index: 0 });
        let (w, h) = cfg.raster_extent();
        prop_assert!(w >= 500 && h >= 500);
        let areas = compute_zone_areas(&poly, Some(cfg.center), tilt, w, h).unwrap();
        let shoelace = polygon_area(&poly).unwrap();
        prop_assert!((areas.total() - shoelace).abs() / shoelace < 0.01);
    }

    #[test]
    fn full_turn_reproduces_zone_areas(seed in any::<u64>(), quarter_steps in -1440i32..1440) {
        let cfg = RadialCfg { base_radius: 40.0, center: Vector2::new(60.0, 60.0), ..RadialCfg::default() };
        let poly = draw_boundary_radial(cfg, ReplayToken { seed, index: 1 });
        let (w, h) = cfg.raster_extent();
        let tilt = quarter_steps as f64 * 0.25;
        let a = compute_zone_areas(&poly, Some(cfg.center), tilt, w, h).unwrap();
        let b = compute_zone_areas(&poly, Some(cfg.center), tilt + 360.0, w, h).unwrap();
        prop_assert_eq!(a, b);
    }
}

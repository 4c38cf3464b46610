// Host-side tests for the cone/sphere samplers and photo placement.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_web::core::photos::random_id;
use tree_web::core::sampler::{
    cone_point, cone_radius_at, photo_placement, sphere_point, tree_cloud,
};
use tree_web::core::{PhotoAlbum, CHAOS_RADIUS, TREE_HEIGHT, TREE_RADIUS};

#[test]
fn cone_points_stay_on_the_surface() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5_000 {
        let p = cone_point(&mut rng, TREE_HEIGHT, TREE_RADIUS);
        assert!(p.y >= -7.0 && p.y <= 7.0, "y out of range: {}", p.y);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        let expected = cone_radius_at(p.y, TREE_HEIGHT, TREE_RADIUS);
        assert!((r - expected).abs() < 1e-4, "r={r} expected={expected}");
    }
}

#[test]
fn cone_radius_is_full_at_base_and_zero_at_apex() {
    assert!((cone_radius_at(-7.0, TREE_HEIGHT, TREE_RADIUS) - 5.5).abs() < 1e-6);
    assert!(cone_radius_at(7.0, TREE_HEIGHT, TREE_RADIUS).abs() < 1e-6);
    assert!((cone_radius_at(0.0, TREE_HEIGHT, TREE_RADIUS) - 2.75).abs() < 1e-6);
}

#[test]
fn sphere_points_fill_the_volume_uniformly() {
    let mut rng = StdRng::seed_from_u64(11);
    let n = 20_000;
    let mut inner = 0;
    for _ in 0..n {
        let p = sphere_point(&mut rng, CHAOS_RADIUS);
        let d = p.length();
        assert!(d <= CHAOS_RADIUS * 1.0001);
        // Half the volume lies inside radius R / cbrt(2).
        if d < CHAOS_RADIUS / 2f32.cbrt() {
            inner += 1;
        }
    }
    let frac = inner as f32 / n as f32;
    assert!((frac - 0.5).abs() < 0.02, "inner fraction {frac}");
}

#[test]
fn sphere_points_are_not_biased_toward_poles() {
    let mut rng = StdRng::seed_from_u64(3);
    let n = 20_000;
    // Uniform directions put a third of the points in |cos(phi)| < 1/3.
    let band = (0..n)
        .map(|_| sphere_point(&mut rng, 1.0))
        .filter(|p| p.length() > 1e-3 && (p.z / p.length()).abs() < 1.0 / 3.0)
        .count();
    let frac = band as f32 / n as f32;
    assert!((frac - 1.0 / 3.0).abs() < 0.02, "equatorial fraction {frac}");
}

#[test]
fn photo_faces_outward_with_small_roll() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..500 {
        let pl = photo_placement(&mut rng, TREE_HEIGHT, TREE_RADIUS * 1.1);
        assert_eq!(pl.rotation.x, 0.0);
        assert!((pl.rotation.y - pl.position.x.atan2(pl.position.z)).abs() < 1e-6);
        assert!(pl.rotation.z.abs() <= 0.2);
        assert!(pl.position.y.abs() <= 7.0);
    }
}

#[test]
fn tree_cloud_has_foliage_then_ornaments() {
    let mut rng = StdRng::seed_from_u64(1);
    let cloud = tree_cloud(&mut rng, 300, 20, TREE_HEIGHT, TREE_RADIUS, CHAOS_RADIUS);
    assert_eq!(cloud.len(), 320);
    for p in &cloud {
        assert!(p.chaos_pos.length() <= CHAOS_RADIUS * 1.0001);
        assert!(p.target_pos.y.abs() <= TREE_HEIGHT * 0.5);
        assert!(p.size > 0.0);
    }
    let ornament_size = cloud[300].size;
    assert!(cloud[300..].iter().all(|p| p.size == ornament_size));
    assert!(cloud[..300].iter().all(|p| p.size < ornament_size));
}

#[test]
fn album_keeps_the_newest_sixteen() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut album = PhotoAlbum::new(16);
    let first: Vec<String> = (0..10).map(|i| format!("blob:{i}")).collect();
    assert!(album
        .add_batch(&mut rng, first, TREE_HEIGHT, TREE_RADIUS)
        .is_empty());

    let second: Vec<String> = (10..20).map(|i| format!("blob:{i}")).collect();
    let evicted = album.add_batch(&mut rng, second, TREE_HEIGHT, TREE_RADIUS);
    assert_eq!(album.len(), 16);
    let evicted_urls: Vec<_> = evicted.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(evicted_urls, ["blob:0", "blob:1", "blob:2", "blob:3"]);
    let kept: Vec<_> = album.iter().map(|p| p.url.clone()).collect();
    assert_eq!(kept.first().map(String::as_str), Some("blob:4"));
    assert_eq!(kept.last().map(String::as_str), Some("blob:19"));
}

#[test]
fn oversized_batch_keeps_its_tail() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut album = PhotoAlbum::new(16);
    let urls: Vec<String> = (0..40).map(|i| format!("u{i}")).collect();
    let evicted = album.add_batch(&mut rng, urls, TREE_HEIGHT, TREE_RADIUS);
    assert_eq!(evicted.len(), 24);
    assert_eq!(album.iter().next().map(|p| p.url.as_str()), Some("u24"));
}

#[test]
fn ids_are_short_base36() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..100 {
        let id = random_id(&mut rng);
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}

use approx::assert_abs_diff_eq;

use marquee_core::geometry::{Bounds, Point};
use marquee_core::io::crop::CropRect;
use marquee_core::mapper::{
    pointer_to_surface, scale_factor, scaled_dimensions, to_image_space, to_surface_space,
    ImageMetrics, PointerOffsets, SurfaceMetrics,
};

#[test]
fn test_scale_factor_downscales_to_tighter_axis() {
    let f = scale_factor(ImageMetrics::new(800, 400), SurfaceMetrics::new(400.0, 300.0));
    assert_abs_diff_eq!(f, 0.5);

    let f = scale_factor(ImageMetrics::new(300, 900), SurfaceMetrics::new(400.0, 300.0));
    assert_abs_diff_eq!(f, 1.0 / 3.0, epsilon = 1e-6);
}

#[test]
fn test_scale_factor_never_upscales() {
    let sizes = [
        (10, 10, 400.0, 300.0),
        (400, 300, 400.0, 300.0),
        (1, 5000, 4000.0, 5001.0),
        (4000, 3000, 400.0, 300.0),
        (1, 1, 1e6, 1e6),
    ];
    for (iw, ih, sw, sh) in sizes {
        let f = scale_factor(ImageMetrics::new(iw, ih), SurfaceMetrics::new(sw, sh));
        assert!(f <= 1.0, "factor {f} for {iw}x{ih} on {sw}x{sh}");
        assert!(f > 0.0);
    }
}

#[test]
fn test_scale_factor_empty_image_is_one() {
    let f = scale_factor(ImageMetrics::new(0, 0), SurfaceMetrics::new(400.0, 300.0));
    assert_eq!(f, 1.0);
}

#[test]
fn test_scaled_dimensions_centered() {
    let dims = scaled_dimensions(ImageMetrics::new(800, 400), SurfaceMetrics::new(400.0, 300.0));
    assert_abs_diff_eq!(dims.x, 0.0);
    assert_abs_diff_eq!(dims.y, 50.0);
    assert_abs_diff_eq!(dims.w, 400.0);
    assert_abs_diff_eq!(dims.h, 200.0);
    assert_abs_diff_eq!(dims.x2, dims.x + dims.w);
    assert_abs_diff_eq!(dims.y2, dims.y + dims.h);
}

#[test]
fn test_scaled_dimensions_small_image_is_native_size() {
    let dims = scaled_dimensions(ImageMetrics::new(100, 50), SurfaceMetrics::new(400.0, 300.0));
    assert_abs_diff_eq!(dims.w, 100.0);
    assert_abs_diff_eq!(dims.h, 50.0);
    assert_abs_diff_eq!(dims.x, (400.0 - 100.0) / 2.0);
    assert_abs_diff_eq!(dims.y, (300.0 - 50.0) / 2.0);
}

#[test]
fn test_to_image_space_removes_offset_and_scale() {
    let dims = scaled_dimensions(ImageMetrics::new(800, 400), SurfaceMetrics::new(400.0, 300.0));
    let bounds = Bounds::normalized(50.0, 60.0, 100.0, 80.0);
    let rect = to_image_space(&bounds, &dims, ImageMetrics::new(800, 400), 0.5, false);
    assert_abs_diff_eq!(rect.x, 100.0);
    assert_abs_diff_eq!(rect.y, 20.0);
    assert_abs_diff_eq!(rect.w, 200.0);
    assert_abs_diff_eq!(rect.h, 160.0);
}

#[test]
fn test_to_image_space_floor_truncates_each_field() {
    let dims = scaled_dimensions(ImageMetrics::new(300, 300), SurfaceMetrics::new(100.0, 100.0));
    let bounds = Bounds::normalized(10.9, 20.5, 33.3, 33.3);
    let factor = 1.0 / 3.0;
    let exact = to_image_space(&bounds, &dims, ImageMetrics::new(300, 300), factor, false);
    let floored = to_image_space(&bounds, &dims, ImageMetrics::new(300, 300), factor, true);

    assert_eq!(floored.x, exact.x.floor());
    assert_eq!(floored.y, exact.y.floor());
    assert_eq!(floored.w, exact.w.floor());
    assert_eq!(floored.h, exact.h.floor());
}

#[test]
fn test_to_image_space_clips_to_image() {
    let image = ImageMetrics::new(800, 400);
    let dims = scaled_dimensions(image, SurfaceMetrics::new(400.0, 300.0));

    // Starts left of and above the image, runs past its right and bottom.
    let bounds = Bounds::normalized(-20.0, 30.0, 500.0, 260.0);
    let rect = to_image_space(&bounds, &dims, image, 0.5, false);
    assert_eq!(rect, CropRect { x: 0.0, y: 0.0, w: 800.0, h: 400.0 });

    // Entirely outside: empty, not negative.
    let outside = Bounds::normalized(-100.0, 60.0, 50.0, 20.0);
    let rect = to_image_space(&outside, &dims, image, 0.5, true);
    assert_eq!((rect.x, rect.w), (0.0, 0.0));
}

#[test]
fn test_fit_shrinks_and_slides_into_image() {
    let dims = scaled_dimensions(ImageMetrics::new(800, 400), SurfaceMetrics::new(200.0, 300.0));
    // factor 0.25: image drawn at (0, 100)-(200, 200).
    let fitted = dims.fit(&Bounds::normalized(0.0, 50.0, 400.0, 200.0));
    assert_eq!(fitted, Bounds::normalized(0.0, 100.0, 200.0, 100.0));

    let fitted = dims.fit(&Bounds::normalized(180.0, 190.0, 40.0, 30.0));
    assert_eq!(fitted, Bounds::normalized(160.0, 170.0, 40.0, 30.0));
}

#[test]
fn test_round_trip_through_surface_space() {
    let image = ImageMetrics::new(1200, 900);
    for surface in [
        SurfaceMetrics::new(400.0, 300.0),
        SurfaceMetrics::new(1200.0, 900.0),
        SurfaceMetrics::new(640.0, 900.0),
    ] {
        let factor = scale_factor(image, surface);
        let dims = scaled_dimensions(image, surface);
        let r = CropRect { x: 120.0, y: 48.0, w: 300.0, h: 240.0 };

        let back = to_image_space(&to_surface_space(&r, &dims, factor), &dims, image, factor, false);
        assert_abs_diff_eq!(back.x, r.x, epsilon = 1e-2);
        assert_abs_diff_eq!(back.y, r.y, epsilon = 1e-2);
        assert_abs_diff_eq!(back.w, r.w, epsilon = 1e-2);
        assert_abs_diff_eq!(back.h, r.h, epsilon = 1e-2);
    }
}

#[test]
fn test_pointer_to_surface_subtracts_all_offsets() {
    let offsets = PointerOffsets {
        ancestor: Point::new(100.0, 40.0),
        border: Point::new(2.0, 2.0),
        padding: Point::new(8.0, 4.0),
        document: Point::new(0.0, 30.0),
    };
    let p = pointer_to_surface(Point::new(160.0, 126.0), Some(&offsets));
    assert_eq!(p, Point::new(50.0, 50.0));
}

#[test]
fn test_pointer_to_surface_without_offsets_is_identity() {
    let p = pointer_to_surface(Point::new(12.5, -3.0), None);
    assert_eq!(p, Point::new(12.5, -3.0));
}

use pixel_buffer::easing::{interp_linear_rgba, CurveFn};
use pixel_buffer::{EasingCurve, PixelBuffer, ResizeError, Rgba};

const CURVES: [EasingCurve; 3] = [
    EasingCurve::Linear,
    EasingCurve::Ease5,
    EasingCurve::Bezier5,
];

#[test]
fn sample_at_integer_coordinates() {
    let buffer = testing::numbered(6, 5);
    for curve in CURVES {
        let func = curve.curve_func();
        for y in 0..5 {
            for x in 0..6 {
                let sampled = buffer.sample_with(x as f64, y as f64, Some(func));
                assert_eq!(sampled, buffer[(x, y)], "{curve:?} ({x}, {y})");
            }
        }
    }
    assert_eq!(buffer.sample(2., 3.), buffer[(2, 3)]);
    assert_eq!(buffer.sample_with(5., 4., None), buffer[(5, 4)]);
}

#[test]
fn sample_clamps_to_edges() {
    let buffer = testing::numbered(4, 3);
    assert_eq!(buffer.sample(-10., -0.5), buffer[(0, 0)]);
    assert_eq!(buffer.sample(3.7, 2.2), buffer[(3, 2)]);
    assert_eq!(buffer.sample(1e300, -1e300), buffer[(3, 0)]);
    assert_eq!(buffer.sample_with(-2., 1., None), buffer[(0, 1)]);
    // Clamped neighbours have the same color, so the result doesn't depend on t
    assert_eq!(buffer.sample_with(3.5, 1., None), buffer[(3, 1)]);
}

#[test]
fn sample_infinite_coordinates_gives_edge_pixels() {
    let buffer = testing::numbered(4, 3);
    assert_eq!(buffer.sample(f64::INFINITY, 0.), buffer[(3, 0)]);
    assert_eq!(buffer.sample(f64::INFINITY, 0.), Rgba::new(3, 0, 21, 200));
    assert_eq!(buffer.sample_with(f64::NEG_INFINITY, 1., None), buffer[(0, 1)]);
    assert_eq!(
        buffer.sample(f64::INFINITY, f64::NEG_INFINITY),
        buffer[(3, 0)]
    );
    assert_eq!(
        buffer.sample_with(f64::NEG_INFINITY, f64::INFINITY, Some(EasingCurve::Bezier5.curve_func())),
        buffer[(0, 2)]
    );
    // NaN has no nearest pixel, only absence of panic is required
    buffer.sample(f64::NAN, 1.);
}

#[test]
fn sample_uses_curve() {
    let pixels = vec![Rgba::rgb(0, 0, 0), Rgba::rgb(200, 0, 0)];
    let buffer = PixelBuffer::from_pixels(2, 1, pixels).unwrap();

    let linear = buffer.sample_with(0.2, 0., None);
    let ease5 = buffer.sample_with(0.2, 0., Some(EasingCurve::Ease5.curve_func()));
    let bezier5 = buffer.sample_with(0.2, 0., Some(EasingCurve::Bezier5.curve_func()));
    assert_eq!(linear, Rgba::rgb(40, 0, 0));
    // 200 * ease5(0.2) = 11.584
    assert_eq!(ease5, Rgba::rgb(12, 0, 0));
    // 200 * 16 * 0.2^5 = 1.024
    assert_eq!(bezier5, Rgba::rgb(1, 0, 0));

    // Default curve is Ease5
    assert_eq!(buffer.sample(0.2, 0.), ease5);

    // Custom curve
    let step: CurveFn = &|c0, c1, t| if t < 0.1 { c0 } else { c1 };
    assert_eq!(buffer.sample_with(0.05, 0., Some(step)), buffer[(0, 0)]);
    assert_eq!(buffer.sample_with(0.15, 0., Some(step)), buffer[(1, 0)]);
    let squared: CurveFn = &|c0, c1, t| interp_linear_rgba(c0, c1, t * t);
    assert_eq!(
        buffer.sample_with(0.5, 0., Some(squared)),
        Rgba::rgb(50, 0, 0)
    );
}

#[test]
fn resize_into_same_size_is_identity() {
    let src = testing::gradient(13, 7);
    for curve in [None, Some(EasingCurve::Bezier5.curve_func())] {
        let mut buffer = src.clone();
        buffer.resize_with(13, 7, curve).unwrap();
        assert_eq!(buffer, src);
    }
}

#[test]
fn resize_keeps_corners() {
    let src = testing::numbered(9, 6);
    for (width, height) in [(3, 2), (17, 11), (9, 1), (1, 6), (40, 3)] {
        for curve in CURVES {
            let mut buffer = src.clone();
            buffer
                .resize_with(width, height, Some(curve.curve_func()))
                .unwrap();
            assert_eq!(buffer.dimensions(), (width, height));
            let (w, h) = (width - 1, height - 1);
            assert_eq!(buffer[(0, 0)], src[(0, 0)]);
            if width > 1 {
                assert_eq!(buffer[(w, 0)], src[(8, 0)]);
            }
            if height > 1 {
                assert_eq!(buffer[(0, h)], src[(0, 5)]);
            }
            if width > 1 && height > 1 {
                assert_eq!(buffer[(w, h)], src[(8, 5)]);
            }
        }
    }
}

#[test]
fn downscale_by_integer_factor_picks_source_pixels() {
    let src = testing::numbered(9, 9);
    let mut buffer = src.clone();
    buffer.resize(5, 3).unwrap();
    for y in 0..3 {
        for x in 0..5 {
            assert_eq!(buffer[(x, y)], src[(x * 2, y * 4)], "({x}, {y})");
        }
    }
}

#[test]
fn upscale_blends_neighbours() {
    let pixels = vec![Rgba::rgb(0, 0, 0), Rgba::rgb(100, 200, 40)];
    let mut buffer = PixelBuffer::from_pixels(2, 1, pixels).unwrap();
    buffer.resize(5, 2).unwrap();
    let expected = [
        Rgba::rgb(0, 0, 0),
        Rgba::rgb(25, 50, 10),
        Rgba::rgb(50, 100, 20),
        Rgba::rgb(75, 150, 30),
        Rgba::rgb(100, 200, 40),
    ];
    for row in buffer.rows() {
        assert_eq!(row, expected);
    }
}

#[test]
fn resize_single_pixel() {
    let mut buffer = PixelBuffer::filled(1, 1, Rgba::new(9, 8, 7, 6));
    buffer.resize(4, 3).unwrap();
    assert!(buffer.pixels().iter().all(|&p| p == Rgba::new(9, 8, 7, 6)));

    buffer.resize(1, 1).unwrap();
    assert_eq!(buffer.pixels(), [Rgba::new(9, 8, 7, 6)]);
}

#[test]
fn gradient_resize_checksum_is_stable() {
    let mut buffer = testing::gradient(64, 64);
    buffer.resize(128, 32).unwrap();
    let [r, g, b, a] = testing::image_checksum(&buffer);
    // Horizontal and vertical gradients stay linear after resizing
    assert!((r as f64 / (128. * 32.) - 127.5).abs() < 2.);
    assert!((g as f64 / (128. * 32.) - 127.5).abs() < 2.);
    assert_eq!(b, 64 * 128 * 32);
    assert_eq!(a, 255 * 128 * 32);
}

#[test]
fn resize_errors_leave_buffer_untouched() {
    let src = testing::numbered(4, 4);
    let mut buffer = src.clone();
    assert_eq!(buffer.resize(0, 4), Err(ResizeError::ZeroDimension));
    assert_eq!(buffer.resize(4, 0), Err(ResizeError::ZeroDimension));
    assert_eq!(buffer, src);

    let mut empty = PixelBuffer::default();
    assert_eq!(empty.resize(2, 2), Err(ResizeError::EmptySource));
    let mut empty = PixelBuffer::new(0, 3);
    assert_eq!(empty.resize(2, 2), Err(ResizeError::EmptySource));
    assert_eq!(empty.dimensions(), (0, 3));
}

#[test]
fn resize_with_custom_curve() {
    let mut buffer = testing::numbered(3, 3);
    let nearest: CurveFn = &|c0, c1, t| if t < 0.5 { c0 } else { c1 };
    let src = buffer.clone();
    buffer.resize_with(5, 5, Some(nearest)).unwrap();
    // (1, 1) is mapped into (0.5, 0.5) of the source
    assert_eq!(buffer[(1, 1)], src[(1, 1)]);
    assert_eq!(buffer[(2, 2)], src[(1, 1)]);
    assert_eq!(buffer[(3, 0)], src[(2, 0)]);
}

#[test]
fn resize_matches_per_pixel_sampling() {
    // Big enough to be split into parts when resizing in a thread pool
    let src = testing::gradient(200, 300);
    let (width, height) = (517u32, 433u32);
    for curve in CURVES {
        let func = curve.curve_func();
        let mut buffer = src.clone();
        buffer.resize_with(width, height, Some(func)).unwrap();
        for y in 0..height {
            let src_y = y as f64 * 299. / (height - 1) as f64;
            for x in 0..width {
                let src_x = x as f64 * 199. / (width - 1) as f64;
                assert_eq!(
                    buffer[(x, y)],
                    src.sample_with(src_x, src_y, Some(func)),
                    "{curve:?} ({x}, {y})"
                );
            }
        }
    }
}

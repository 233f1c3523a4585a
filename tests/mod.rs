mod pattern;

use raster_scan::*;

#[test]
fn end_to_end() -> anyhow::Result<()> {
    let descriptor = ScanDescriptor::new((0., 0.), (10., 10.), Resolution::PixelsPerRow(5), 1.)?
        .with_pattern(ScanPattern::Ramp);
    assert_eq!(5, descriptor.x_pixels());
    assert_eq!(5, descriptor.y_pixels());
    assert_eq!(25, descriptor.total_pixels());
    assert_eq!(1, descriptor.ticks_per_pixel(1000.));

    let mut scan = RasterScan::new(descriptor);
    let chunk = scan.next_chunk(1000., 1 << 16)?.expect("scan is not complete");
    assert_eq!(25, chunk.len());
    assert_eq!(0., chunk.x()[0]);
    assert!(scan.at_end());
    assert!(scan.next_chunk(1000., 1 << 16)?.is_none());

    Ok(())
}

#[test]
fn invalid_sampling_frequency() -> anyhow::Result<()> {
    let mut scan = RasterScan::new(ScanDescriptor::new(
        (0., 0.),
        (10., 10.),
        Resolution::PixelsPerRow(5),
        1.,
    )?);

    assert_eq!(
        Err(ScanError::InvalidSamplingFrequency(f64::INFINITY)),
        scan.next_chunk(f64::INFINITY, 16)
    );
    assert_eq!(0, scan.current_pixel_index());

    Ok(())
}

#[test]
fn buffer_too_small() -> anyhow::Result<()> {
    let mut scan = RasterScan::new(ScanDescriptor::new(
        (0., 0.),
        (10., 10.),
        Resolution::PixelsPerRow(5),
        2.,
    )?);

    let err = scan.next_chunk(1000., 1).unwrap_err();
    assert_eq!(
        ScanError::BufferTooSmall {
            required: 2,
            available: 1
        },
        err
    );
    assert_eq!(
        "Buffer must hold at least 2 samples, but only 1 are available",
        err.to_string()
    );
    assert!(!scan.at_end());

    Ok(())
}

use approx::assert_relative_eq;

use raster_scan::*;

fn chunk(pattern: ScanPattern) -> anyhow::Result<VoltageChunk> {
    let descriptor = ScanDescriptor::new((1., 2.), (4., 4.), Resolution::PixelsPerRow(2), 4.)?
        .with_pattern(pattern);
    let mut scan = RasterScan::new(descriptor);
    Ok(scan.next_chunk(1000., 1024)?.expect("scan is not complete"))
}

#[test]
fn step_is_constant_within_pixel() -> anyhow::Result<()> {
    let chunk = chunk(ScanPattern::Step)?;
    assert_eq!(4, chunk.ticks_per_pixel());
    (0..chunk.pixels()).try_for_each(|i| -> anyhow::Result<()> {
        let (x, y) = chunk.pixel(i).ok_or_else(|| anyhow::anyhow!("missing pixel {i}"))?;
        assert!(x.iter().all(|&v| v == x[0]));
        assert!(y.iter().all(|&v| v == y[0]));
        Ok(())
    })?;

    let (x, y) = chunk.pixel(0).expect("first pixel");
    assert_relative_eq!(1.25, x[0]);
    assert_relative_eq!(2.25, y[0]);

    Ok(())
}

#[test]
fn diagonal_increases_both_axes() -> anyhow::Result<()> {
    let chunk = chunk(ScanPattern::Diagonal)?;
    let dur_step = 2. / 4.;
    (0..chunk.pixels()).for_each(|i| {
        let (x, y) = chunk.pixel(i).expect("pixel in range");
        x.windows(2).zip(y.windows(2)).for_each(|(x, y)| {
            assert!(x[1] > x[0]);
            assert!(y[1] > y[0]);
            assert_relative_eq!(dur_step, x[1] - x[0]);
            assert_relative_eq!(dur_step, y[1] - y[0]);
        });
    });
    Ok(())
}

#[test]
fn ramp_increases_x_only() -> anyhow::Result<()> {
    let chunk = chunk(ScanPattern::Ramp)?;
    let dur_step = 2. / 4.;
    (0..chunk.pixels()).for_each(|i| {
        let (x, y) = chunk.pixel(i).expect("pixel in range");
        x.windows(2).for_each(|x| assert_relative_eq!(dur_step, x[1] - x[0]));
        assert!(y.iter().all(|&v| v == y[0]));
    });

    let (x, y) = chunk.pixel(0).expect("first pixel");
    assert_eq!(1., x[0]);
    assert_relative_eq!(2.25, y[0]);
    Ok(())
}

#[rstest::rstest]
#[case(ScanPattern::Step)]
#[case(ScanPattern::Ramp)]
#[case(ScanPattern::Diagonal)]
#[test]
fn samples_stay_inside_field(#[case] pattern: ScanPattern) -> anyhow::Result<()> {
    let chunk = chunk(pattern)?;
    assert!(chunk.iter().all(|(x, y)| (1.0..5.0).contains(&x) && (2.0..6.0).contains(&y)));
    Ok(())
}

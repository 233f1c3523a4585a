use anyhow::Result;

use raster_scan::*;

use textplots::{Chart, Plot, Shape};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sampling_frequency = 10e3;
    let descriptor = ScanDescriptor::new((-1., -1.), (2., 2.), Resolution::PixelsPerRow(8), 2.)?
        .with_pattern(ScanPattern::Ramp);
    println!(
        "{}x{} pixels, {:?}, {} samples",
        descriptor.x_pixels(),
        descriptor.y_pixels(),
        descriptor.scan_duration(),
        descriptor.total_output_samples(sampling_frequency)
    );

    let mut scan = RasterScan::new(descriptor).with_option(GeneratorOption {
        print_progress: true,
        ..Default::default()
    });

    let mut x = Vec::new();
    let mut y = Vec::new();
    for chunk in scan.chunks(sampling_frequency, 256) {
        let chunk = chunk?;
        chunk
            .times()
            .into_iter()
            .zip(chunk.iter())
            .for_each(|(t, (vx, vy))| {
                x.push((t as f32, vx as f32));
                y.push((t as f32, vy as f32));
            });
    }

    let end = scan.descriptor().scan_duration().as_secs_f32();
    println!("x");
    Chart::new(300, 40, 0.0, end)
        .lineplot(&Shape::Lines(&x))
        .display();
    println!("y");
    Chart::new(300, 40, 0.0, end)
        .lineplot(&Shape::Lines(&y))
        .display();

    #[cfg(feature = "polars")]
    {
        scan.reset();
        if let Some(chunk) = scan.next_chunk(sampling_frequency, 64)? {
            dbg!(chunk.to_dataframe());
        }
    }

    Ok(())
}

//! Draws a ring of stars, each a copy of one cached composition.
//!
//! Run: `RUST_LOG=debug cargo run --example star -- star.png`

use std::f64::consts::PI;

use raster::prelude::*;

fn star(radius: f64) -> Vec<Point> {
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { radius * 0.4 };
            let angle = f64::from(i) * PI / 5.0;
            Point::new((radius + r * angle.sin()) as i32, (radius - r * angle.cos()) as i32)
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let path = std::env::args().nth(1).unwrap_or_else(|| "star.png".to_string());

    let mut canvas = Framebuffer::new(600, 600)?;
    canvas.clear(Rgba::BLACK);

    let mut star_shape = Composition::new(
        Point::ORIGIN,
        vec![Box::new(FilledPolygon::new(star(40.0), Rgba::WHITE, Rgba::RED))],
    );
    for step in 0..8 {
        let angle = f64::from(step) * 45.0;
        let (sin, cos) = (angle * PI / 180.0).sin_cos();
        star_shape.position = Point::new((260.0 + 200.0 * cos) as i32, (260.0 + 200.0 * sin) as i32);
        star_shape.transform = Transform::rotate(angle);
        star_shape.draw(&mut canvas);
    }

    PngEncoder::write_to_file(&canvas, &path)?;
    log::info!("wrote {path}");
    Ok(())
}

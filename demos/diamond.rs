//! Draws a square with a circle inside it, and a rotated diamond next to it.
//!
//! Run: `RUST_LOG=debug cargo run --example diamond -- diamond.png`

use raster::prelude::*;

fn main() -> Result<()> {
    env_logger::init();
    let path = std::env::args().nth(1).unwrap_or_else(|| "diamond.png".to_string());

    let square_and_circle = Composition::new(
        Point::new(50, 50),
        vec![
            Box::new(FilledRectangle::new(Point::ORIGIN, 300, 300, Rgba::GREEN, Rgba::GREEN)),
            Box::new(Circle::new(Point::new(150, 150), 150, Rgba::MAROON)),
        ],
    );

    let diamond = FilledPolygon::new(
        [(0, 100), (100, 0), (200, 100), (100, 200)].map(Point::from),
        Rgba::WHITE,
        Rgba::BLUE,
    );
    let rotated = Composition::new(Point::new(500, 200), vec![Box::new(diamond)])
        .with_transform(Transform::rotate(-30.0));

    let mut canvas = Framebuffer::new(800, 400)?;
    canvas.clear(Rgba::BLACK);
    let touched = square_and_circle.draw(&mut canvas).union(&rotated.draw(&mut canvas));

    PngEncoder::write_to_file(&canvas, &path)?;
    log::info!("wrote {path}, drawing covers {touched:?}");
    Ok(())
}

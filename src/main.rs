// This file is a small example of how to use the `pixeltint` library.
// The main library entry point is `src/lib.rs`.

use image::{Rgba, RgbaImage};
use log::info;
use pixeltint::ImageSession;

fn main() -> pixeltint::Result<()> {
    env_logger::init();
    println!("Pixeltint - Example Runner");

    // A synthetic horizontal gradient test card stands in for a real asset.
    // To work from a file instead, build a `ResourceStore` and use
    // `ImageSession::from_resource` / `ImageSession::from_default`.
    let card = RgbaImage::from_fn(256, 64, |x, _| {
        let v = x as u8;
        Rgba([v, v, v, 255])
    });

    let session = ImageSession::new(card)
        .lighten(Some(30.0))?
        .more_contrast()?
        .grey_scale()?;

    let averages = session.rgba_averages()?;
    info!("channel averages after chain: {averages:?}");
    println!(
        "averages: red {} green {} blue {} alpha {}",
        averages.red, averages.green, averages.blue, averages.alpha
    );

    Ok(())
}

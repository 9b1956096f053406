//! Hue override example
//! Recolors the test image to a handful of hues, always starting from the original

use hue_shift::HueSession;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Load test image, see create_test_image.rs
    let mut session = HueSession::open("data/test.png")?;

    for hue in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0] {
        session.set_hue(hue)?;

        let filename = format!("hue_{hue}.png");
        session.save_modified(output_dir.join(&filename))?;
        println!("✓ Generated {filename}");
    }

    session.save_compare(output_dir.join("hue_compare.png"))?;

    println!("\n✓ All hues applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}

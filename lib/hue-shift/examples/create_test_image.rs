use image::{Rgba, RgbaImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Colorful gradient with a transparent band at the bottom
    let mut img = RgbaImage::new(800, 600);

    for y in 0..600 {
        for x in 0..800 {
            let r = (x * 255 / 800) as u8;
            let g = (y * 255 / 600) as u8;
            let b = ((x + y) * 255 / 1400) as u8;
            let a = if y < 500 { 255 } else { (600 - y) as u8 * 2 };
            img.put_pixel(x, y, Rgba([r, g, b, a]));
        }
    }

    std::fs::create_dir_all("data")?;
    img.save("data/test.png")?;
    println!("Created data/test.png");

    Ok(())
}

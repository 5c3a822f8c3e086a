/// Basic example: convert a synthetic test image to ASCII art
///
/// Builds a gradient with a bright circle and prints the conversion for a
/// couple of configurations.
use asciify::{CharacterRamp, ConversionConfig, RampPreset, render_ascii};
use image::{Rgba, RgbaImage};

fn main() {
    println!("Asciify - Basic Example");
    println!("=======================\n");

    // Create a 200x200 test image: horizontal gradient plus a white circle
    let width = 200;
    let height = 200;
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let shade = (x * 255 / width) as u8;
            img.put_pixel(x, y, Rgba([shade, shade, shade, 255]));
        }
    }

    let center = (width as f32 / 2.0, height as f32 / 2.0);
    let radius = 60.0;
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center.0;
            let dy = y as f32 - center.1;
            if (dx * dx + dy * dy).sqrt() < radius {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
    }

    println!("Created test image: {width}x{height}\n");

    for (label, preset, invert) in [
        ("standard ramp", RampPreset::Standard, false),
        ("blocks ramp, inverted", RampPreset::Blocks, true),
    ] {
        let config = ConversionConfig {
            target_width: 60,
            ramp: CharacterRamp::from(preset),
            invert,
        };

        let art = render_ascii(&img, &config).expect("conversion failed");

        println!("--- {label} ({}x{}) ---", art.width(), art.height());
        print!("{art}");
        println!();
    }
}

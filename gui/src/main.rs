mod app;

use app::AsciiApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Configure logging
    env_logger::init();

    // Configure viewport/window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Asciify")
            .with_icon(load_icon()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Asciify",
        options,
        Box::new(|cc| Ok(Box::new(AsciiApp::new(cc)))),
    )
}

/// Build a small procedural application icon
fn load_icon() -> egui::IconData {
    let icon_size = 32;
    let mut pixels = vec![0u8; icon_size * icon_size * 4];

    // Vertical brightness gradient with an '@'-like ring in the middle
    for y in 0..icon_size {
        for x in 0..icon_size {
            let idx = (y * icon_size + x) * 4;

            let dx = x as i32 - 16;
            let dy = y as i32 - 16;
            let ring = (dx * dx + dy * dy - 81).abs() < 28;

            if ring {
                pixels[idx] = 255;
                pixels[idx + 1] = 255;
                pixels[idx + 2] = 255;
                pixels[idx + 3] = 255;
            } else {
                let shade = (y * 255 / icon_size) as u8;
                pixels[idx] = shade / 4;
                pixels[idx + 1] = shade / 2;
                pixels[idx + 2] = shade / 4;
                pixels[idx + 3] = 255;
            }
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size as u32,
        height: icon_size as u32,
    }
}

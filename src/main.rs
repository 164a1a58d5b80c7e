use eframe::egui;

use partlens_core::platform::banner::Banner;
use partlens_core::platform::parameters::gui::{APPLICATION_NAME, VIEWPORT_X, VIEWPORT_Y};
use partlens_core::PartLensApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut banner = Banner::new();
    banner.format();
    banner.log();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([VIEWPORT_X, VIEWPORT_Y])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        APPLICATION_NAME,
        options,
        Box::new(|_cc| Ok(Box::new(PartLensApp::new()))),
    )
}

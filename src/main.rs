use eframe::egui;
use ev_dashboard::app::EvDashboardApp;
use ev_dashboard::config::DashboardConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();
    log::info!("Dataset path: {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "EV Specifications Dashboard",
        options,
        // The dataset loads before the first frame; no handlers exist until then.
        Box::new(move |_cc| Ok(Box::new(EvDashboardApp::new(&config)))),
    )
}

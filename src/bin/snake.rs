use snake_game::{
	app::{self, App},
	settings::{self, Settings},
};

fn main() {
	logger::init_logger();

	let settings = match Settings::from_matches(&settings::cli().get_matches()) {
		Ok(val) => val,
		Err(e) => {
			logger::error!("Invalid arguments: {}", e);
			std::process::exit(1);
		}
	};

	let native_options = eframe::NativeOptions {
		initial_window_size: Some(app::window_size(&settings)),
		resizable: false,
		..Default::default()
	};

	eframe::run_native(Box::new(App::new(settings)), native_options);
}

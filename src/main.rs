/// Headless plinth entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use plinth::demos::{run_dropdown_demo, run_list_demo};
    use plinth::AppConfig;

    const DEMO_ITEM_COUNT: usize = 10_000;

    // Optional config file as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => match AppConfig::load(std::path::Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    // RUST_LOG overrides the configured level
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();
    log::info!("Log level: {}", config.log_level.name());

    let dropdown = match run_dropdown_demo(&config.overlay) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Dropdown demo failed: {}", e);
            std::process::exit(1);
        }
    };
    for step in &dropdown.steps {
        log::info!("dropdown {}: {:?}", step.label, step.result.style_properties());
    }

    let list = match run_list_demo(&config.list, DEMO_ITEM_COUNT) {
        Ok(report) => report,
        Err(e) => {
            log::error!("List demo failed: {}", e);
            std::process::exit(1);
        }
    };
    for step in &list.steps {
        log::info!(
            "list offset {} -> rows {:?}",
            step.requested_offset,
            step.window.range()
        );
    }

    let reports = serde_json::json!({ "dropdown": dropdown, "list": list });
    match serde_json::to_string_pretty(&reports) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize reports: {}", e),
    }
}

// No headless entry point on the web
#[cfg(target_arch = "wasm32")]
fn main() {}

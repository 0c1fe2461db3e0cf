#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process, sync::Arc};

use iced::Settings;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

use bookstore_gui::{
    api::HttpClient,
    app::App,
    config::Config,
    logger::{parse_log_level, setup_logger},
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    ConfigPath(PathBuf),
    ApiUrl(String),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: bookstore-gui [OPTIONS]

Options:
    --config <PATH>     Path of the configuration file
    --api-url <URL>     Base URL of the bookstore API
    -v, --version       Display bookstore-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--config" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::ConfigPath(PathBuf::from(a)));
            } else {
                return Err("missing arg to --config".into());
            }
        } else if arg == "--api-url" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::ApiUrl(a.clone()));
            } else {
                return Err("missing arg to --api-url".into());
            }
        } else if arg.starts_with("--") {
            return Err(format!("unknown option: {}", arg).into());
        }
    }

    Ok(res)
}

fn load_config(args: &[Arg]) -> Result<Config, Box<dyn Error>> {
    let path = args.iter().find_map(|arg| {
        if let Arg::ConfigPath(path) = arg {
            Some(path.clone())
        } else {
            None
        }
    });

    let mut config = match path.or_else(Config::default_path) {
        Some(path) => match Config::from_file(&path) {
            Ok(config) => config,
            Err(bookstore_gui::config::ConfigError::NotFound) => Config::default(),
            Err(e) => return Err(format!("Failed to read {}: {}", path.display(), e).into()),
        },
        None => Config::default(),
    };

    if let Some(Arg::ApiUrl(url)) = args.iter().find(|arg| matches!(arg, Arg::ApiUrl(_))) {
        config.api_url = url.clone();
    }

    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let config = load_config(&args)?;

    let log_level = if let Some(level) = parse_log_level()? {
        level
    } else {
        config.log_level()?.unwrap_or(LevelFilter::INFO)
    };
    setup_logger(log_level)?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("Bookstore".to_string()),
        antialiasing: false,
        ..Settings::default()
    };

    let window_settings = iced::window::Settings {
        size: iced::Size {
            width: 900.0,
            height: 700.0,
        },
        min_size: Some(iced::Size {
            width: 600.0,
            height: 500.0,
        }),
        ..Default::default()
    };

    let api_url = config.api_url.clone();
    if let Err(e) = iced::application(App::title, App::update, App::view)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(Arc::new(HttpClient::new(api_url))))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

use clap::Parser;
use crossbeam_channel::{TryRecvError, bounded};
use lift_common::{config::Config, event::EngineEvent};
use log::{LevelFilter, info, warn};
#[cfg(debug_assertions)]
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::{
    append::rolling_file::{
        RollingFileAppender,
        policy::compound::{
            CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
        },
    },
    config::{Appender, Config as LogConfig, Logger, Root},
    encode::pattern::PatternEncoder,
};
use macroquad::prelude::*;
use std::{error::Error, path::PathBuf};

mod clock;
mod feed;
mod pages;
mod scoreboard;

use scoreboard::Scoreboard;

const APP_NAME: &str = "overlay";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(long, short, action(clap::ArgAction::Count))]
    /// Increase the log verbosity
    verbose: u8,

    #[clap(long)]
    /// Directory within which log files will be placed, default is platform dependent
    log_location: Option<PathBuf>,

    #[clap(long, default_value = "5000000")]
    /// Max size in bytes that a log file is allowed to reach before being rolled over
    log_max_file_size: u64,

    #[clap(long, default_value = "3")]
    /// Number of archived logs to keep
    num_old_logs: u32,

    #[clap(long)]
    /// TOML config file to use instead of the stored app config
    config: Option<PathBuf>,

    #[clap(long)]
    /// File of engine events, one JSON object per line. Reads stdin when absent
    events: Option<PathBuf>,
}

fn load_config(args: &Cli) -> Config {
    if let Some(path) = &args.config {
        match Config::new_from_file(path) {
            Ok(config) => return config,
            Err(e) => warn!("Ignoring {}: {e}", path.display()),
        }
    }

    match confy::load(APP_NAME, None) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to read config file, overwriting with default. Error: {e}");
            let config = Config::default();
            if let Err(e) = confy::store(APP_NAME, None, &config) {
                warn!("Failed to store default config: {e}");
            }
            config
        }
    }
}

#[macroquad::main(window_conf())]
async fn main() {
    let args = Cli::parse();
    if let Err(e) = init_logging(&args) {
        eprintln!("Failed to start logging: {e}");
    }

    let config = load_config(&args);
    info!(
        "Showing panels {:?} at {}x{}",
        config.display.panels, config.display.screen_x, config.display.screen_y
    );

    let (tx, rx) = bounded::<EngineEvent>(16);
    let events = args.events.clone();
    std::thread::spawn(move || feed::feed_thread(tx, events));

    let renderer = pages::PageRenderer::new(config.display.theme, config.display.max_result_rows);
    let mut scoreboard = Scoreboard::new(&config);
    let mut feed_open = true;

    loop {
        while feed_open {
            match rx.try_recv() {
                Ok(event) => scoreboard.apply(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("Event feed ended, holding the last state");
                    feed_open = false;
                }
            }
        }

        renderer.draw(&scoreboard);

        if is_key_pressed(KeyCode::Escape) {
            scoreboard.detach_all();
            break;
        }
        next_frame().await;
    }
}

fn init_logging(args: &Cli) -> Result<(), Box<dyn Error>> {
    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let log_base_path = match &args.log_location {
        Some(path) => path.clone(),
        None => {
            let mut path = directories::BaseDirs::new()
                .ok_or("Could not find a directory to store logs")?
                .data_local_dir()
                .to_path_buf();
            path.push("lift-overlay-logs");
            path
        }
    };
    let mut log_path = log_base_path.clone();
    let mut archived_log_path = log_base_path;
    log_path.push(format!("{APP_NAME}-log.txt"));
    archived_log_path.push(format!("{APP_NAME}-log-{{}}.txt.gz"));

    #[cfg(debug_assertions)]
    println!("Log path: {}", log_path.display());

    // Only log to the console in debug mode
    #[cfg(all(debug_assertions, not(target_os = "windows")))]
    let console_target = Target::Stderr;
    #[cfg(all(debug_assertions, target_os = "windows"))]
    let console_target = Target::Stdout; // Windows apps don't get a stderr handle
    #[cfg(debug_assertions)]
    let console = ConsoleAppender::builder()
        .target(console_target)
        .encoder(Box::new(PatternEncoder::new("[{d} {h({l:5})} {M}] {m}{n}")))
        .build();

    let roller = FixedWindowRoller::builder().build(
        archived_log_path
            .to_str()
            .ok_or("Log path is not valid unicode")?,
        args.num_old_logs,
    )?;
    let file_policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(args.log_max_file_size)),
        Box::new(roller),
    );
    let file_appender = RollingFileAppender::builder()
        .append(true)
        .encoder(Box::new(PatternEncoder::new("[{d} {l:5} {M}] {m}{n}")))
        .build(log_path, Box::new(file_policy))?;

    // Everything else only logs errors
    let root = Root::builder().appender("file_appender");
    #[cfg(debug_assertions)]
    let root = root.appender("console");
    let root = root.build(LevelFilter::Error);

    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("file_appender", Box::new(file_appender)));

    #[cfg(debug_assertions)]
    let log_config = log_config.appender(Appender::builder().build("console", Box::new(console)));

    let log_config = log_config
        .logger(Logger::builder().build("overlay", log_level))
        .logger(Logger::builder().build("lift_common", log_level))
        .build(root)?;

    log4rs::init_config(log_config)?;
    log_panics::init();
    Ok(())
}

fn window_conf() -> Conf {
    let display = load_config(&Cli::parse()).display;
    Conf {
        window_title: String::from("Lifting Scoreboard"),
        window_width: display.screen_x,
        window_height: display.screen_y,
        window_resizable: false,
        ..Default::default()
    }
}

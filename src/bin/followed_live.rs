use std::{
    io::{BufRead as _, IsTerminal as _},
    sync::{mpsc, Arc},
};

use anyhow::Context as _;

use followed_live::*;

fn try_enable_colors() {
    if std::env::var("NO_COLOR").is_ok() || (cfg!(windows) && !yansi::Paint::enable_windows_ascii())
    {
        yansi::Paint::disable();
    } else {
        yansi::Paint::enable();
    }
}

// stops the monitor once a line is entered or stdin is closed
fn wait_for_enter(handle: StopHandle) {
    std::thread::spawn(move || {
        let mut line = String::new();
        let _ = std::io::stdin().lock().read_line(&mut line);
        handle.stop();
    });
}

fn main() -> anyhow::Result<()> {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!(
                "{err}\ntry running: {program_name} --help",
                program_name = env!("CARGO_CRATE_NAME")
            );
            std::process::exit(1)
        }
    };

    if args.logging() {
        alto_logger::init_alt_term_logger()?;
    }

    let store = ConfigStore::locate().with_context(|| "cannot get configuration path")?;
    let mut config = store
        .load()
        .with_context(|| format!("cannot load {}", store.path().display()))?;
    args.apply(&mut config);

    if let Err(err) = config.validate() {
        eprintln!(
            "{err}\nset them with the command line flags or in: {config_file}",
            config_file = store.path().display()
        );
        std::process::exit(1)
    }

    let alert: Arc<dyn Alert> = match args.quiet {
        true => Arc::new(Silent),
        false => Arc::new(Bell),
    };

    let (tx, rx) = mpsc::channel();
    let mut monitor = Monitor::new(Arc::new(HelixClient::new()), alert, store, tx);
    monitor.start(config)?;

    let stop = monitor
        .stop_handle()
        .with_context(|| "the monitor did not start")?;
    wait_for_enter(stop);

    try_enable_colors();
    let stdout = std::io::stdout();
    let clear = !args.json && stdout.is_terminal();
    let mut terminal = Terminal::new(stdout.lock())
        .json(args.json)
        .clear_screen(clear);

    for event in rx.iter() {
        let stopped = event == Event::Stopped;
        event.dispatch(&mut terminal);
        if stopped {
            break;
        }
    }

    log::trace!("shutting down");
    monitor.shutdown();
    Ok(())
}

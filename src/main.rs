// showbytes: print the in-memory byte layout of scalar values

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use showbytes::config::{usage, Config, Mode};
use showbytes::constants::{DEMO_AGE, DEMO_PREFIXES, DEMO_WORD};
use showbytes::inspect::{self, Endianness};
use showbytes::report::{demo_report, demo_specimens, pointer_basics};
use showbytes::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("showbytes");

    let config = match Config::from_args(args.iter().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(program_name));
            std::process::exit(1);
        }
    };

    match config.mode {
        Mode::Help => {
            println!("{}", usage(program_name));
            Ok(())
        }
        Mode::Print => print_report(&config),
        Mode::Tui => run_tui(),
    }
}

/// Write hex lines to stdout, labels to stderr
fn print_report(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    eprintln!("Host is {}", Endianness::native().name());

    if let Some(n) = config.prefix {
        match inspect::inspect_value(&DEMO_WORD, n) {
            Ok(view) => {
                eprintln!(
                    "0x{:08x} first {} of {} bytes:",
                    DEMO_WORD,
                    n,
                    std::mem::size_of_val(&DEMO_WORD)
                );
                out.write_all(inspect::render_line(view).as_bytes())?;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let report = match demo_report(DEMO_WORD, DEMO_PREFIXES) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        for inspection in report {
            eprintln!("{}:", inspection.label);
            writeln!(out, "{}", inspection.hex)?;
            out.flush()?;
        }
    }

    // Walkthrough lines are not byte lines, so they share stderr with the labels
    if config.pointers {
        for line in pointer_basics(DEMO_AGE) {
            eprintln!("{}", line);
        }
    }

    Ok(())
}

fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(demo_specimens());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    viewer_result(res)
}

/// Report a viewer failure and hand it back so the process exits non-zero
fn viewer_result(res: io::Result<()>) -> Result<(), Box<dyn std::error::Error>> {
    res.map_err(|err| -> Box<dyn std::error::Error> {
        eprintln!("Error: {:?}", err);
        err.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_failure_is_returned() {
        assert!(viewer_result(Ok(())).is_ok());

        let err = io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed");
        let returned = viewer_result(Err(err)).unwrap_err();
        assert_eq!(returned.to_string(), "terminal closed");
    }
}

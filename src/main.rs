// stepsort: guess the next step of a sorting algorithm

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::error;

use stepsort::automaton::Algorithm;
use stepsort::config::{init_logging, Cli, Command, StartArgs};
use stepsort::process::SortProcess;
use stepsort::session::{generate_array, run_plain, session_rng};
use stepsort::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            for algorithm in Algorithm::ALL {
                println!("{:<8} {}", algorithm.name(), algorithm.summary());
            }
            Ok(())
        }
        Command::Start(args) => start(cli.verbose, args),
    }
}

fn start(verbose: u8, args: StartArgs) -> Result<(), Box<dyn std::error::Error>> {
    args.validate()?;
    init_logging(verbose, args.log_file.as_ref(), args.plain)?;

    let mut rng = session_rng(args.seed);

    if args.plain {
        let algorithm = args.algorithm.unwrap_or(Algorithm::Bubble);
        let array = generate_array(args.length, &mut rng);
        let mut process = SortProcess::new(algorithm, array);
        run_plain(&mut process, io::stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(args.length, rng, args.algorithm);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "terminal UI failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

//! Mastermind Solver CLI
//!
//! Command-line front end for the solver: the computer breaks a code rated by
//! a human or by itself, or keeps a secret for a human to break.

use clap::{Parser, Subcommand};
use mastermind_solver::{
    grade, Code, Config, Feedback, Game, MastermindError, Scoring, Solver, SolverError,
};
use owo_colors::{AnsiColors, OwoColorize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::time::Instant;

const PEG_COLORS: [AnsiColors; 16] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Blue,
    AnsiColors::Yellow,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightBlue,
    AnsiColors::BrightYellow,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
    AnsiColors::White,
    AnsiColors::BrightBlack,
    AnsiColors::BrightWhite,
    AnsiColors::Default,
];

#[derive(Parser)]
#[command(name = "mastermind", about = "Multithreaded Mastermind code breaker")]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,

    /// Worker threads used by the guess search
    #[arg(short, long, global = true, default_value_t = mastermind_solver::config::DEFAULT_THREADS)]
    threads: usize,

    /// Pegs per code
    #[arg(long, global = true, default_value_t = 4)]
    length: usize,

    /// Number of colors (letters starting at A)
    #[arg(long, global = true, default_value_t = 6)]
    colors: usize,

    /// Seed for secrets and random picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Score guesses by worst-case group size instead of distinguished pairs
    #[arg(long, global = true)]
    minimax: bool,
}

#[derive(Subcommand)]
enum Cmd {
    /// The computer guesses, you type the rating (x = exact, . = color only)
    #[command(alias = "c")]
    Computer,
    /// The computer guesses against its own random secret
    #[command(alias = "a")]
    Auto,
    /// The computer keeps a secret, you guess
    #[command(alias = "p")]
    Player,
    /// Solve the given secret and print every round
    Solve {
        /// Secret code, e.g. ADBC
        code: String,
    },
    /// Solve many random secrets and print the attempt distribution
    #[command(alias = "bench")]
    Benchmark {
        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: usize,
    },
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::new(self.length, self.colors).with_threads(self.threads);
        if self.minimax {
            config = config.with_scoring(Scoring::Minimax);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn colored(code: &Code) -> String {
    code.pegs()
        .iter()
        .zip(code.symbols())
        .map(|(&p, c)| c.color(PEG_COLORS[p as usize]).to_string())
        .collect()
}

/// Read one line, `None` on end of input.
fn read_line() -> Result<Option<String>, MastermindError> {
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn rng_for(config: &Config) -> StdRng {
    config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

fn run_computer(config: Config) -> Result<(), MastermindError> {
    let mut solver = Solver::new(config)?;
    let length = solver.config().length;

    while !solver.is_solved() {
        let guess = solver.next_guess()?;
        let feedback = loop {
            print!("{}. {} ", solver.attempts() + 1, colored(&guess));
            let Some(line) = read_line()? else {
                return Ok(());
            };
            match Feedback::parse(&line, length) {
                Ok(feedback) => break feedback,
                Err(e) => println!("{}", e),
            }
        };
        solver.apply_feedback(guess, feedback)?;
    }
    println!("solved");
    Ok(())
}

fn print_game(solver: &mut Solver, secret: &Code) -> Result<(), MastermindError> {
    let mut attempt = 0;
    solver.solve_with_feedback(|guess| {
        attempt += 1;
        let feedback = grade(guess, secret);
        println!("{}. {} {}", attempt, colored(guess), feedback);
        Ok::<_, SolverError>(feedback)
    })?;
    println!("solved");
    Ok(())
}

fn run_auto(config: Config) -> Result<(), MastermindError> {
    let mut solver = Solver::new(config.clone())?;
    let secret = Code::random(&mut rng_for(&config), config.length, config.colors);
    print_game(&mut solver, &secret)
}

fn run_solve(config: Config, code: &str) -> Result<(), MastermindError> {
    let secret = Code::parse(code, &config)?;
    let mut solver = Solver::new(config)?;
    println!("Solving for: {}", colored(&secret));
    println!();
    print_game(&mut solver, &secret)
}

fn run_player(config: Config) -> Result<(), MastermindError> {
    let length = config.length;
    let mut game = Game::new(config.clone())?;

    while !game.is_solved() {
        let Some(line) = read_line()? else {
            return Ok(());
        };
        let guess = match Code::parse(&line, &config) {
            Ok(guess) => guess,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        let feedback = game.guess(&guess)?;
        println!(
            "{:2}. {} {:<width$}",
            game.attempts(),
            colored(&guess),
            feedback.to_string(),
            width = length + 1
        );
    }
    println!("solved");
    Ok(())
}

fn run_benchmark(config: Config, games: usize) -> Result<(), MastermindError> {
    let mut rng = rng_for(&config);
    let secrets: Vec<Code> = (0..games)
        .map(|_| Code::random(&mut rng, config.length, config.colors))
        .collect();
    let solver = Solver::new(config)?;

    let start = Instant::now();
    let distribution = solver.guess_distribution(&secrets)?;
    let elapsed = start.elapsed();

    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    let total_guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();

    println!("Guess distribution:");
    for (guesses, count) in &distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {:>2} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", total_guesses as f64 / total.max(1) as f64);
    println!("Games: {}", total);
    println!("Time elapsed: {:.2?}", elapsed);
    Ok(())
}

fn run(args: Args) -> Result<(), MastermindError> {
    let config = args.config();
    config.validate()?;

    match args.cmd {
        Cmd::Computer => run_computer(config),
        Cmd::Auto => run_auto(config),
        Cmd::Player => run_player(config),
        Cmd::Solve { code } => run_solve(config, &code),
        Cmd::Benchmark { games } => run_benchmark(config, games),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use spanish_hub::games::{self, runner, wordle};
use spanish_hub::{HubConfig, logging, words};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spanish-hub", about = "Spanish revision games for the terminal", version)]
struct Cli
{
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed word and verb selection for a repeatable session
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write debug logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands
{
    /// List the available games
    List,
    /// Guess the 5-letter Spanish word in 5 tries
    Wordle,
    /// Conjugate falling verbs before they hit the ground
    Runner,
    /// Print every word the guesser can pick, with its translation
    Dictionary,
}

impl Cli
{
    fn config(&self) -> HubConfig
    {
        HubConfig {
            seed: self.seed,
            log_file: self.log_file.clone(),
        }
    }
}

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()>
{
    let cli = Cli::parse();
    let config = cli.config();
    logging::init(config.log_file.as_deref())?;

    match cli.command {
        None => interactive_menu(&config),
        Some(Commands::List) => {
            list_games();
            Ok(())
        }
        Some(Commands::Wordle) => run_game("wordle", &config),
        Some(Commands::Runner) => run_game("runner", &config),
        Some(Commands::Dictionary) => {
            print_dictionary();
            Ok(())
        }
    }
}

fn run_game(name: &str, config: &HubConfig) -> Result<()>
{
    match name {
        "wordle" => wordle::terminal::run(config).context("wordle stopped")?,
        "runner" => runner::terminal::run(config).context("verb runner stopped")?,
        _ => bail!("Unknown game '{name}'. Run with --help."),
    }
    Ok(())
}

fn interactive_menu(config: &HubConfig) -> Result<()>
{
    let registry = games::registry();
    println!("Spanish Revision Hub");
    println!();
    println!("Select a game:");
    for (idx, game) in registry.iter().enumerate() {
        println!(
            "  {}. {} - {} ({})",
            idx + 1,
            game.title,
            game.description,
            game.stats
        );
    }
    println!();
    print!("Enter number or name (default 1, q to quit): ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;
    let choice = input.trim();

    if choice.is_empty() {
        return run_game(registry[0].name, config);
    }
    if choice.eq_ignore_ascii_case("q") {
        return Ok(());
    }
    if let Ok(index) = choice.parse::<usize>() {
        if index >= 1 && index <= registry.len() {
            return run_game(registry[index - 1].name, config);
        }
    }
    if let Some(game) = games::find(choice) {
        return run_game(game.name, config);
    }

    bail!("Invalid selection.")
}

fn list_games()
{
    println!("Available games:");
    for game in games::registry() {
        println!("  {:<8} - {} ({})", game.name, game.description, game.stats);
    }
}

fn print_dictionary()
{
    for entry in words::guess_words() {
        println!("  {:<6} {}", entry.word, entry.translation);
    }
}

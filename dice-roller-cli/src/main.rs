use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use dice_roller::interpreter::{tokens_to_string, DiceRoller};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Rolls the given dice expression, e.g. "2d4 + 3d5*5 + 5.0 + d4"
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to roll
    #[clap(required = true)]
    expression: Vec<String>,

    /// Seed the dice so the same expression always rolls the same
    #[clap(long)]
    seed: Option<u64>,

    /// Print every token of the expression
    #[clap(long)]
    tokens: bool,

    /// Print the expression in postfix order
    #[clap(long)]
    postfix: bool,

    /// Print every operand and operator in evaluation order
    #[clap(long)]
    trace: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(
            args.verbose
                .log_level()
                .map_or(LevelFilter::Off, |level| level.to_level_filter()),
        )
        .init();

    let expression = args.expression.join(" ");
    let roll = match args.seed {
        Some(seed) => {
            info!("rolling with seed {}", seed);
            DiceRoller::with_roller(&expression, &mut StdRng::seed_from_u64(seed))
        }
        None => DiceRoller::new(&expression),
    }
    .with_context(|| format!("Could not roll {:?}", expression))?;

    if args.tokens {
        for (index, token) in roll.tokens().iter().enumerate() {
            println!("{}=> {:?}", index, token);
        }
    }
    if args.postfix {
        println!("{}", tokens_to_string(roll.postfix()));
    }
    if args.trace {
        let trace: Vec<String> = roll.trace().iter().map(ToString::to_string).collect();
        println!("{}", trace.join(" "));
    }
    println!("{}", roll);

    Ok(())
}

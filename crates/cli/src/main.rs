mod function;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use sweep_solvers::{Domain, Mode, Options, continuous_optimize, discrete_optimize, optimize};
use tracing_subscriber::EnvFilter;

use function::Function;

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(version)]
#[command(about = "Brute-force one-dimensional optimization", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log solver progress at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Optimize -x² + 4x both ways and print the results.
    Demo,

    /// Optimize a built-in function over a domain.
    Run(RunArgs),
}

#[derive(ClapArgs, Debug)]
struct RunArgs {
    /// Search mode: "discrete" or "continuous".
    #[arg(long)]
    mode: Mode,

    /// Candidates: "(a, b)", "[x, y, z]", "x,y,z", "lo..=hi" or "lo..hi".
    #[arg(long, allow_hyphen_values = true)]
    domain: Domain,

    #[arg(long, value_enum, default_value_t = Function::Parabola)]
    function: Function,

    /// Search for the smallest objective instead of the largest.
    #[arg(long)]
    minimize: bool,

    /// Grid spacing of the first continuous round.
    #[arg(long)]
    step: Option<f64>,

    /// Narrow the interval around the best point between rounds.
    #[arg(long)]
    refine: bool,

    /// Number of continuous rounds.
    #[arg(long)]
    rounds: Option<usize>,

    /// JSON file of options; flags given on the command line take precedence.
    #[arg(long)]
    options: Option<PathBuf>,
}

impl RunArgs {
    /// Builds the search options from the options file and flags.
    fn options(&self) -> Result<Options> {
        let mut options = match &self.options {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse options in {}", path.display()))?
            }
            None => Options::default(),
        };

        if self.minimize {
            options.maximize = false;
        }
        if let Some(step) = self.step {
            options.step = step;
        }
        if self.refine {
            options.refine = true;
        }
        if let Some(rounds) = self.rounds {
            options.rounds = rounds;
        }

        Ok(options)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Demo => demo(),
        Command::Run(run_args) => run(&run_args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn demo() -> Result<()> {
    let f = |x| Function::Parabola.eval(x);

    let (x, fx) = discrete_optimize(f, (-10..=10).map(f64::from), true)
        .context("discrete demo failed")?;
    println!("Discrete optimum: x = {x}, f(x) = {fx}");

    let (x, fx) = continuous_optimize(f, 0.0, 4.0, 0.1, true, true, 3)
        .context("continuous demo failed")?;
    println!("Continuous optimum: x = {x:.4}, f(x) = {fx:.4}");

    Ok(())
}

fn run(args: &RunArgs) -> Result<()> {
    let options = args.options()?;
    let function = args.function;
    tracing::debug!(mode = %args.mode, ?function, ?options, "starting search");

    let (x, fx) = optimize(
        |x| function.eval(x),
        &args.domain,
        args.mode.as_str(),
        &options,
    )
    .with_context(|| format!("{} search failed", args.mode))?;

    match args.mode {
        Mode::Discrete => println!("Discrete optimum: x = {x}, f(x) = {fx}"),
        Mode::Continuous => println!("Continuous optimum: x = {x:.4}, f(x) = {fx:.4}"),
    }

    Ok(())
}

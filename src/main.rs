use std::io::{self, BufRead};

use clap::Parser;
use romanum::{ConvertResult, convert, converter::evaluator::total, explain};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Numerals converted by `--demo`, ending with one invalid input.
const DEMO: [&str; 21] = ["LIX",
                          "MDCLXII",
                          "DCCV",
                          "MDCCIX",
                          "MDCCLXXVI",
                          "DCXXII",
                          "DCCXCIV",
                          "CCXXXIV",
                          "CMLIII",
                          "CMVI",
                          "CCCXLIV",
                          "MCCCLXIII",
                          "CDXXV",
                          "DCCLXIII",
                          "MCCXCIII",
                          "CDLXIII",
                          "MLXVIII",
                          "MDCCLX",
                          "MCMXLV",
                          "MCXCIX",
                          "acsfga"];

/// romanum converts Roman numerals to integers, rejecting malformed numerals.
///
/// Set `RUST_LOG=romanum=debug` to log every conversion to stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Converts a built-in list of demonstration numerals.
    #[arg(short, long, conflicts_with = "numerals")]
    demo: bool,

    /// Prints the signed value of every numeral next to the result.
    #[arg(short, long)]
    explain: bool,

    /// Numerals to convert. Standard input is read line by line when none are
    /// given.
    numerals: Vec<String>,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "romanum=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    if args.demo {
        DEMO.iter().for_each(|numeral| report(numeral, args.explain));
    } else if !args.numerals.is_empty() {
        args.numerals.iter().for_each(|numeral| report(numeral, args.explain));
    } else {
        for line in io::stdin().lock().lines() {
            let line = line.unwrap_or_else(|e| {
                               eprintln!("Failed to read standard input: {e}");
                               std::process::exit(1);
                           });
            report(line.trim(), args.explain);
        }
    }
}

/// Prints the outcome of one conversion. Failures are reported and skipped.
fn report(source: &str, explain_terms: bool) {
    let outcome = if explain_terms { explanation(source) } else { convert(source).map(|n| n.to_string()) };

    match outcome {
        Ok(text) => println!("{text}"),
        Err(e) => println!("Input not valid {}: {e}", e.code()),
    }
}

/// Renders a conversion as `MCMXLV = +1000 -100 +1000 -10 +50 +5 = 1945`.
fn explanation(source: &str) -> ConvertResult<String> {
    let terms = explain(source)?;
    let sum = total(&terms)?;
    let rendered: Vec<String> = terms.iter().map(ToString::to_string).collect();

    Ok(format!("{source} = {} = {sum}", rendered.join(" ")))
}

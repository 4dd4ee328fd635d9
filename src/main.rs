mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Command, Encoding};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randomcase::encoding::bytes_to_string;
use randomcase::{decode_base64, decode_binary, decode_hex, Config, TextTransformer, Transformation};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries transformed text
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "randomcase=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    match &args.command {
        Command::Apply {
            transformation,
            text,
        } => {
            let transformer = build_transformer(&args)?;
            let input = read_input(text.as_deref())?;
            println!("{}", run(&transformer, *transformation, &input, args.seed));
        }
        Command::Splice {
            transformation,
            start,
            end,
            text,
        } => {
            let transformer = build_transformer(&args)?;
            let input = read_input(text.as_deref())?;
            let output = match args.seed {
                Some(seed) => transformer.apply_to_selection_with_rng(
                    &input,
                    *start,
                    *end,
                    *transformation,
                    &mut ChaCha20Rng::seed_from_u64(seed),
                )?,
                None => transformer.apply_to_selection(&input, *start, *end, *transformation)?,
            };
            println!("{}", output);
        }
        Command::Decode { encoding, text } => {
            let input = read_input(text.as_deref())?;
            let bytes = match encoding {
                Encoding::Binary => decode_binary(&input)?,
                Encoding::Hex => decode_hex(&input)?,
                Encoding::Base64 => decode_base64(&input)?,
            };
            println!("{}", bytes_to_string(bytes)?);
        }
        Command::List => {
            for t in Transformation::ALL {
                println!("{}  {:<12} {}", t.index(), t.name(), t.label());
            }
        }
    }

    Ok(())
}

fn build_transformer(args: &Args) -> Result<TextTransformer> {
    let mut config = Config::load(args.config.as_deref()).context("Failed to load config")?;

    if let Some(path) = &args.keyword_table {
        config.keyword_table = Some(path.clone());
    }
    if let Some(path) = &args.catalog {
        config.emoji_catalog = Some(path.clone());
    }
    if let Some(strategy) = args.strategy {
        config.emoji_strategy = strategy;
    }
    if let Some(preset) = args.leet {
        config.leet_preset = preset;
    }
    debug!(?config, "Effective config");

    config
        .build_transformer()
        .context("Failed to load emoji tables")
}

fn run(transformer: &TextTransformer, kind: Transformation, input: &str, seed: Option<u64>) -> String {
    match seed {
        Some(seed) => {
            transformer.transform_with_rng(kind, input, &mut ChaCha20Rng::seed_from_u64(seed))
        }
        None => transformer.transform(kind, input),
    }
}

/// Use the argument when given, otherwise all of stdin minus one trailing newline
fn read_input(text: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

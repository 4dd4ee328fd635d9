use clap::{Parser, ValueEnum};
use randomcase::{EmojiStrategy, LeetPreset, Transformation};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Transform selected text", long_about = None)]
pub struct Args {
    /// Config file (default: platform config dir/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// `emoji,name` keyword table, overrides the config
    #[arg(long, global = true)]
    pub keyword_table: Option<PathBuf>,

    /// JSON emoji catalog, overrides the config
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Emoji strategy: keyword, catalog or replace
    #[arg(long, global = true, value_parser = parse_strategy)]
    pub strategy: Option<EmojiStrategy>,

    /// Leet table: classic or extended
    #[arg(long, global = true, value_parser = parse_leet)]
    pub leet: Option<LeetPreset>,

    /// Seed for reproducible random case
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Transform TEXT (or stdin)
    Apply {
        /// Name or menu index (0-7)
        #[arg(value_parser = parse_transformation)]
        transformation: Transformation,

        text: Option<String>,
    },
    /// Transform the characters START..END of TEXT (or stdin), keeping the rest
    Splice {
        #[arg(value_parser = parse_transformation)]
        transformation: Transformation,

        start: usize,

        end: usize,

        text: Option<String>,
    },
    /// Decode binary, hex or base64 output back to text
    Decode {
        #[arg(value_enum)]
        encoding: Encoding,

        text: Option<String>,
    },
    /// List the available transformations
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Binary,
    Hex,
    Base64,
}

fn parse_transformation(value: &str) -> Result<Transformation, String> {
    value.parse().map_err(|e: randomcase::TransformError| e.to_string())
}

fn parse_strategy(value: &str) -> Result<EmojiStrategy, String> {
    value.parse().map_err(|e: randomcase::TransformError| e.to_string())
}

fn parse_leet(value: &str) -> Result<LeetPreset, String> {
    value.parse().map_err(|e: randomcase::TransformError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_apply_with_index() {
        let args = Args::try_parse_from(["randomcase", "--seed", "9", "apply", "4", "hello"]).unwrap();
        assert_eq!(args.seed, Some(9));
        match args.command {
            Command::Apply { transformation, text } => {
                assert_eq!(transformation, Transformation::Leet);
                assert_eq!(text.as_deref(), Some("hello"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "randomcase", "apply", "emojify", "--strategy", "replace", "--leet", "classic",
        ])
        .unwrap();
        assert_eq!(args.strategy, Some(EmojiStrategy::Replace));
        assert_eq!(args.leet, Some(LeetPreset::Classic));
    }

    #[test]
    fn test_rejects_unknown_transformation() {
        assert!(Args::try_parse_from(["randomcase", "apply", "rot13", "x"]).is_err());
    }
}

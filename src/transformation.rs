use crate::error::{Result, TransformError};
use std::str::FromStr;

/// The transformations offered for a selection, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transformation {
    /// 0 - per-character random case
    RandomCase,
    /// 1 - whole-string uppercase
    Upper,
    /// 2 - whole-string lowercase
    Lower,
    /// 3 - emoji substitution using the configured strategy
    Emojify,
    /// 4 - leetspeak substitution
    Leet,
    /// 5 - 8-bit binary groups
    Binary,
    /// 6 - uppercase hex byte pairs
    Hex,
    /// 7 - standard base64
    Base64,
}

impl Transformation {
    /// Every transformation in menu order
    pub const ALL: [Transformation; 8] = [
        Transformation::RandomCase,
        Transformation::Upper,
        Transformation::Lower,
        Transformation::Emojify,
        Transformation::Leet,
        Transformation::Binary,
        Transformation::Hex,
        Transformation::Base64,
    ];

    /// Menu position of this transformation
    pub fn index(&self) -> usize {
        match self {
            Transformation::RandomCase => 0,
            Transformation::Upper => 1,
            Transformation::Lower => 2,
            Transformation::Emojify => 3,
            Transformation::Leet => 4,
            Transformation::Binary => 5,
            Transformation::Hex => 6,
            Transformation::Base64 => 7,
        }
    }

    /// Transformation at a menu position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label shown in the selection menu
    pub fn label(&self) -> &'static str {
        match self {
            Transformation::RandomCase => "rAnDoM cAsE",
            Transformation::Upper => "UPPERCASE",
            Transformation::Lower => "lowercase",
            Transformation::Emojify => "Emojify",
            Transformation::Leet => "Leet",
            Transformation::Binary => "0b0",
            Transformation::Hex => "0x0",
            Transformation::Base64 => "Base64",
        }
    }

    /// Command-line name
    pub fn name(&self) -> &'static str {
        match self {
            Transformation::RandomCase => "random-case",
            Transformation::Upper => "upper",
            Transformation::Lower => "lower",
            Transformation::Emojify => "emojify",
            Transformation::Leet => "leet",
            Transformation::Binary => "binary",
            Transformation::Hex => "hex",
            Transformation::Base64 => "base64",
        }
    }

    /// Whether the output can be decoded back to the input bytes
    pub fn is_reversible(&self) -> bool {
        matches!(
            self,
            Transformation::Binary | Transformation::Hex | Transformation::Base64
        )
    }
}

impl FromStr for Transformation {
    type Err = TransformError;

    /// Accepts a name, a common alias or a menu index
    fn from_str(value: &str) -> Result<Self> {
        #[allow(clippy::enum_glob_use)]
        use Transformation::*;
        let value = value.trim().to_lowercase();
        match value.as_str() {
            "random-case" | "random" | "randomcase" => Ok(RandomCase),
            "upper" | "uppercase" => Ok(Upper),
            "lower" | "lowercase" => Ok(Lower),
            "emojify" | "emoji" => Ok(Emojify),
            "leet" | "1337" => Ok(Leet),
            "binary" | "bin" | "base2" => Ok(Binary),
            "hex" | "base16" => Ok(Hex),
            "base64" | "b64" => Ok(Base64),
            other => match other.parse::<usize>() {
                Ok(index) => Self::from_index(index).ok_or_else(|| {
                    TransformError::InvalidTransformation(format!("index {index}"))
                }),
                Err(_) => Err(TransformError::InvalidTransformation(other.to_string())),
            },
        }
    }
}

impl std::fmt::Display for Transformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//! Tokenizer configuration.
//!
//! A configuration is built once, validated, and never changes afterwards.
//! Two host-facing forms are accepted:
//!
//! - a flat argument list, as a search engine passes it from a table
//!   definition: `["gram", "3", "case_sensitive"]`
//! - key/value pairs: `[("gram", "3"), ("case_sensitive", "true")]`

use std::fmt;
use std::str::FromStr;

/// Window size of the n-gram assembler, always in `1..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gram(u8);

impl Gram {
    /// Smallest window: every base token is emitted on its own.
    pub const MIN: Gram = Gram(1);
    pub const MAX: Gram = Gram(4);
    pub const DEFAULT: Gram = Gram(2);

    /// Validate a window size.
    pub fn new(gram: i64) -> Result<Self, ConfigError> {
        match u8::try_from(gram) {
            Ok(n) if (Self::MIN.0..=Self::MAX.0).contains(&n) => Ok(Gram(n)),
            _ => Err(ConfigError::GramOutOfRange { gram }),
        }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for Gram {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Gram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gram {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let gram = s
            .trim_start()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidGram {
                value: s.to_owned(),
            })?;
        Gram::new(gram)
    }
}

/// Rejected tokenizer options.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unrecognized option at index {index}: {name}")]
    UnknownOption { index: usize, name: String },
    #[error("`{option}` expects one argument, got nothing")]
    MissingValue { option: &'static str },
    #[error("invalid gram value `{value}`: expected an integer")]
    InvalidGram { value: String },
    #[error(
        "{gram}-gram is out of range, expected [{min}, {max}]",
        min = Gram::MIN,
        max = Gram::MAX
    )]
    GramOutOfRange { gram: i64 },
    #[error("invalid value `{value}` for `{option}`: expected a boolean")]
    InvalidBool { option: &'static str, value: String },
}

/// Immutable tokenizer settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenizerConfig {
    gram: Gram,
    case_sensitive: bool,
}

impl TokenizerConfig {
    pub fn new(gram: Gram, case_sensitive: bool) -> Self {
        TokenizerConfig {
            gram,
            case_sensitive,
        }
    }

    /// Parse a flat option list.
    ///
    /// `gram` consumes the following argument as its value; `case_sensitive`
    /// is a bare flag. Any other word is rejected with its index.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut args = args.iter().map(AsRef::as_ref).enumerate();

        while let Some((index, arg)) = args.next() {
            match arg {
                "gram" => {
                    let (_, value) = args
                        .next()
                        .ok_or(ConfigError::MissingValue { option: "gram" })?;
                    config.gram = value.parse()?;
                }
                "case_sensitive" => config.case_sensitive = true,
                name => {
                    return Err(ConfigError::UnknownOption {
                        index,
                        name: name.to_owned(),
                    })
                }
            }
        }

        tracing::debug!(gram = %config.gram, case_sensitive = config.case_sensitive, "parsed tokenizer arguments");
        Ok(config)
    }

    /// Parse key/value options.
    pub fn from_options<I, K, V>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (index, (key, value)) in options.into_iter().enumerate() {
            let value = value.as_ref();
            match key.as_ref() {
                "gram" => config.gram = value.parse()?,
                "case_sensitive" => config.case_sensitive = parse_bool("case_sensitive", value)?,
                name => {
                    return Err(ConfigError::UnknownOption {
                        index,
                        name: name.to_owned(),
                    })
                }
            }
        }

        tracing::debug!(gram = %config.gram, case_sensitive = config.case_sensitive, "parsed tokenizer options");
        Ok(config)
    }

    #[inline]
    pub fn gram(&self) -> Gram {
        self.gram
    }

    #[inline]
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

fn parse_bool(option: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            option,
            value: value.to_owned(),
        }),
    }
}

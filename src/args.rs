//! The three-token argument contract shared by every workload binary.
//!
//! ```text
//! <binary> <alg> <n> <seed>
//! ```
//!
//! Numeric tokens are parsed the way C's `atoll`/`strtoull` do: leading
//! whitespace and an optional sign, then the longest run of decimal digits.
//! Text without leading digits becomes 0. A token that is not consumed in
//! full is still accepted, but a warning is logged on stderr.

use std::ffi::OsString;

use clap::Parser;
use tracing::{debug, warn};

use crate::error::{BenchError, Result};

#[derive(Parser, Debug)]
#[command(
    name = "complexity-bench",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct RawArgs {
    alg: OsString,

    n: OsString,

    seed: OsString,

    /// Anything after the seed is ignored.
    #[arg(hide = true)]
    rest: Vec<OsString>,
}

/// Tokens required after the program name.
const REQUIRED_TOKENS: usize = 3;

/// Parsed identity of one benchmark run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchArgs {
    pub alg: String,
    pub n: i64,
    pub seed: u64,
}

impl BenchArgs {
    /// Parse the process arguments.
    pub fn from_env() -> Result<Self> {
        Self::parse_from(std::env::args_os())
    }

    /// Parse `argv`-style tokens; the first token is the program name.
    pub fn parse_from<I, T>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut argv = argv.into_iter().map(|token| -> OsString { token.into() });
        let program = argv.next().unwrap_or_default();
        let tokens: Vec<OsString> = argv.collect();
        let supplied = tokens.len();

        if supplied < REQUIRED_TOKENS {
            warn!(supplied, "expected <alg> <n> <seed>");
            return Err(BenchError::Usage { supplied });
        }

        // A leading `--` ends option parsing, so every user token (including
        // `--` itself and non-UTF-8 text) reaches the positionals verbatim.
        let raw = RawArgs::try_parse_from(
            [program, OsString::from("--")].into_iter().chain(tokens),
        )
        .map_err(|err| {
            warn!(kind = ?err.kind(), supplied, "rejecting arguments");
            BenchError::Usage { supplied }
        })?;

        if !raw.rest.is_empty() {
            debug!(ignored = ?raw.rest, "ignoring arguments after seed");
        }

        Ok(Self {
            alg: raw.alg.to_string_lossy().into_owned(),
            n: lenient_i64("n", &raw.n.to_string_lossy()),
            seed: lenient_u64("seed", &raw.seed.to_string_lossy()),
        })
    }
}

struct Scanned<'a> {
    negative: bool,
    digits: &'a str,
    complete: bool,
}

fn scan(text: &str) -> Scanned<'_> {
    let trimmed = text.trim_start();
    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let len = body.bytes().take_while(u8::is_ascii_digit).count();
    Scanned {
        negative,
        digits: &body[..len],
        complete: len > 0 && len == body.len(),
    }
}

/// Magnitude of a digit run, or `None` when it does not fit in a `u64`.
fn magnitude(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}

/// `atoll`-style signed parse, saturating at the `i64` bounds.
pub fn parse_i64_lenient(text: &str) -> i64 {
    let s = scan(text);
    match magnitude(s.digits) {
        Some(mag) => {
            let v = if s.negative {
                -i128::from(mag)
            } else {
                i128::from(mag)
            };
            v.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
        }
        None if s.negative => i64::MIN,
        None => i64::MAX,
    }
}

/// `strtoull`-style unsigned parse: a leading `-` negates modulo 2^64 and
/// overflow saturates at `u64::MAX`.
pub fn parse_u64_lenient(text: &str) -> u64 {
    let s = scan(text);
    match magnitude(s.digits) {
        Some(mag) if s.negative => mag.wrapping_neg(),
        Some(mag) => mag,
        None => u64::MAX,
    }
}

fn lenient_i64(name: &str, text: &str) -> i64 {
    let value = parse_i64_lenient(text);
    if !scan(text).complete {
        warn!(arg = name, text, value, "argument is not a plain integer, coerced");
    }
    value
}

fn lenient_u64(name: &str, text: &str) -> u64 {
    let value = parse_u64_lenient(text);
    if !scan(text).complete {
        warn!(arg = name, text, value, "argument is not a plain integer, coerced");
    }
    value
}

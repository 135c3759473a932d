use std::num::ParseIntError;

#[derive(thiserror::Error, Debug)]
pub enum GuessError {
    #[error("`{input}` is not a number (error: {source})")]
    Malformed {
        input: String,
        source: ParseIntError,
    },
    #[error("Empty number range `{lowest}..={highest}`")]
    EmptyRange { lowest: i64, highest: i64 },
}

pub fn parse_guess(line: &str) -> Result<i64, GuessError> {
    let input = line.trim();
    input.parse().map_err(|source| GuessError::Malformed {
        input: input.to_string(),
        source,
    })
}

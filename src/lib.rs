pub mod console;
pub mod error;
pub mod game;
pub mod number_source;
pub mod outcome;

pub use console::Console;
pub use error::GuessError;
pub use game::{GameConfig, GuessingGame, PlayReport};
pub use number_source::NumberSource;
pub use outcome::Outcome;

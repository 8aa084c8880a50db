pub mod clock;
pub mod config;
pub mod error;
pub mod generator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Cli, GeneratorConfig};
pub use error::{PrefixError, Result};
pub use generator::{generate_header, Generated, PrefixGenerator, PROGRESS_MESSAGE};

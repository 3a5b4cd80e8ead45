pub use location::Location;
pub use scanner::{scan_text, Scanner};
pub use token::{Token, TokenKind};

mod location;
mod scanner;
mod token;

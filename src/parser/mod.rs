pub use parser::{parse_text, Parser};
pub use result::{ParseErr, ParseErrKind, ParseOutput};
pub use trace::{render, TraceLine};

mod parser;
mod result;
mod trace;

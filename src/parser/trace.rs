use std::fmt;

/// One line of a derivation trace: a rule's text (or a number's
/// lexeme) and the column it's rendered at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceLine {
    pub indent: usize,
    pub text: String,
}

impl TraceLine {
    pub fn new(indent: usize, text: &str) -> Self {
        Self { indent, text: text.to_owned() }
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.text, indent = self.indent)
    }
}

/// Render a whole trace, one line per entry, each ending with a
/// newline.
pub fn render(trace: &[TraceLine]) -> String {
    trace.iter().map(|line| format!("{line}\n")).collect()
}

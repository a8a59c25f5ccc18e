use crate::utils::error::Result;
use std::io::{self, Write};

pub const GREETING_PREFIX: &str = "Hello, ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    message: String,
}

impl Greeter {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!("Greeter created with message {:?}", message);
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Builds the greeting line without its terminator. The name is used
    /// verbatim and the stored message plays no part.
    pub fn greeting(&self, name: &str) -> String {
        format!("{GREETING_PREFIX}{name}")
    }

    /// Writes one greeting line to `out`.
    pub fn greet_to<W: Write>(&self, out: &mut W, name: &str) -> Result<()> {
        let line = self.greeting(name);
        tracing::debug!("Greeting {:?}", name);
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }

    pub fn greet(&self, name: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.greet_to(&mut handle, name)
    }
}

use crate::config::GreeterConfig;
use crate::error::GreetError;
use crate::human::Human;
use std::io::{self, Write};
use tracing::debug;

/// Greets anything that implements [`Human`].
///
/// Greeting never changes the greeter or the person, so the same call always
/// produces the same line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Greeter {
    config: GreeterConfig,
}

impl Greeter {
    pub fn new(config: GreeterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GreeterConfig {
        &self.config
    }

    /// The greeting line without its trailing newline.
    pub fn greeting<H: Human + ?Sized>(&self, human: &H) -> String {
        format!("{}, {}", self.config.salutation(), human.name())
    }

    pub fn greet_to<W, H>(&self, out: &mut W, human: &H) -> Result<(), GreetError>
    where
        W: Write + ?Sized,
        H: Human + ?Sized,
    {
        debug!(name = human.name(), "greeting");
        writeln!(out, "{}", self.greeting(human))?;
        Ok(())
    }

    /// Writes one greeting and flushes `out` so the line is visible right away.
    pub fn greet_and_flush<W, H>(&self, out: &mut W, human: &H) -> Result<(), GreetError>
    where
        W: Write + ?Sized,
        H: Human + ?Sized,
    {
        self.greet_to(out, human)?;
        out.flush()?;
        Ok(())
    }

    pub fn greet_all_to<W, I>(&self, out: &mut W, humans: I) -> Result<(), GreetError>
    where
        W: Write + ?Sized,
        I: IntoIterator,
        I::Item: Human,
    {
        for human in humans {
            self.greet_to(out, &human)?;
        }
        Ok(())
    }
}

/// Writes `Привет, <name>` and a newline to `out`.
pub fn greet_to<W, H>(out: &mut W, human: &H) -> Result<(), GreetError>
where
    W: Write + ?Sized,
    H: Human + ?Sized,
{
    Greeter::default().greet_to(out, human)
}

/// Writes `Привет, <name>` and a newline to standard output.
pub fn greet<H: Human + ?Sized>(human: &H) -> Result<(), GreetError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Greeter::default().greet_and_flush(&mut out, human)
}

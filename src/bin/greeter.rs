use colored::Colorize;
use polymorphism_greeter::{sample_roster, GreetError, Greeter, Human};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    let stdout = io::stdout();
    let result = run(&mut stdout.lock());
    exit_code(result)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<W: Write + ?Sized>(out: &mut W) -> Result<(), GreetError> {
    let greeter = Greeter::default();
    let roster = sample_roster();
    let names: Vec<&str> = roster.iter().map(|human| human.name()).collect();
    info!(people = ?names, "greeting roster");

    for human in &roster {
        greeter.greet_and_flush(out, human)?;
    }

    info!("done");
    Ok(())
}

fn exit_code(result: Result<(), GreetError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bold().red());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_greets_roster_in_order() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Привет, Студент\nПривет, Преподаватель\nПривет, Профессор\n"
        );
    }

    #[test]
    fn test_run_into_closed_pipe_fails_with_write_error() {
        let err = run(&mut ClosedPipe).unwrap_err();
        assert!(matches!(err, GreetError::Write(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_write_error_exits_with_failure() {
        let result = run(&mut ClosedPipe);
        assert_eq!(exit_code(result), ExitCode::FAILURE);
    }

    #[test]
    fn test_success_exits_cleanly() {
        assert_eq!(exit_code(run(&mut Vec::new())), ExitCode::SUCCESS);
    }
}

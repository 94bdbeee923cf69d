use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockMode {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalMode for MockMode {
    fn enter(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

struct FailingMode;

impl TerminalMode for FailingMode {
    fn enter(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "no tty"))
    }

    fn leave(&self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn terminal_guard_restores_on_drop() {
    let mode = Arc::new(MockMode::default());
    {
        let _guard = TerminalGuard::with_mode(mode.clone()).unwrap();
    }

    assert_eq!(&*mode.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn terminal_restorer_is_idempotent() {
    let mode = Arc::new(MockMode::default());
    let guard = TerminalGuard::with_mode(mode.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(&*mode.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn failed_enter_returns_error() {
    assert!(TerminalGuard::with_mode(Arc::new(FailingMode)).is_err());
}

#[test]
fn signal_exit_codes() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}

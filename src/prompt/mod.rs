use std::{
    io::{self, BufRead, Write},
    sync::Arc,
};

use log::info;

#[cfg(test)]
use mockall::automock;

pub type DynPrompter = Arc<dyn Prompter + Send + Sync>;

///
/// The controller's only channel to the user surface: blocking alerts,
/// yes/no confirmations, and view-refresh requests. Kept behind a trait
/// so controller behavior is testable without a UI.
///
#[cfg_attr(test, automock)]
pub trait Prompter {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn request_reload(&self);
}

pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new_dyn() -> DynPrompter {
        Arc::new(ConsolePrompter)
    }
}

impl Prompter for ConsolePrompter {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        line.trim().eq_ignore_ascii_case("y")
    }

    fn request_reload(&self) {
        info!("View reload requested");
    }
}

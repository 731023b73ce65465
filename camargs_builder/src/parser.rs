mod interface;
mod middleware;
mod printer;

pub use interface::{ConsoleInterface, UserInterface};
pub use middleware::GeneralParser;
pub use printer::ErrorContext;
pub(crate) use printer::{ArgumentParameter, OptionParameter, Printer};

#[cfg(test)]
pub(crate) use interface::util;

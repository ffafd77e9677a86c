mod cursor;
mod scanner;
mod token;

pub use scanner::{ScanOptions, Scanner};
pub use token::{Literal, Token, TokenKind};

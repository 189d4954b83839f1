use std::str::FromStr;

use thiserror::Error;

use crate::catalog::ProductId;

/// One line typed into the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Init,
    SetQuantity { product_id: ProductId, quantity: u32 },
    Increment { product_id: ProductId },
    Decrement { product_id: ProductId },
    Heart { product_id: ProductId },
    Reset,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try: init, qty, inc, dec, heart, reset, quit)")]
    Unknown(String),

    #[error("'{command}' expects <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{value}' is not a non-negative integer")]
    InvalidNumber { value: String },

    #[error("unexpected argument '{0}'")]
    TrailingArgument(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "init" => Command::Init,
            "reset" => Command::Reset,
            "quit" | "exit" => Command::Quit,
            "qty" => Command::SetQuantity {
                product_id: number(words.next(), "qty", "id")?,
                quantity: number(words.next(), "qty", "quantity")?,
            },
            "inc" => Command::Increment {
                product_id: number(words.next(), "inc", "id")?,
            },
            "dec" => Command::Decrement {
                product_id: number(words.next(), "dec", "id")?,
            },
            "heart" => Command::Heart {
                product_id: number(words.next(), "heart", "id")?,
            },
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::TrailingArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn number(
    word: Option<&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<u32, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument { command, argument })?;
    word.parse().map_err(|_| CommandError::InvalidNumber {
        value: word.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        assert_eq!("init".parse::<Command>(), Ok(Command::Init));
        assert_eq!("  RESET ".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!(
            "qty 1 3".parse::<Command>(),
            Ok(Command::SetQuantity {
                product_id: 1,
                quantity: 3
            })
        );
        assert_eq!("inc 2".parse::<Command>(), Ok(Command::Increment { product_id: 2 }));
        assert_eq!("dec 2".parse::<Command>(), Ok(Command::Decrement { product_id: 2 }));
        assert_eq!("heart 5".parse::<Command>(), Ok(Command::Heart { product_id: 5 }));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "buy 1".parse::<Command>(),
            Err(CommandError::Unknown("buy".into()))
        );
        assert_eq!(
            "qty 1".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "qty",
                argument: "quantity"
            })
        );
        assert_eq!(
            "qty 1 -3".parse::<Command>(),
            Err(CommandError::InvalidNumber { value: "-3".into() })
        );
        assert_eq!(
            "heart 1 2".parse::<Command>(),
            Err(CommandError::TrailingArgument("2".into()))
        );
    }
}

use std::fmt;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character not in the alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// The input string is empty
    EmptyInput,
    /// The decoded value does not fit in 64 bits
    OutOfRange { input: String, length: usize },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: truncate_input(input),
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(input: &str) -> Self {
        DecodeError::OutOfRange {
            input: truncate_input(input),
            length: input.chars().count(),
        }
    }

    /// Whether the input itself is malformed (bad character or empty).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DecodeError::InvalidCharacter { .. } | DecodeError::EmptyInput
        )
    }

    /// Whether the input is well formed but names a value above `u64::MAX`.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, DecodeError::OutOfRange { .. })
    }
}

fn truncate_input(input: &str) -> String {
    match input.char_indices().nth(60) {
        Some((idx, _)) => format!("{}...", &input[..idx]),
        None => input.to_string(),
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid character {c:?} at position {position}"),
                )?;
                writeln!(f)?;
                writeln!(f)?;

                // Caret goes under the char, not the byte offset
                let char_position = input
                    .char_indices()
                    .take_while(|(i, _)| i < position)
                    .count();
                writeln!(f, "  {input}")?;
                write!(f, "  {}", " ".repeat(char_position))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                write_hint(f, use_color, &format!("valid characters: {valid_chars}"))
            }
            DecodeError::EmptyInput => write_header(f, use_color, "cannot decode empty input"),
            DecodeError::OutOfRange { input, length } => {
                write_header(f, use_color, "decoded value does not fit in 64 bits")?;
                writeln!(f)?;
                writeln!(f)?;
                writeln!(f, "  {input} ({length} characters)")?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    &format!(
                        "identifiers are at most {} characters and at most {:?}",
                        crate::MAX_LEN,
                        crate::encode(u64::MAX)
                    ),
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// A caller-supplied argument that is not a valid unsigned 64-bit integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    pub argument: String,
    pub reason: String,
}

impl InvalidArgumentError {
    pub fn new(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        write_header(
            f,
            use_color,
            &format!("invalid argument {:?}: {}", self.argument, self.reason),
        )?;
        writeln!(f)?;
        writeln!(f)?;
        write_hint(
            f,
            use_color,
            &format!("expected an integer between 0 and {}", u64::MAX),
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {message}")
    } else {
        write!(f, "error: {message}")
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {message}")
    } else {
        write!(f, "hint: {message}")
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

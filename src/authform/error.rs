use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    Config(String),
    Simulator(String),
    Script(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Config(message) => write!(formatter, "Config error: {message}"),
            FormError::Simulator(message) => write!(formatter, "Submission error: {message}"),
            FormError::Script(message) => write!(formatter, "Script error: {message}"),
        }
    }
}

impl std::error::Error for FormError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_category() {
        assert_eq!(
            FormError::Config("bad rate".to_string()).to_string(),
            "Config error: bad rate"
        );
        assert_eq!(
            FormError::Simulator("too slow".to_string()).to_string(),
            "Submission error: too slow"
        );
        assert_eq!(
            FormError::Script("line 3".to_string()).to_string(),
            "Script error: line 3"
        );
    }
}

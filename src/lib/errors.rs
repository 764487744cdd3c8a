use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    FileRead(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::FileRead(message) => write!(formatter, "File read error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_prefixes_the_error_kind() {
        assert_eq!(
            AppError::Config("bad level".to_string()).to_string(),
            "Config error: bad level"
        );
        assert_eq!(
            AppError::FileRead("aborted".to_string()).to_string(),
            "File read error: aborted"
        );
    }
}

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum HexmixError {
    #[error(transparent)]
    Color(#[from] hexmix::Error),

    #[error("could not parse number '{0}'")]
    NumberParse(String),

    #[error("unknown response curve '{0}'")]
    UnknownScale(String),

    #[error("could not read from standard input")]
    CouldNotReadFromStdin,

    #[error("output stream closed")]
    StdoutClosed,

    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for HexmixError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe => HexmixError::StdoutClosed,
            _ => HexmixError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, HexmixError>;

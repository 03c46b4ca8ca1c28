#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed transition in line {line}: `{record}` (expected SOURCE:SYMBOL>DEST)")]
    MalformedTransition { line: usize, record: String },
}

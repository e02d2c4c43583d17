use thiserror::Error;

/// Fallos de parseo SQL. Quien llama decide si son fatales: la tarea de
/// linaje los registra y los propaga.
#[derive(Debug, Error)]
pub enum SqlError {
    #[error("unsupported sql dialect: {0}")]
    UnsupportedDialect(String),
    #[error("sql parse error: {0}")]
    Parse(#[from] sqlparser::parser::ParserError),
}

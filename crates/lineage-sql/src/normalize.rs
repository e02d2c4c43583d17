//! Normalización de sentencias: parseo con dialecto y re-render canónico.

use sqlparser::dialect::dialect_from_str;
use sqlparser::parser::Parser;

use crate::error::SqlError;

/// Parsea `sql` con el dialecto dado y devuelve cada sentencia re-rendida
/// en su forma canónica. Falla si el dialecto es desconocido o la sintaxis
/// es inválida.
pub fn normalize(sql: &str, dialect: &str) -> Result<Vec<String>, SqlError> {
    let dialect = dialect_from_str(dialect).ok_or_else(|| SqlError::UnsupportedDialect(dialect.to_string()))?;
    let statements = Parser::parse_sql(dialect.as_ref(), sql)?;
    Ok(statements.iter().map(|s| s.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_multiple_statements() {
        let sql = "select a from t1; select b from t2";
        let statements = normalize(sql, "snowflake").expect("parse");
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0], "SELECT a FROM t1");
    }

    #[test]
    fn unknown_dialect_is_an_error() {
        let err = normalize("SELECT 1", "no-such-dialect").expect_err("should fail");
        assert!(matches!(err, SqlError::UnsupportedDialect(_)));
    }

    #[test]
    fn invalid_syntax_is_an_error() {
        let err = normalize("SELECT FROM WHERE", "generic").expect_err("should fail");
        assert!(matches!(err, SqlError::Parse(_)));
    }
}

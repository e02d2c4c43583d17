//! Linaje a nivel de tabla: dado un script SQL, recupera las tablas leídas
//! (in_tables) y escritas (out_tables).
//!
//! Cobertura: SELECT (incluyendo joins, subqueries, CTEs y operaciones de
//! conjunto), INSERT ... SELECT, CTAS y CREATE VIEW. Los nombres de CTE no
//! cuentan como tablas de entrada. Las sentencias no reconocidas no
//! aportan nada (listas vacías, nunca un error).

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use sqlparser::ast::{ObjectName, Query, SetExpr, Statement, TableFactor, TableObject, TableWithJoins};
use sqlparser::dialect::dialect_from_str;
use sqlparser::parser::Parser;

use crate::error::SqlError;

/// Referencia a una tabla: base de datos y schema opcionales, nombre
/// siempre presente.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TableReference {
    pub database: Option<String>,
    pub schema: Option<String>,
    pub name: String,
}

impl TableReference {
    /// Nombre calificado: concatena base de datos, schema y nombre con `.`
    /// como separador. Las partes vacías no aportan nada, ni siquiera un
    /// separador suelto.
    pub fn qualified(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if let Some(db) = self.database.as_deref() {
            if !db.is_empty() {
                parts.push(db);
            }
        }
        if let Some(schema) = self.schema.as_deref() {
            if !schema.is_empty() {
                parts.push(schema);
            }
        }
        if !self.name.is_empty() {
            parts.push(&self.name);
        }
        parts.join(".")
    }
}

impl fmt::Display for TableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified())
    }
}

/// Resultado estructural de la extracción: tablas leídas y escritas,
/// deduplicadas y en orden determinista.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlLineage {
    pub in_tables: Vec<TableReference>,
    pub out_tables: Vec<TableReference>,
}

/// Extrae el linaje de tablas de `sql` usando el dialecto dado.
pub fn extract_tables(sql: &str, dialect: &str) -> Result<SqlLineage, SqlError> {
    let dialect = dialect_from_str(dialect).ok_or_else(|| SqlError::UnsupportedDialect(dialect.to_string()))?;
    let statements = Parser::parse_sql(dialect.as_ref(), sql)?;

    let mut inputs: BTreeSet<TableReference> = BTreeSet::new();
    let mut outputs: BTreeSet<TableReference> = BTreeSet::new();

    for stmt in &statements {
        match stmt {
            Statement::Query(query) => {
                collect_query(query, &mut HashSet::new(), &mut inputs);
            }
            Statement::Insert(insert) => {
                if let TableObject::TableName(name) = &insert.table {
                    if let Some(target) = table_reference(name) {
                        outputs.insert(target);
                    }
                }
                if let Some(source) = &insert.source {
                    collect_query(source, &mut HashSet::new(), &mut inputs);
                }
            }
            Statement::CreateTable(create) => {
                // Sólo CTAS produce linaje; el DDL puro no referencia datos.
                if let Some(query) = &create.query {
                    if let Some(target) = table_reference(&create.name) {
                        outputs.insert(target);
                    }
                    collect_query(query, &mut HashSet::new(), &mut inputs);
                }
            }
            Statement::CreateView { name, query, .. } => {
                if let Some(target) = table_reference(name) {
                    outputs.insert(target);
                }
                collect_query(query, &mut HashSet::new(), &mut inputs);
            }
            _ => {}
        }
    }

    Ok(SqlLineage { in_tables: inputs.into_iter().collect(),
                    out_tables: outputs.into_iter().collect() })
}

fn table_reference(name: &ObjectName) -> Option<TableReference> {
    let mut parts: Vec<String> = Vec::with_capacity(name.0.len());
    for part in &name.0 {
        parts.push(part.as_ident()?.value.clone());
    }
    let name = parts.pop()?;
    let schema = parts.pop();
    let database = parts.pop();
    Some(TableReference { database, schema, name })
}

fn collect_query(query: &Query, ctes: &mut HashSet<String>, out: &mut BTreeSet<TableReference>) {
    if let Some(with) = &query.with {
        for cte in &with.cte_tables {
            collect_query(&cte.query, ctes, out);
            ctes.insert(cte.alias.name.value.clone());
        }
    }
    collect_setexpr(&query.body, ctes, out);
}

fn collect_setexpr(body: &SetExpr, ctes: &mut HashSet<String>, out: &mut BTreeSet<TableReference>) {
    match body {
        SetExpr::Select(select) => {
            for twj in &select.from {
                collect_table_with_joins(twj, ctes, out);
            }
        }
        SetExpr::Query(inner) => collect_query(inner, ctes, out),
        SetExpr::SetOperation { left, right, .. } => {
            collect_setexpr(left, ctes, out);
            collect_setexpr(right, ctes, out);
        }
        _ => {}
    }
}

fn collect_table_with_joins(twj: &TableWithJoins, ctes: &mut HashSet<String>, out: &mut BTreeSet<TableReference>) {
    collect_factor(&twj.relation, ctes, out);
    for join in &twj.joins {
        collect_factor(&join.relation, ctes, out);
    }
}

fn collect_factor(factor: &TableFactor, ctes: &mut HashSet<String>, out: &mut BTreeSet<TableReference>) {
    match factor {
        TableFactor::Table { name, .. } => {
            if let Some(table) = table_reference(name) {
                // Un nombre simple que coincide con un CTE visible no es tabla base.
                let is_cte = table.database.is_none() && table.schema.is_none() && ctes.contains(&table.name);
                if !is_cte {
                    out.insert(table);
                }
            }
        }
        TableFactor::Derived { subquery, .. } => collect_query(subquery, ctes, out),
        TableFactor::NestedJoin { table_with_joins, .. } => collect_table_with_joins(table_with_joins, ctes, out),
        _ => {}
    }
}

//! Schema scoping shared by every catalog query.

/// Schemas never reported when no explicit schema is requested.
pub const SYSTEM_SCHEMAS: [&str; 2] = ["information_schema", "pg_catalog"];

/// Which schemas a catalog query may return rows for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaScope {
    /// Exactly one named schema.
    Named(String),
    /// Every schema except [`SYSTEM_SCHEMAS`].
    UserSchemas,
}

impl SchemaScope {
    pub fn from_filter(filter: Option<&str>) -> Self {
        match filter {
            Some(name) => SchemaScope::Named(name.to_string()),
            None => SchemaScope::UserSchemas,
        }
    }

    pub fn includes(&self, schema: &str) -> bool {
        match self {
            SchemaScope::Named(name) => name == schema,
            SchemaScope::UserSchemas => !SYSTEM_SCHEMAS.contains(&schema),
        }
    }

    /// Value bound to the `$1` placeholder used by [`SchemaScope::predicate`].
    pub fn bind_value(&self) -> Option<&str> {
        match self {
            SchemaScope::Named(name) => Some(name),
            SchemaScope::UserSchemas => None,
        }
    }

    /// SQL predicate restricting `column` to this scope, parameterized on `$1`.
    pub fn predicate(column: &str) -> String {
        let excluded = SYSTEM_SCHEMAS
            .iter()
            .map(|schema| format!("'{schema}'"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("(($1::text is null and {column} not in ({excluded})) or {column} = $1::text)")
    }
}

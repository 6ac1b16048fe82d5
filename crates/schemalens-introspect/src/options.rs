/// Options that control how introspection behaves.
#[derive(Debug, Clone)]
pub struct IntrospectOptions {
    /// Restrict extraction to this schema. `None` means every user schema.
    pub schema: Option<String>,
    pub include_views: bool,
    pub include_indexes: bool,
    pub include_comments: bool,
}

impl IntrospectOptions {
    /// Default options restricted to an optional schema.
    pub fn for_schema(schema: Option<&str>) -> Self {
        Self {
            schema: schema.map(str::to_string),
            ..Self::default()
        }
    }
}

impl Default for IntrospectOptions {
    fn default() -> Self {
        Self {
            schema: None,
            include_views: true,
            include_indexes: true,
            include_comments: true,
        }
    }
}

/// Whether a `pg_class.relkind` code denotes a view or materialized view.
pub fn is_view_relkind(code: i8) -> bool {
    matches!(code as u8 as char, 'v' | 'm')
}

/// Whether a `pg_constraint.contype` code denotes a primary key.
pub fn is_primary_key(code: i8) -> bool {
    code as u8 as char == 'p'
}

/// Whether a `pg_constraint.contype` code denotes a check constraint.
pub fn is_check(code: i8) -> bool {
    code as u8 as char == 'c'
}

/// Keep only the column/expression clause of an index definition.
///
/// `CREATE INDEX i ON public.t USING btree (a, lower(b)) WHERE c` becomes
/// `(a, lower(b)) WHERE c`.
pub fn strip_access_method(definition: &str) -> String {
    const USING: &str = " USING ";

    match definition.find(USING) {
        Some(idx) => {
            let after = &definition[idx + USING.len()..];
            match after.split_once(' ') {
                Some((_method, clause)) => clause.trim().to_string(),
                None => after.trim().to_string(),
            }
        }
        None => definition.trim().to_string(),
    }
}

/// `CHECK ((age >= 0))` becomes `((age >= 0))`.
pub fn strip_check_keyword(definition: &str) -> String {
    definition
        .trim()
        .strip_prefix("CHECK")
        .unwrap_or(definition)
        .trim()
        .to_string()
}

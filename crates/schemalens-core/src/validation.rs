use std::collections::{BTreeMap, BTreeSet};

use crate::constraints::UNKNOWN_COLUMN;
use crate::error::{Error, Result};
use crate::schema::DatabaseSchema;

/// Validate internal consistency of a schema snapshot.
///
/// This checks:
/// - duplicate table identities and duplicate columns
/// - primary key and unique members exist
/// - relation source columns exist when the source table is part of the snapshot
///
/// Members that resolved to the unknown-column marker are accepted.
pub fn validate_schema(schema: &DatabaseSchema) -> Result<()> {
    let mut catalog: BTreeMap<(&str, &str), BTreeSet<&str>> = BTreeMap::new();

    for table in &schema.tables {
        let key = (table.schema.as_str(), table.name.as_str());
        if catalog.contains_key(&key) {
            return Err(Error::InvalidSchema(format!(
                "duplicate table: {}.{}",
                table.schema, table.name
            )));
        }

        let mut columns = BTreeSet::new();
        for column in &table.columns {
            if !columns.insert(column.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate column name: {}.{}.{}",
                    table.schema, table.name, column.name
                )));
            }
        }

        catalog.insert(key, columns);
    }

    for table in &schema.tables {
        let columns = &catalog[&(table.schema.as_str(), table.name.as_str())];
        let check_member = |what: &str, column: &str| {
            if column == UNKNOWN_COLUMN || columns.contains(column) {
                Ok(())
            } else {
                Err(Error::InvalidSchema(format!(
                    "{what} column not found: {}.{}.{}",
                    table.schema, table.name, column
                )))
            }
        };

        if let Some(pk) = &table.primary_key {
            for column in &pk.columns {
                check_member("primary key", column)?;
            }
        }

        for unique in &table.uniques {
            for column in &unique.columns {
                check_member("unique", column)?;
            }
        }
    }

    for relation in &schema.relations {
        let key = (relation.source.schema.as_str(), relation.source.table.as_str());
        let Some(columns) = catalog.get(&key) else {
            continue;
        };

        for link in &relation.columns {
            if link.source != UNKNOWN_COLUMN && !columns.contains(link.source.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "relation {} column not found: {}.{}.{}",
                    relation.name, relation.source.schema, relation.source.table, link.source
                )));
            }
        }
    }

    Ok(())
}

//! Typed table definitions rendered to SQLite DDL.

/// Name of the table holding user rows.
pub const USERS_TABLE: &str = "Utilisateurs";

/// Schema definition for the SQLite database
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub tables: Vec<TableDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(mut self, table: TableDefinition) -> Self {
        self.tables.push(table);
        self
    }

    /// The single-table schema for user records.
    pub fn users() -> Self {
        Self::new().add_table(
            TableDefinition::new(USERS_TABLE)
                .add_column(
                    ColumnDefinition::new("id", DataType::Integer)
                        .with_constraint(ColumnConstraint::AutoIncrementKey),
                )
                .add_column(
                    ColumnDefinition::new("name", DataType::Text)
                        .with_constraint(ColumnConstraint::NotNull),
                )
                .add_column(
                    ColumnDefinition::new("email", DataType::Text)
                        .with_constraint(ColumnConstraint::NotNull),
                ),
        )
    }

    /// One `CREATE TABLE IF NOT EXISTS` statement per table.
    pub fn to_sql(&self) -> String {
        self.tables
            .iter()
            .map(TableDefinition::create_sql)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
        }
    }

    pub fn add_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    pub fn create_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(ColumnDefinition::to_sql)
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE IF NOT EXISTS {} ({});", self.name, columns)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type.as_sql());
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(constraint.as_sql());
        }
        sql
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Text,
}

impl DataType {
    fn as_sql(self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Text => "TEXT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnConstraint {
    /// Primary key whose values are never reused, even after deletes.
    AutoIncrementKey,
    NotNull,
}

impl ColumnConstraint {
    fn as_sql(self) -> &'static str {
        match self {
            ColumnConstraint::AutoIncrementKey => "PRIMARY KEY AUTOINCREMENT",
            ColumnConstraint::NotNull => "NOT NULL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_schema_renders_ddl() {
        assert_eq!(
            Schema::users().to_sql(),
            "CREATE TABLE IF NOT EXISTS Utilisateurs \
             (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, email TEXT NOT NULL);"
        );
    }
}

use crate::query::format_field;

/// SQL `LEFT (OUTER) JOIN` on a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOn {
    /// The join table.
    join_table: String,
    /// The join conditions.
    conditions: Vec<String>,
}

impl JoinOn {
    /// Constructs an instance with the `LEFT (OUTER) JOIN` type.
    #[inline]
    pub fn left_join(join_table: impl Into<String>) -> Self {
        Self {
            join_table: join_table.into(),
            conditions: Vec::new(),
        }
    }

    /// Specifies a relation for which the left column is equal to the right column.
    #[inline]
    pub fn eq(mut self, left_col: &str, right_col: &str) -> Self {
        let left_col_field = format_field(left_col);
        let right_col_field = format_field(right_col);
        self.conditions
            .push(format!("{left_col_field} = {right_col_field}"));
        self
    }

    /// Returns the join table name.
    #[inline]
    pub fn join_table(&self) -> &str {
        &self.join_table
    }

    /// Formats the conditions.
    #[inline]
    pub fn format_conditions(&self) -> String {
        self.conditions.join(" AND ")
    }

    /// Formats the join clause.
    pub(crate) fn format(&self) -> String {
        let join_table = format_field(&self.join_table);
        let conditions = self.format_conditions();
        if conditions.is_empty() {
            format!("LEFT JOIN {join_table}")
        } else {
            format!("LEFT JOIN {join_table} ON {conditions}")
        }
    }
}

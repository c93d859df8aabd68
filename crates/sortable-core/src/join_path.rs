/// Trailing segment which moves the foreign key into the base table.
const FLIP_TOKEN: &str = "flip";

/// Primary key column of the table a foreign key refers to.
const PRIMARY_KEY: &str = "id";

/// A sort field spanning a join, written as
/// `base_table.join_table.foreign_key.sort_column[.flip]`.
///
/// Without the `flip` segment the foreign key lives in the joined table and
/// refers to `base_table.id`. With it, the foreign key lives in the base table
/// and refers to `join_table.id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinPath<'a> {
    /// The table being queried.
    base_table: &'a str,
    /// The table joined for ordering.
    join_table: &'a str,
    /// The foreign key column.
    foreign_key: &'a str,
    /// The column of the joined table to sort by.
    sort_column: &'a str,
    /// Whether the foreign key lives in the base table.
    flip: bool,
}

impl<'a> JoinPath<'a> {
    /// Splits a dotted field into a join path.
    ///
    /// Returns `None` unless the field has exactly four non-empty segments,
    /// or five with the last one being `flip`.
    pub fn parse(field: &'a str) -> Option<Self> {
        let mut segments = field.split('.');
        let base_table = segments.next()?;
        let join_table = segments.next()?;
        let foreign_key = segments.next()?;
        let sort_column = segments.next()?;
        let flip = match segments.next() {
            None => false,
            Some(FLIP_TOKEN) => true,
            Some(_) => return None,
        };
        if segments.next().is_some()
            || [base_table, join_table, foreign_key, sort_column]
                .iter()
                .any(|s| s.is_empty())
        {
            return None;
        }
        Some(Self {
            base_table,
            join_table,
            foreign_key,
            sort_column,
            flip,
        })
    }

    /// Returns the base table name.
    #[inline]
    pub fn base_table(&self) -> &'a str {
        self.base_table
    }

    /// Returns the joined table name.
    #[inline]
    pub fn join_table(&self) -> &'a str {
        self.join_table
    }

    /// Returns the foreign key column name.
    #[inline]
    pub fn foreign_key(&self) -> &'a str {
        self.foreign_key
    }

    /// Returns the sort column name.
    #[inline]
    pub fn sort_column(&self) -> &'a str {
        self.sort_column
    }

    /// Returns `true` if the foreign key lives in the base table.
    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.flip
    }

    /// Returns the left and right columns of the join condition.
    pub fn join_columns(&self) -> (String, String) {
        if self.flip {
            (
                [self.base_table, ".", self.foreign_key].concat(),
                [self.join_table, ".", PRIMARY_KEY].concat(),
            )
        } else {
            (
                [self.join_table, ".", self.foreign_key].concat(),
                [self.base_table, ".", PRIMARY_KEY].concat(),
            )
        }
    }

    /// Returns the qualified sort column.
    #[inline]
    pub fn sort_field(&self) -> String {
        [self.join_table, ".", self.sort_column].concat()
    }

    /// Returns the projection which keeps joined columns out of the result.
    #[inline]
    pub fn projection(&self) -> String {
        [self.base_table, ".*"].concat()
    }
}

//! Small SQL WHERE-clause builder for restaurant search.
//!
//! Search filters are all optional, so the clause is assembled dynamically
//! while tracking parameter indices; values are then bound in the same order
//! the conditions were added.

/// Builder for constructing SQL WHERE clauses with parameter tracking.
#[derive(Debug, Default)]
pub struct WhereBuilder {
    conditions: Vec<String>,
    param_idx: usize,
}

impl WhereBuilder {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            param_idx: 1,
        }
    }

    /// Adds a case-insensitive equality condition on a text column.
    pub fn add_text_eq(&mut self, column: &str) -> &mut Self {
        let idx = self.next_param_idx();
        self.conditions
            .push(format!("LOWER({column}) = LOWER(${idx})"));
        self
    }

    /// Adds a case-insensitive substring match on a text column. The bound
    /// value must already carry its `%` wildcards.
    pub fn add_text_like(&mut self, column: &str) -> &mut Self {
        let idx = self.next_param_idx();
        self.conditions
            .push(format!("LOWER({column}) LIKE LOWER(${idx})"));
        self
    }

    /// Adds a `column >= $n` condition.
    pub fn add_at_least(&mut self, column: &str) -> &mut Self {
        let idx = self.next_param_idx();
        self.conditions.push(format!("{column} >= ${idx}"));
        self
    }

    fn next_param_idx(&mut self) -> usize {
        let idx = self.param_idx;
        self.param_idx += 1;
        idx
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Builds the full WHERE clause including the "WHERE" keyword.
    /// Returns "WHERE 1=1" if no conditions (always true).
    pub fn build_where_clause(&self) -> String {
        if self.conditions.is_empty() {
            "WHERE 1=1".to_string()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }
}

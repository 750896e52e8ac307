//! Identifier filters and the parameterized predicates built from them.
//!
//! Patterns use SQLite `GLOB` syntax (`*`, `?`, `[...]`), which is
//! case-sensitive. Pattern values are always bound as parameters; only
//! column names chosen by this crate end up in the SQL text.

use rusqlite::types::Value;

/// Exclude pattern for private identifiers (those starting with `_`).
pub const PRIVATE_GLOB: &str = "_*";

/// Which applications an operation applies to.
///
/// An application matches when its identifier matches any include pattern
/// (or there are none) and matches none of the exclude patterns. With
/// `skip_private` set, [`PRIVATE_GLOB`] is excluded on top of `exclude`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub skip_private: bool,
}

impl Default for AppFilter {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            skip_private: true,
        }
    }
}

impl AppFilter {
    /// Default filter: everything except private identifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter that matches every application, private ones included.
    pub fn all() -> Self {
        Self::new().skip_private(false)
    }

    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    pub fn skip_private(mut self, skip: bool) -> Self {
        self.skip_private = skip;
        self
    }

    /// True when the filter places no restriction at all.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty() && !self.skip_private
    }

    /// Effective exclude patterns: explicit ones first, then the private glob.
    pub fn exclude_patterns(&self) -> impl Iterator<Item = &str> {
        self.exclude
            .iter()
            .map(String::as_str)
            .chain(self.skip_private.then_some(PRIVATE_GLOB))
    }

    /// Build the predicate over `column`, or `None` if the filter is empty.
    pub fn predicate(&self, column: &str) -> Option<Predicate> {
        let mut parts = Vec::new();

        if !self.include.is_empty() {
            let any = self
                .include
                .iter()
                .map(|p| Predicate::new(format!("{column} GLOB ?"), vec![text(p)]));
            parts.push(Predicate::any(any)?);
        }
        parts.extend(
            self.exclude_patterns()
                .map(|p| Predicate::new(format!("{column} NOT GLOB ?"), vec![text(p)])),
        );

        Predicate::all(parts)
    }
}

/// A boolean SQL fragment with positional `?` placeholders and the values
/// bound to them, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    sql: String,
    params: Vec<Value>,
}

impl Predicate {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// `column IN (?, ?, ...)` over integer ids.
    ///
    /// An empty id list yields `column IN ()`, which matches no row.
    pub fn in_ids(column: &str, ids: &[i64]) -> Self {
        let placeholders = vec!["?"; ids.len()].join(", ");
        Self::new(
            format!("{column} IN ({placeholders})"),
            ids.iter().copied().map(Value::Integer).collect(),
        )
    }

    /// Conjunction of all predicates; `None` when there are none.
    pub fn all(preds: impl IntoIterator<Item = Predicate>) -> Option<Self> {
        Self::join(preds, " AND ")
    }

    /// Disjunction of all predicates; `None` when there are none.
    pub fn any(preds: impl IntoIterator<Item = Predicate>) -> Option<Self> {
        Self::join(preds, " OR ")
    }

    fn join(preds: impl IntoIterator<Item = Predicate>, op: &str) -> Option<Self> {
        let preds: Vec<Predicate> = preds.into_iter().collect();
        match preds.len() {
            0 => None,
            1 => preds.into_iter().next(),
            _ => {
                let sql = preds
                    .iter()
                    .map(|p| format!("({})", p.sql))
                    .collect::<Vec<_>>()
                    .join(op);
                let params = preds.into_iter().flat_map(|p| p.params).collect();
                Some(Self::new(sql, params))
            }
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// Render an optional predicate as a ` WHERE ...` clause plus its parameters.
pub(crate) fn where_clause(pred: Option<Predicate>) -> (String, Vec<Value>) {
    match pred {
        Some(p) => (format!(" WHERE {}", p.sql), p.params),
        None => (String::new(), Vec::new()),
    }
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<Value> {
        values.iter().map(|v| text(v)).collect()
    }

    #[test]
    fn empty_filter_has_no_predicate() {
        let filter = AppFilter::all();
        assert!(filter.is_empty());
        assert_eq!(filter.predicate("identifier"), None);
    }

    #[test]
    fn default_filter_excludes_private() {
        let pred = AppFilter::new().predicate("identifier").unwrap();
        assert_eq!(pred.sql(), "identifier NOT GLOB ?");
        assert_eq!(pred.params(), texts(&["_*"]).as_slice());
    }

    #[test]
    fn includes_are_ored() {
        let pred = AppFilter::all()
            .include("com.apple.*")
            .include("org.mozilla.firefox")
            .predicate("app.identifier")
            .unwrap();
        assert_eq!(
            pred.sql(),
            "(app.identifier GLOB ?) OR (app.identifier GLOB ?)"
        );
        assert_eq!(
            pred.params(),
            texts(&["com.apple.*", "org.mozilla.firefox"]).as_slice()
        );
    }

    #[test]
    fn includes_and_excludes_are_conjoined() {
        let pred = AppFilter::new()
            .include("com.*")
            .include("org.*")
            .exclude("com.apple.*")
            .predicate("identifier")
            .unwrap();
        assert_eq!(
            pred.sql(),
            "((identifier GLOB ?) OR (identifier GLOB ?)) AND (identifier NOT GLOB ?) AND (identifier NOT GLOB ?)"
        );
        assert_eq!(
            pred.params(),
            texts(&["com.*", "org.*", "com.apple.*", "_*"]).as_slice()
        );
    }

    #[test]
    fn pattern_text_never_reaches_sql() {
        let hostile = "x' OR 1=1 --";
        let pred = AppFilter::all().include(hostile).predicate("identifier").unwrap();
        assert!(!pred.sql().contains(hostile));
        assert_eq!(pred.params(), texts(&[hostile]).as_slice());
    }

    #[test]
    fn empty_id_list_keeps_in_clause() {
        let pred = Predicate::in_ids("app_id", &[]);
        assert_eq!(pred.sql(), "app_id IN ()");
        assert!(pred.params().is_empty());

        let pred = Predicate::in_ids("app_id", &[3, 7]);
        assert_eq!(pred.sql(), "app_id IN (?, ?)");
        assert_eq!(pred.params(), &[Value::Integer(3), Value::Integer(7)]);
    }

    #[test]
    fn where_clause_renders_only_when_present() {
        assert_eq!(where_clause(None), (String::new(), Vec::new()));
        let (sql, params) = where_clause(Some(Predicate::in_ids("app_id", &[1])));
        assert_eq!(sql, " WHERE app_id IN (?)");
        assert_eq!(params, vec![Value::Integer(1)]);
    }
}

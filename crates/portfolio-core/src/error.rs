/// Errors raised while driving a section's edit dialog.
///
/// Lookup misses (editing or deleting a key that is not in the store) are not
/// errors; controllers treat them as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("{section} is read-only: authoring mode is off")]
    ReadOnly { section: &'static str },

    #[error("an edit dialog is already open in {section}")]
    SessionOpen { section: &'static str },

    #[error("no edit dialog is open in {section}")]
    NoOpenSession { section: &'static str },

    #[error("unknown field `{field}` for {section}")]
    UnknownField { section: &'static str, field: String },

    #[error("`{value}` is not an allowed value for {field}")]
    InvalidChoice { field: &'static str, value: String },

    #[error("required fields are empty: {}", .0.join(", "))]
    MissingRequired(Vec<&'static str>),

    #[error("unknown category: {0}")]
    UnknownGroup(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("an entry keyed `{key}` already exists in {section}")]
    DuplicateKey { section: &'static str, key: String },
}

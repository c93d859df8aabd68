use convert_case::{Case, Casing};

/// Characters stripped from both ends of a raw sort directive.
const TRIMMED_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Trims the whitespace and control characters surrounding a sort directive.
#[inline]
pub(crate) fn trim_value(value: &str) -> &str {
    value.trim_matches(&TRIMMED_CHARS[..])
}

/// Formats the name of a custom sort handler for the field,
/// e.g. `user_name` becomes `SortUserName`.
#[inline]
pub(crate) fn format_handler_name(field: &str) -> String {
    ["Sort", &field.to_case(Case::Pascal)].concat()
}

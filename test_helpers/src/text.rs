//! Text helpers for behavioural test suites.

use anyhow::{Result, anyhow};

/// Strips one layer of matching single or double quotes after trimming.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(trimmed)
        .to_owned()
}

/// Splits a shell-style command line into arguments.
///
/// # Errors
///
/// Returns an error when the quoting is unbalanced.
///
/// # Examples
///
/// ```
/// use test_helpers::text::command_line;
///
/// let args = command_line(r#"prog --name "Ann Lee" -x"#).expect("balanced quotes");
/// assert_eq!(args, ["prog", "--name", "Ann Lee", "-x"]);
/// ```
pub fn command_line(line: &str) -> Result<Vec<String>> {
    shlex::split(line).ok_or_else(|| anyhow!("unbalanced quoting in command line: {line}"))
}

/// Splits a comma-separated placeholder into trimmed, non-empty items.
#[must_use]
pub fn csv_items(value: &str) -> Vec<String> {
    normalize_scalar(value)
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{command_line, csv_items, normalize_scalar};

    #[test]
    fn normalize_scalar_trims_and_unquotes() {
        assert_eq!(normalize_scalar("  'value'  "), "value");
        assert_eq!(normalize_scalar("\"value\""), "value");
        assert_eq!(normalize_scalar("'open"), "'open");
    }

    #[test]
    fn command_line_rejects_unbalanced_quotes() {
        assert!(command_line("prog 'open").is_err());
    }

    #[test]
    fn csv_items_skips_blanks() {
        assert_eq!(csv_items("a, b,,c"), ["a", "b", "c"]);
        assert!(csv_items("''").is_empty());
    }
}

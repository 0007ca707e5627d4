//! # Minimal CSV Codec
//!
//! Header-row tabular encoding for the policy table and findings report.
//! Fields containing a comma, double quote, or newline are quoted with
//! doubled inner quotes; everything else is written bare. Parsing
//! accepts both forms and reports structural problems as strings for
//! the caller to wrap with path context.

/// Encode one row, escaping fields as needed. No trailing newline.
pub fn encode_row(fields: &[&str]) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if field.contains([',', '"', '\n', '\r']) {
            out.push('"');
            for ch in field.chars() {
                if ch == '"' {
                    out.push('"');
                }
                out.push(ch);
            }
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out
}

/// Parse one row into its fields.
pub fn parse_row(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    current.push('"');
                }
                '"' => in_quotes = false,
                _ => current.push(ch),
            }
        } else {
            match ch {
                '"' if current.is_empty() => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".into());
    }
    fields.push(current);
    Ok(fields)
}

/// Parse a whole document into `(header, rows)`, skipping blank lines.
///
/// Every row must have the same field count as the header.
pub fn parse(content: &str) -> Result<(Vec<String>, Vec<Vec<String>>), String> {
    let mut lines = content
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.is_empty());

    let header = match lines.next() {
        Some(line) => parse_row(line)?,
        None => return Err("empty document, expected a header row".into()),
    };

    let mut rows = Vec::new();
    for (i, line) in lines.enumerate() {
        let row = parse_row(line).map_err(|e| format!("row {}: {e}", i + 1))?;
        if row.len() != header.len() {
            return Err(format!(
                "row {}: expected {} columns, found {}",
                i + 1,
                header.len(),
                row.len()
            ));
        }
        rows.push(row);
    }
    Ok((header, rows))
}

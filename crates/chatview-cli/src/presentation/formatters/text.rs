/// Prefix every line of `text` with `indent`; keeps empty lines empty.
pub fn indent_lines(text: &str, indent: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn rule(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_lines_keeps_blank_lines() {
        assert_eq!(indent_lines("a\n\nb", "  "), "  a\n\n  b");
    }
}

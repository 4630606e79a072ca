/// Path segment the trace viewer serves traces under.
pub const TRACE_PATH: &str = "/wachines/traces/";

/// Build the outbound trace-viewer link for an event.
///
/// Plain concatenation; neither part is validated.
pub fn trace_link(trace_base_url: &str, trace_id: &str) -> String {
    format!("{}{}{}", trace_base_url, TRACE_PATH, trace_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_link() {
        assert_eq!(
            trace_link("https://trace.example", "abc123"),
            "https://trace.example/wachines/traces/abc123"
        );
    }

    #[test]
    fn test_trace_link_does_not_validate() {
        assert_eq!(trace_link("", ""), "/wachines/traces/");
        assert_eq!(
            trace_link("http://x", "a b/c"),
            "http://x/wachines/traces/a b/c"
        );
    }
}

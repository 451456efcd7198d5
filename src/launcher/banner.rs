//! Startup banner.
//!
//! The banner content is static: the service title, the URL the
//! dashboard will be reachable at, the feature list, and the CTRL+C
//! notice. It prints to stdout before the launcher touches the
//! filesystem, so a failed launch still shows what was being started.

const RULE: &str = "============================================================";

/// The exact banner lines, in print order.
pub const BANNER_LINES: &[&str] = &[
    RULE,
    "TRENDS DASHBOARD SERVICE",
    RULE,
    "",
    "Starting dashboard service...",
    "Dashboard will be available at: http://localhost:8051",
    "",
    "Features:",
    "  - Overview: trend analysis with search interest data",
    "  - Trends: state-wise analysis & blog reports",
    "  - Reports: multi-timeframe comprehensive analysis",
    "",
    "Press CTRL+C to stop the server",
    RULE,
    "",
];

/// Render the banner as a single string.
pub fn render() -> String {
    let mut out = String::new();
    for line in BANNER_LINES {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Write the banner to stdout.
pub fn print_banner() {
    print!("{}", render());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_opens_and_closes_with_rule() {
        assert_eq!(BANNER_LINES.first(), Some(&RULE));
        assert_eq!(BANNER_LINES[2], RULE);
        assert_eq!(BANNER_LINES[BANNER_LINES.len() - 2], RULE);
    }

    #[test]
    fn banner_names_title_before_features() {
        let title = BANNER_LINES
            .iter()
            .position(|l| l.contains("TRENDS DASHBOARD SERVICE"))
            .unwrap();
        let features = BANNER_LINES
            .iter()
            .position(|l| l.starts_with("Features:"))
            .unwrap();
        assert!(title < features);
    }

    #[test]
    fn banner_names_service_url_and_interrupt() {
        let text = render();
        assert!(text.contains("http://localhost:8051"));
        assert!(text.contains("Press CTRL+C to stop the server"));
    }

    #[test]
    fn render_preserves_line_order() {
        let rendered = render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, BANNER_LINES);
    }

    #[test]
    fn rule_is_sixty_chars() {
        assert_eq!(RULE.len(), 60);
    }
}

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("chat-cli").chain(args.iter().copied())).unwrap()
}

#[test]
fn slow_ms_overrides_widget_threshold() {
    let cli = parse(&["--slow-ms", "1", "send", "hi"]);
    assert!((widget_config(&cli).slow_response_ms - 1.0).abs() < f64::EPSILON);
}

#[test]
fn default_threshold_is_kept_without_flag() {
    let cli = parse(&["send", "hi"]);
    let config = widget_config(&cli);
    assert!((config.slow_response_ms - widget::config::DEFAULT_SLOW_RESPONSE_MS).abs() < f64::EPSILON);
    assert_eq!(config.endpoint, "/api/chat");
}

#[test]
fn output_format_follows_flags() {
    assert_eq!(output_format(&parse(&["repl"])), OutputFormat::Text);
    assert_eq!(output_format(&parse(&["--html", "repl"])), OutputFormat::Html);
    assert_eq!(output_format(&parse(&["--json", "repl"])), OutputFormat::Json);
}

#[test]
fn html_and_json_conflict() {
    assert!(Cli::try_parse_from(["chat-cli", "--html", "--json", "repl"]).is_err());
}

use atty::Stream;
use color_eyre::Result;
use serde_json::Value;
use strata_core::{CommandStatus, ExecutionOutcome};

use crate::style::Style;

#[derive(Clone, Copy, Debug)]
pub struct OutputOptions {
    pub quiet: bool,
    pub json: bool,
    pub no_color: bool,
}

pub fn emit_output(
    opts: &OutputOptions,
    command: &str,
    outcome: &ExecutionOutcome,
) -> Result<i32> {
    let code = outcome.exit_code();
    let style = Style::new(opts.no_color, atty::is(Stream::Stdout));

    if opts.json {
        let payload = strata_core::to_json_response(command, outcome);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(code);
    }

    let message = strata_core::format_status_message(command, &outcome.message);
    if outcome.status == CommandStatus::Ok {
        if !opts.quiet {
            println!("{}", style.status(outcome.status, &message));
            if let Some(lines) = render_layers(&style, &outcome.details) {
                println!("{lines}");
            }
        }
    } else {
        eprintln!("{}", style.status(outcome.status, &message));
        if let Some(hint) = hint_from_details(&outcome.details) {
            eprintln!("{}", style.info(&format!("Hint: {hint}")));
        }
    }
    Ok(code)
}

fn hint_from_details(details: &Value) -> Option<&str> {
    details
        .as_object()
        .and_then(|map| map.get("hint"))
        .and_then(Value::as_str)
}

/// One block per populated layer: a header with the entry count, then
/// `source -> destination` lines in archive order.
fn render_layers(style: &Style, details: &Value) -> Option<String> {
    let layers = details.get("layers")?.as_array()?;
    let mut lines = Vec::new();
    for layer in layers {
        let entries = layer.get("entries").and_then(Value::as_array)?;
        if entries.is_empty() {
            continue;
        }
        let label = layer.get("label").and_then(Value::as_str).unwrap_or("layer");
        lines.push(format!("  {}", style.layer_header(label, entries.len())));
        for entry in entries {
            let source = entry.get("source").and_then(Value::as_str).unwrap_or("");
            let destination = entry
                .get("destination")
                .and_then(Value::as_str)
                .unwrap_or("");
            lines.push(format!("    {} {} {destination}", style.dim(source), style.dim("->")));
        }
    }
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_layers_skips_empty_layers() {
        let style = Style::new(true, false);
        let details = json!({
            "layers": [
                { "label": "dependencies", "entries": [] },
                {
                    "label": "classes",
                    "entries": [
                        { "source": "/p/target/classes/A.class", "destination": "/app/classes/A.class" }
                    ]
                }
            ]
        });
        let rendered = render_layers(&style, &details).expect("rendered");
        assert_eq!(
            rendered,
            "  classes (1)\n    /p/target/classes/A.class -> /app/classes/A.class"
        );
    }

    #[test]
    fn render_layers_ignores_other_commands() {
        let style = Style::new(true, false);
        assert!(render_layers(&style, &json!({ "entrypoint": ["java"] })).is_none());
    }
}

//! Presentation Layer
//!
//! Pure rendering of a [`SessionSnapshot`] into the input pane and the result pane.
//! Nothing here holds state; rendering the same snapshot twice yields the same view.

use crate::workflow::{FailureKind, SessionSnapshot};
use owo_colors::OwoColorize;
use serde::Serialize;

pub const SUBMIT_LABEL_IDLE: &str = "Generate";
pub const SUBMIT_LABEL_PENDING: &str = "Generating...";
pub const SUCCESS_BANNER: &str = "Service generated successfully";

/// Submit trigger state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputPane {
    pub requirement: String,
    pub submit: SubmitControl,
}

/// One produced file, keyed by its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLine {
    pub key: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPane {
    pub banner: &'static str,
    pub files: Vec<FileLine>,
    pub endpoint: String,
}

/// Shown when the most recent submission failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureNotice {
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub input: InputPane,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<FailureNotice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultPane>,
}

pub fn submit_control(snapshot: &SessionSnapshot) -> SubmitControl {
    SubmitControl {
        enabled: snapshot.can_submit(),
        label: if snapshot.in_flight() {
            SUBMIT_LABEL_PENDING
        } else {
            SUBMIT_LABEL_IDLE
        },
    }
}

pub fn render(snapshot: &SessionSnapshot) -> View {
    let input = InputPane {
        requirement: snapshot.requirement.clone(),
        submit: submit_control(snapshot),
    };

    let notice = snapshot.phase.last_failure().map(|failure| FailureNotice {
        kind: failure.kind,
        message: failure.message.clone(),
    });

    let result = snapshot.result.as_ref().map(|result| ResultPane {
        banner: SUCCESS_BANNER,
        files: result
            .files
            .iter()
            .map(|file| FileLine {
                key: file.name.clone(),
                path: file.path.clone(),
            })
            .collect(),
        endpoint: result.endpoint.clone(),
    });

    View {
        input,
        notice,
        result,
    }
}

/// Format the view as terminal text
pub fn format_view_text(view: &View, color: bool) -> String {
    let mut output = String::new();

    output.push_str("Requirement:\n");
    if view.input.requirement.is_empty() {
        output.push_str("  (empty)\n");
    } else {
        for line in view.input.requirement.lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }
    output.push_str(&format!(
        "[{}]{}\n",
        view.input.submit.label,
        if view.input.submit.enabled {
            ""
        } else {
            " (disabled)"
        }
    ));

    if let Some(notice) = &view.notice {
        let heading = format!("Generation failed ({})", notice.kind.as_str());
        if color {
            output.push_str(&format!("\n{}\n", heading.red().bold()));
        } else {
            output.push_str(&format!("\n{}\n", heading));
        }
        output.push_str(&format!("  {}\n", single_line(&notice.message)));
    }

    if let Some(result) = &view.result {
        output.push('\n');
        output.push_str(&format_result_pane_text(result, color));
    }

    output
}

/// Format only the result pane: banner, one line per file, endpoint line
pub fn format_result_pane_text(pane: &ResultPane, color: bool) -> String {
    let mut output = if color {
        format!("{}\n", pane.banner.green().bold())
    } else {
        format!("{}\n", pane.banner)
    };
    if !pane.files.is_empty() {
        output.push_str("Files:\n");
        for file in &pane.files {
            output.push_str(&format!("  - {}\n", single_line(&file.path)));
        }
    }
    output.push_str(&format!("Endpoint: {}\n", single_line(&pane.endpoint)));
    output
}

/// Backend-supplied text occupies exactly one line: control characters are escaped.
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

pub fn format_view_json(view: &View) -> String {
    serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string())
}

//! Implementation of the `spektacular new` command.
//!
//! Renders the bundled spec template into `.spektacular/specs/<name>.md`.

use crate::cli::NewArgs;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::fs::write_new_file;
use std::path::PathBuf;

const SPEC_TEMPLATE: &str = include_str!("../../defaults/spec-template.md");

/// Placeholder text for template sections the author fills in later.
const SECTION_PLACEHOLDERS: &[(&str, &str)] = &[
    ("{requirement_1}", "Add first requirement"),
    ("{requirement_2}", "Add second requirement"),
    ("{requirement_3}", "Add third requirement"),
    ("{constraint_1}", "Add first constraint"),
    ("{constraint_2}", "Add second constraint"),
    ("{criteria_1}", "Add first acceptance criterion"),
    ("{criteria_2}", "Add second acceptance criterion"),
    ("{criteria_3}", "Add third acceptance criterion"),
    ("{technical_notes}", "Add technical approach details"),
    ("{success_metrics}", "Add success metrics"),
    ("{non_goals}", "Add non-goals"),
];

/// Execute the `spektacular new` command.
pub fn cmd_new(args: NewArgs) -> Result<()> {
    let ctx = ProjectContext::resolve()?;
    ctx.require_initialized()?;

    let path = create_spec(
        &ctx,
        &args.name,
        args.title.as_deref(),
        args.description.as_deref(),
    )?;

    println!("Created spec: {}", path.display());
    Ok(())
}

/// Render the template and write it as a new spec file.
///
/// # Errors
///
/// `SpektError::UserError` if the spec file already exists.
pub fn create_spec(
    ctx: &ProjectContext,
    name: &str,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<PathBuf> {
    let title = title.map_or_else(|| default_title(name), str::to_string);
    let description = description.map_or_else(
        || format!("Add description for {} here.", title),
        str::to_string,
    );

    let path = ctx.spec_path(name);
    write_new_file(&path, &render_spec(&title, &description))?;

    tracing::debug!(path = %path.display(), "created spec");
    Ok(path)
}

/// Fill the spec template.
pub fn render_spec(title: &str, description: &str) -> String {
    let mut content = SPEC_TEMPLATE
        .replace("{title}", title)
        .replace("{description}", description);
    for (placeholder, text) in SECTION_PLACEHOLDERS {
        content = content.replace(placeholder, text);
    }
    content
}

/// `user-auth_flow` -> `User Auth Flow`.
pub fn default_title(name: &str) -> String {
    let name = name.strip_suffix(".md").unwrap_or(name);
    name.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

//! Result message templates.
//!
//! Scenario rules describe their result text as a template with named
//! placeholders. This module fills those placeholders from a [`TemplateContext`]
//! in a single pass over the template.
//!
//! # Public API
//! - [`TemplateContext`]: Values available to a template
//! - [`render_template`]: Substitute placeholders in a template
//!
//! # Placeholders
//! - `{sub}`: the subcommand as typed (`checkout`, `switch`, ...)
//! - `{arg}`: the first argument after the subcommand
//! - `{branch}`: the branch checked out when the command was submitted
//! - `{message}`: the commit message given with `-m`
//!
//! Unknown placeholders and unmatched braces are copied through unchanged.

/// Context for template rendering
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub sub: &'a str,
    pub arg: &'a str,
    pub branch: &'a str,
    pub message: &'a str,
}

/// Render a template with context
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let estimated_capacity = template.len()
        + context.sub.len()
        + context.arg.len()
        + context.branch.len()
        + context.message.len();

    let mut result = String::with_capacity(estimated_capacity);
    render_template_single_pass(template, context, &mut result);
    result
}

fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;

        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if !found_closing {
            output.push(ch);
            output.push_str(&placeholder);
            continue;
        }

        match placeholder.as_str() {
            "sub" => output.push_str(context.sub),
            "arg" => output.push_str(context.arg),
            "branch" => output.push_str(context.branch),
            "message" => output.push_str(context.message),
            _ => {
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
            }
        }
    }
}

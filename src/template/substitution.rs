//! Placeholder substitution for command bodies.
//!
//! Markdown assistants read `$ARGUMENTS` and `$1`..`$N` natively, so their
//! bodies pass through untouched. TOML assistants use `{{...}}` placeholders:
//!
//! | token        | toml            |
//! |--------------|-----------------|
//! | `$ARGUMENTS` | `{{args}}`      |
//! | `$1`         | `{{plan_id}}`   |
//! | `$N` (N > 1) | `{{argN}}`      |
//!
//! Any other `$` token (`$HOME`, `$0`, `${1}`) is left alone. Fenced code
//! blocks are not special-cased.

/// Substitution flavour for a target format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionMode {
    MarkdownPassthrough,
    Toml,
}

const ARGUMENTS_TOKEN: &str = "ARGUMENTS";

/// Replace placeholder tokens in `body` for the given mode.
pub fn substitute(body: &str, mode: SubstitutionMode) -> String {
    match mode {
        SubstitutionMode::MarkdownPassthrough => body.to_string(),
        SubstitutionMode::Toml => substitute_toml(body),
    }
}

/// Single left-to-right pass; positional tokens consume their whole digit run
/// so `$12` never matches as `$1` followed by `2`.
fn substitute_toml(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix(ARGUMENTS_TOKEN) {
            out.push_str("{{args}}");
            rest = tail;
            continue;
        }

        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if let Some(placeholder) = positional_placeholder(&after[..digits]) {
            out.push_str(&placeholder);
            rest = &after[digits..];
            continue;
        }

        out.push('$');
        rest = after;
    }

    out.push_str(rest);
    out
}

fn positional_placeholder(digits: &str) -> Option<String> {
    match digits.parse::<u32>().ok()? {
        0 => None,
        1 => Some("{{plan_id}}".to_string()),
        n => Some(format!("{{{{arg{n}}}}}")),
    }
}

use provisio::ProvisionError;

use crate::ui::primitives::icon::Icon;

/// Hint printed under errors the user can fix directly
fn hint(err: &ProvisionError) -> Option<&'static str> {
    match err {
        ProvisionError::MissingEnvironment => {
            Some("Pass --environment <NAME> or run without --no-prompt.")
        }
        ProvisionError::MissingParameter { .. } => Some(
            "Set the value in the environment's .env file or run without --no-prompt.",
        ),
        ProvisionError::Login(_) => Some("Run 'az login' and try again."),
        ProvisionError::Project(_) => Some("Run provisio from the project root or pass --cwd."),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    );
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }
    if let Some(hint) = err.downcast_ref::<ProvisionError>().and_then(hint) {
        out.push_str(&format!("  {}\n", hint));
    }
    out
}

use domino_client::ProjectName;
use once_cell::sync::Lazy;
use regex::Regex;

/// Replaces the `RE_<word>` part of a reporting project's name.
pub const SIBLING_PROJECT_TOKEN: &str = "SDTM";

static RX_REPORTING_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"RE_\w+").expect("Reporting token pattern is well-formed"));

/// Name of the project holding the SDTM datasets a reporting project depends on.
///
/// Every `RE_<word>` occurrence is replaced by `SDTM`. Since `\w` also matches
/// underscores, the replacement runs to the next non-word character.
pub fn sibling_project_name(project_name: &ProjectName) -> ProjectName {
    ProjectName(
        RX_REPORTING_TOKEN
            .replace_all(&project_name.0, SIBLING_PROJECT_TOKEN)
            .into_owned(),
    )
}

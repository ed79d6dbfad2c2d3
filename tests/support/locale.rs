use std::convert::Infallible;
use std::str::FromStr;

/// Value captured from a `... is "<value>"` step in
/// `tests/features/system_language.feature`.
///
/// Feature steps quote locales so empty values (`LC_ALL is ""`) stay
/// visible; one matching pair of double quotes is removed.
#[derive(Clone, Debug)]
pub struct StepText(String);

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let unquoted = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(trimmed);

        Ok(Self(unquoted.to_owned()))
    }
}

impl StepText {
    /// Returns the unquoted value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// One of `LC_ALL`, `LC_MESSAGES` or `LANG`, as named by an environment
/// step. Any other name fails the step.
#[derive(Clone, Copy, Debug)]
pub struct StepVariable(&'static str);

impl FromStr for StepVariable {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let name = input.trim();
        nfc_util::LOCALE_VARIABLES
            .into_iter()
            .find(|candidate| *candidate == name)
            .map(Self)
            .ok_or_else(|| format!("unknown locale variable '{name}'"))
    }
}

impl StepVariable {
    /// Returns the variable name.
    pub const fn name(self) -> &'static str {
        self.0
    }
}

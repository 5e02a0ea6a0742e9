use unicode_segmentation::UnicodeSegmentation;

/// The submitter's name as it appears in the inquiry subject line.
///
/// Anything at least two graphemes long (ignoring surrounding whitespace)
/// is accepted.
#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(s: String) -> Result<Self, String> {
        let too_short = s.trim().graphemes(true).count() < 2;

        if too_short {
            Err("Name must be at least 2 characters".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactName {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        ContactName::parse(value)
    }
}

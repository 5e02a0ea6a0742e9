use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct InquiryMessage(String);

impl InquiryMessage {
    pub fn parse(s: String) -> Result<Self, String> {
        let too_short = s.trim().graphemes(true).count() < 10;

        if too_short {
            Err("Message must be at least 10 characters".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for InquiryMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for InquiryMessage {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        InquiryMessage::parse(value)
    }
}

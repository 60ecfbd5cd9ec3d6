use serde::Deserialize;

/// The fields submitted through the contact form.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The inline feedback shown after a contact form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactNotice {
    Sent,
    MissingFields,
}

impl ContactNotice {
    /// The message displayed to the visitor.
    pub fn message(&self) -> &'static str {
        match self {
            ContactNotice::Sent => "Message sent successfully! I'll get back to you soon.",
            ContactNotice::MissingFields => "Please fill in all fields.",
        }
    }

    /// Whether the submission was accepted.
    pub fn is_success(&self) -> bool {
        matches!(self, ContactNotice::Sent)
    }
}

impl ContactForm {
    /// Checks that every field is non-empty. Nothing is sent anywhere.
    pub fn validate(&self) -> ContactNotice {
        let all_filled = [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.is_empty());
        if all_filled {
            ContactNotice::Sent
        } else {
            ContactNotice::MissingFields
        }
    }
}

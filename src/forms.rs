// Contact form validation and the mailto handoff it feeds. Pure logic,
// shared by the contact section and the footer newsletter flow.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .unwrap()
});

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate.trim())
}

/// Inquiry categories offered by the contact form select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Sponsorship,
    Partnership,
    Speaking,
    Judging,
    General,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Sponsorship,
        Subject::Partnership,
        Subject::Speaking,
        Subject::Judging,
        Subject::General,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Subject::Sponsorship => "sponsorship",
            Subject::Partnership => "partnership",
            Subject::Speaking => "speaking",
            Subject::Judging => "judging",
            Subject::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Sponsorship => "Sponsorship Opportunity",
            Subject::Partnership => "Partnership Proposal",
            Subject::Speaking => "Speaking/Workshop Proposal",
            Subject::Judging => "Judging Application",
            Subject::General => "General Inquiry",
        }
    }

    pub fn from_value(value: &str) -> Option<Subject> {
        Self::ALL.iter().copied().find(|s| s.value() == value)
    }
}

/// Raw field values as typed into the form. The subject holds the select's
/// string value so "nothing chosen yet" is representable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub subject: String,
    pub message: String,
}

/// At most one violation per field. Fields stay independent so correcting
/// one never touches another's message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub organization: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.organization.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }

    #[cfg(test)]
    fn count(&self) -> usize {
        [
            self.name,
            self.email,
            self.organization,
            self.subject,
            self.message,
        ]
        .iter()
        .filter(|e| e.is_some())
        .count()
    }
}

/// A submission that passed every rule, with trimmed values and the subject
/// resolved to its category.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub subject: Subject,
    pub message: String,
}

pub fn validate(form: &ContactForm) -> Result<ContactMessage, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = form.name.trim();
    if name.chars().count() < 2 {
        errors.name = Some("Name must be at least 2 characters");
    }

    let email = form.email.trim();
    if !is_valid_email(email) {
        errors.email = Some("Please enter a valid email address");
    }

    let organization = form.organization.trim();
    if organization.chars().count() < 2 {
        errors.organization = Some("Organization must be at least 2 characters");
    }

    let subject = Subject::from_value(&form.subject);
    if subject.is_none() {
        errors.subject = Some("Please select a subject");
    }

    let message = form.message.trim();
    if message.chars().count() < 10 {
        errors.message = Some("Message must be at least 10 characters");
    }

    if errors.is_empty() {
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            organization: organization.to_string(),
            subject: subject.unwrap_or(Subject::General),
            message: message.to_string(),
        })
    } else {
        Err(errors)
    }
}

pub fn mailto_url(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub fn contact_subject(message: &ContactMessage) -> String {
    format!("MoneyHacks - {}", message.subject.label())
}

pub fn contact_body(message: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\nOrganization: {}\n\nMessage:\n{}",
        message.name, message.email, message.organization, message.message
    )
}

/// Lifecycle of the optimistic submit flows (contact form, newsletter).
/// There is no real delivery; Sent is assumed after a fixed delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    /// While busy, the submit control stays disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitStatus::Sending | SubmitStatus::Sent)
    }
}

pub const SEND_SIMULATION_MS: u32 = 1_000;
pub const CONTACT_RESET_MS: u32 = 5_000;
pub const SUBSCRIBE_RESET_MS: u32 = 3_000;
pub const COPY_INDICATOR_MS: u32 = 2_000;

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            organization: "Analytical Engines".into(),
            subject: "general".into(),
            message: "Interested in partnering.".into(),
        }
    }

    #[test]
    fn accepts_a_fully_valid_form() {
        let accepted = validate(&valid_form()).unwrap();
        assert_eq!(accepted.name, "Ada Lovelace");
        assert_eq!(accepted.email, "ada@example.com");
        assert_eq!(accepted.organization, "Analytical Engines");
        assert_eq!(accepted.subject, Subject::General);
        assert_eq!(accepted.message, "Interested in partnering.");
    }

    #[test]
    fn bad_email_is_the_only_violation() {
        let form = ContactForm {
            name: "Al".into(),
            email: "bad-email".into(),
            organization: "AI Valley".into(),
            subject: "sponsorship".into(),
            message: "Hello there".into(),
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.email, Some("Please enter a valid email address"));
        assert_eq!(errors.count(), 1);
    }

    #[test]
    fn short_name_flags_only_the_name() {
        let mut form = valid_form();
        form.name = "A".into();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.name, Some("Name must be at least 2 characters"));
        assert_eq!(errors.count(), 1);
    }

    #[test]
    fn short_organization_flags_only_the_organization() {
        let mut form = valid_form();
        form.organization = "X".into();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.organization,
            Some("Organization must be at least 2 characters")
        );
        assert_eq!(errors.count(), 1);
    }

    #[test]
    fn unknown_subject_flags_only_the_subject() {
        let mut form = valid_form();
        form.subject = "lobbying".into();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.subject, Some("Please select a subject"));
        assert_eq!(errors.count(), 1);
    }

    #[test]
    fn short_message_flags_only_the_message() {
        let mut form = valid_form();
        form.message = "Too short".into();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.message,
            Some("Message must be at least 10 characters")
        );
        assert_eq!(errors.count(), 1);
    }

    #[test]
    fn empty_form_flags_every_field() {
        let errors = validate(&ContactForm::default()).unwrap_err();
        assert_eq!(errors.count(), 5);
    }

    #[test]
    fn whitespace_padding_does_not_satisfy_lengths() {
        let mut form = valid_form();
        form.name = "  A      ".into();
        let errors = validate(&form).unwrap_err();
        assert!(errors.name.is_some());
    }

    #[test]
    fn accepted_values_are_trimmed() {
        let mut form = valid_form();
        form.email = "  ada@example.com  ".into();
        let accepted = validate(&form).unwrap();
        assert_eq!(accepted.email, "ada@example.com");
    }

    #[test]
    fn email_grammar_cases() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last@sub.domain.co"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("double@@example.com"));
        assert!(!is_valid_email("trailing@example."));
    }

    #[test]
    fn subject_values_round_trip() {
        for subject in Subject::ALL {
            assert_eq!(Subject::from_value(subject.value()), Some(subject));
        }
        assert_eq!(Subject::from_value(""), None);
        assert_eq!(Subject::from_value("Sponsorship"), None);
    }

    #[test]
    fn mailto_url_percent_encodes_subject_and_body() {
        let url = mailto_url("community@aivalley.io", "MoneyHacks - General Inquiry", "line one\nline two");
        assert!(url.starts_with("mailto:community@aivalley.io?subject="));
        assert!(url.contains("MoneyHacks%20-%20General%20Inquiry"));
        assert!(url.contains("line%20one%0Aline%20two"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn contact_payload_matches_the_template() {
        let accepted = validate(&valid_form()).unwrap();
        assert_eq!(contact_subject(&accepted), "MoneyHacks - General Inquiry");
        assert_eq!(
            contact_body(&accepted),
            "Name: Ada Lovelace\nEmail: ada@example.com\nOrganization: Analytical Engines\n\nMessage:\nInterested in partnering."
        );
    }

    #[test]
    fn busy_states_disable_submission() {
        assert!(!SubmitStatus::Idle.is_busy());
        assert!(SubmitStatus::Sending.is_busy());
        assert!(SubmitStatus::Sent.is_busy());
        assert!(!SubmitStatus::Failed.is_busy());
    }
}

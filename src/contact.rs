use std::sync::LazyLock;

use regex::Regex;

use crate::error::SiteError;

pub const SENT_TITLE: &str = "Message sent!";
pub const SENT_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern should compile")
});

/// Surface that shows a short notification to the visitor.
pub trait Notify {
    fn notify(&self, title: &str, description: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "Your email address",
            Field::Subject => "Subject of your message",
            Field::Message => "Your message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// At most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = FieldErrors {
            name: (!min_chars(&self.name, 2)).then_some("Name must be at least 2 characters."),
            email: (!is_valid_email(&self.email))
                .then_some("Please enter a valid email address."),
            subject: (!min_chars(&self.subject, 5))
                .then_some("Subject must be at least 5 characters."),
            message: (!min_chars(&self.message, 10))
                .then_some("Message must be at least 10 characters."),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A validated message waiting for its (simulated) delivery to finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub values: ContactForm,
}

/// The contact form's whole lifecycle: editing, validation, one pending
/// submission at a time, completion and cancellation on teardown.
#[derive(Debug, Clone, Default)]
pub struct ContactFlow {
    form: ContactForm,
    errors: FieldErrors,
    attempted: bool,
    pending: Option<u64>,
    next_ticket: u64,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates one field. Once a submit was attempted, errors follow edits.
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        if self.attempted {
            self.errors = self.form.validate().err().unwrap_or_default();
        }
    }

    pub fn submit(&mut self) -> Result<Submission, SiteError> {
        if self.pending.is_some() {
            return Err(SiteError::SubmissionPending);
        }
        self.attempted = true;
        if let Err(errors) = self.form.validate() {
            let count = errors.len();
            self.errors = errors;
            return Err(SiteError::FormValidation(count));
        }
        self.errors = FieldErrors::default();
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(ticket);
        Ok(Submission {
            ticket,
            values: self.form.clone(),
        })
    }

    /// Finishes the pending submission identified by `ticket`: clears the
    /// form and notifies once. Stale or cancelled tickets do nothing.
    pub fn complete(&mut self, ticket: u64, notifier: &impl Notify) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        log::info!(
            "contact message from {} <{}>: {}",
            self.form.name,
            self.form.email,
            self.form.subject
        );
        self.pending = None;
        self.attempted = false;
        self.errors = FieldErrors::default();
        self.form.reset();
        notifier.notify(SENT_TITLE, SENT_DESCRIPTION);
        true
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        sent: RefCell<Vec<(String, String)>>,
    }

    impl Notify for Recorder {
        fn notify(&self, title: &str, description: &str) {
            self.sent
                .borrow_mut()
                .push((title.to_string(), description.to_string()));
        }
    }

    fn fill(flow: &mut ContactFlow, name: &str, email: &str, subject: &str, message: &str) {
        flow.edit(Field::Name, name.to_string());
        flow.edit(Field::Email, email.to_string());
        flow.edit(Field::Subject, subject.to_string());
        flow.edit(Field::Message, message.to_string());
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.com", "first.last+tag@mail.example.org", "x_y@d-1.io"] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in [
            "bad",
            "",
            "a@b",
            "@b.com",
            "a@.com",
            ".a@b.com",
            "a..b@c.com",
            "a b@c.com",
            "a@b.c",
            "a.@b.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_invalid_submission_reports_every_field() {
        let notifier = Recorder::default();
        let mut flow = ContactFlow::new();
        fill(&mut flow, "Al", "bad", "Hi", "short");

        // "Al" is exactly two characters, the rest are too short or malformed
        let res = flow.submit();
        assert_eq!(res, Err(SiteError::FormValidation(3)));
        assert_eq!(flow.errors().name, None);
        assert!(flow.errors().email.is_some());
        assert!(flow.errors().subject.is_some());
        assert!(flow.errors().message.is_some());
        assert!(!flow.is_sending());
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn test_all_four_fields_can_fail() {
        let mut flow = ContactFlow::new();
        fill(&mut flow, "A", "bad", "Hi", "short");
        assert_eq!(flow.submit(), Err(SiteError::FormValidation(4)));
        assert_eq!(
            flow.errors().get(Field::Name),
            Some("Name must be at least 2 characters.")
        );
        assert_eq!(
            flow.errors().get(Field::Email),
            Some("Please enter a valid email address.")
        );
        assert_eq!(
            flow.errors().get(Field::Subject),
            Some("Subject must be at least 5 characters.")
        );
        assert_eq!(
            flow.errors().get(Field::Message),
            Some("Message must be at least 10 characters.")
        );

        let mut empty = ContactFlow::new();
        assert_eq!(empty.submit(), Err(SiteError::FormValidation(4)));
    }

    #[test]
    fn test_errors_follow_edits_after_attempt() {
        let mut flow = ContactFlow::new();
        flow.edit(Field::Name, "A".to_string());
        // no errors shown before the first submit
        assert!(flow.errors().is_empty());

        assert!(flow.submit().is_err());
        assert_eq!(flow.errors().len(), 4);
        flow.edit(Field::Name, "Alice".to_string());
        assert_eq!(flow.errors().len(), 3);
        assert_eq!(flow.errors().name, None);
    }

    #[test]
    fn test_valid_submission_notifies_once_and_resets() {
        let notifier = Recorder::default();
        let mut flow = ContactFlow::new();
        fill(
            &mut flow,
            "Alice",
            "a@b.com",
            "Project inquiry",
            "I would like to discuss a project.",
        );

        let submission = flow.submit().expect("form is valid");
        assert!(flow.is_sending());
        assert_eq!(submission.values.name, "Alice");
        assert_eq!(flow.submit(), Err(SiteError::SubmissionPending));

        assert!(flow.complete(submission.ticket, &notifier));
        assert!(!flow.complete(submission.ticket, &notifier));

        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, SENT_TITLE);
        assert_eq!(sent[0].1, SENT_DESCRIPTION);
        assert_eq!(flow.form(), &ContactForm::default());
        for field in Field::ALL {
            assert_eq!(flow.form().get(field), "");
        }
        assert!(flow.errors().is_empty());
        assert!(!flow.is_sending());
    }

    #[test]
    fn test_cancelled_submission_never_completes() {
        let notifier = Recorder::default();
        let mut flow = ContactFlow::new();
        fill(
            &mut flow,
            "Alice",
            "a@b.com",
            "Project inquiry",
            "I would like to discuss a project.",
        );
        let submission = flow.submit().unwrap();
        assert!(flow.cancel());
        assert!(!flow.cancel());

        assert!(!flow.complete(submission.ticket, &notifier));
        assert!(notifier.sent.borrow().is_empty());
        // fields kept since nothing was sent
        assert_eq!(flow.form().name, "Alice");
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let notifier = Recorder::default();
        let mut flow = ContactFlow::new();
        fill(
            &mut flow,
            "Alice",
            "a@b.com",
            "Project inquiry",
            "I would like to discuss a project.",
        );
        let first = flow.submit().unwrap();
        flow.cancel();
        let second = flow.submit().unwrap();
        assert_ne!(first.ticket, second.ticket);

        assert!(!flow.complete(first.ticket, &notifier));
        assert!(flow.complete(second.ticket, &notifier));
        assert_eq!(notifier.sent.borrow().len(), 1);
    }
}

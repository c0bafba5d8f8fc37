//! Contact page and message submission.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{info, warn};

use super::Section;
use crate::portfolio::{decorate_contact, ContactLink, CONTACT_EMAIL, CONTACT_INTRO};
use crate::server::metrics::{record_contact_submission, record_store_request};
use crate::store::{
    fetch_records, insert_message, Collection, ContactLinkRecord, DataStore, MessageRecord,
};

/// Values of the contact form, as posted or as rendered back.
///
/// `form_id` names one rendered instance of the form and is what duplicate
/// submissions are detected by.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    pub form_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Empty form with a fresh id.
    pub fn blank() -> Self {
        Self {
            form_id: new_form_id(),
            ..Default::default()
        }
    }

    fn ensure_form_id(mut self) -> Self {
        if self.form_id.is_empty() {
            self.form_id = new_form_id();
        }
        self
    }

    fn to_message(&self) -> MessageRecord {
        MessageRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

fn new_form_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Transient message shown after a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NotificationVariant,
}

/// How a submission ended, with the form to render next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Stored. The form comes back blank.
    Sent(ContactForm),
    /// The store rejected the write. The form keeps what was typed.
    Failed(ContactForm),
    /// The same form is still being sent. No write was issued.
    AlreadySending(ContactForm),
}

impl SubmissionOutcome {
    pub fn form(&self) -> &ContactForm {
        match self {
            SubmissionOutcome::Sent(form)
            | SubmissionOutcome::Failed(form)
            | SubmissionOutcome::AlreadySending(form) => form,
        }
    }

    pub fn into_form(self) -> ContactForm {
        match self {
            SubmissionOutcome::Sent(form)
            | SubmissionOutcome::Failed(form)
            | SubmissionOutcome::AlreadySending(form) => form,
        }
    }

    pub fn notification(&self) -> Notification {
        match self {
            SubmissionOutcome::Sent(_) => Notification {
                title: "Message sent!",
                description: "Thank you for reaching out. I'll get back to you soon!",
                variant: NotificationVariant::Default,
            },
            SubmissionOutcome::Failed(_) => Notification {
                title: "Error",
                description: "Failed to send message. Please try again.",
                variant: NotificationVariant::Destructive,
            },
            SubmissionOutcome::AlreadySending(_) => Notification {
                title: "Sending...",
                description: "Your message is already being sent.",
                variant: NotificationVariant::Default,
            },
        }
    }
}

/// Form ids with a write in flight.
#[derive(Default)]
pub struct SubmissionGate {
    in_flight: Mutex<HashSet<String>>,
}

/// Releases its form id when dropped.
pub struct SubmissionGuard<'a> {
    gate: &'a SubmissionGate,
    form_id: String,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `form_id` as submitting, `None` if it already is.
    pub fn try_begin(&self, form_id: &str) -> Option<SubmissionGuard<'_>> {
        let inserted = self.in_flight.lock().unwrap().insert(form_id.to_string());
        inserted.then(|| SubmissionGuard {
            gate: self,
            form_id: form_id.to_string(),
        })
    }

    pub fn is_submitting(&self, form_id: &str) -> bool {
        self.in_flight.lock().unwrap().contains(form_id)
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.lock().unwrap().remove(&self.form_id);
    }
}

/// Sends `form` to the `messages` collection, unless the same form is already
/// being sent.
pub async fn submit_contact_form(
    store: &dyn DataStore,
    gate: &SubmissionGate,
    form: ContactForm,
) -> SubmissionOutcome {
    let form = form.ensure_form_id();

    let Some(_guard) = gate.try_begin(&form.form_id) else {
        info!(form_id = %form.form_id, "Ignoring duplicate submission");
        record_contact_submission("duplicate");
        return SubmissionOutcome::AlreadySending(form);
    };

    let start = Instant::now();
    let result = insert_message(store, &form.to_message()).await;
    record_store_request("insert", Collection::Messages.name(), &result, start.elapsed());

    match result {
        Ok(()) => {
            info!(form_id = %form.form_id, "Contact message stored");
            record_contact_submission("sent");
            SubmissionOutcome::Sent(ContactForm::blank())
        }
        Err(err) => {
            warn!(form_id = %form.form_id, "Failed to store contact message: {}", err);
            record_contact_submission("failed");
            SubmissionOutcome::Failed(form)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactPage {
    pub intro: &'static str,
    pub email: &'static str,
    pub links: Section<ContactLink>,
    pub form: ContactForm,
    pub submitting: bool,
    pub notification: Option<Notification>,
}

/// Loads the contact links and pairs them with `form`.
pub async fn load_contact(
    store: &dyn DataStore,
    gate: &SubmissionGate,
    form: ContactForm,
    notification: Option<Notification>,
) -> ContactPage {
    let links = Section::loaded(
        Collection::Contacts.name(),
        fetch_records::<ContactLinkRecord>(store, Collection::Contacts),
    )
    .await
    .map(|records| records.into_iter().map(decorate_contact).collect());

    let form = form.ensure_form_id();
    ContactPage {
        intro: CONTACT_INTRO,
        email: CONTACT_EMAIL,
        links,
        submitting: gate.is_submitting(&form.form_id),
        form,
        notification,
    }
}

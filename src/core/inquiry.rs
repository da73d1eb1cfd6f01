use super::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inquiry form contents captured at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub event_type: String,
    pub event_date: String,
    pub location: Option<String>,
    pub interests: Vec<String>,
    pub crowd_size: String,
}

/// Fields that can be marked mandatory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    EventType,
    EventDate,
    Location,
    CrowdSize,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::EventType => "Event Type",
            RequiredField::EventDate => "Event Date",
            RequiredField::Location => "Location",
            RequiredField::CrowdSize => "Crowd Size",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in the required fields: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

impl InquiryForm {
    pub fn interests_joined(&self) -> String {
        self.interests.join(", ")
    }

    fn field(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::EventType => &self.event_type,
            RequiredField::EventDate => &self.event_date,
            RequiredField::Location => self.location.as_deref().unwrap_or(""),
            RequiredField::CrowdSize => &self.crowd_size,
        }
    }

    pub fn validate(&self, required: &[RequiredField]) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|f| self.field(**f).trim().is_empty())
            .map(|f| f.label())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Missing(missing))
        }
    }
}

/// Chat deep-link destination.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatTarget {
    pub phone: String,
    pub header: String,
}

impl Default for ChatTarget {
    fn default() -> Self {
        Self {
            phone: "962796223983".to_string(),
            header: "New Inquiry for AV PRODUCTION".to_string(),
        }
    }
}

// WhatsApp renders `*text*` as bold, so the markup and label colons stay literal.
fn encode_chat_text(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%20", "+")
        .replace("%2A", "*")
        .replace("%3A", ":")
}

impl ChatTarget {
    /// Message lines before encoding.
    pub fn message_lines(&self, form: &InquiryForm) -> Vec<String> {
        let mut lines = vec![
            format!("*{}*", self.header),
            String::new(),
            format!("*Event Type:* {}", form.event_type),
            format!("*Event Date:* {}", form.event_date),
        ];
        if let Some(loc) = form.location.as_deref().filter(|l| !l.trim().is_empty()) {
            lines.push(format!("*Location:* {}", loc));
        }
        lines.push(format!("*Interested In:* {}", form.interests_joined()));
        lines.push(format!("*Crowd Size:* {}", form.crowd_size));
        lines
    }

    pub fn link(&self, form: &InquiryForm) -> String {
        let text = self
            .message_lines(form)
            .iter()
            .map(|l| encode_chat_text(l))
            .collect::<Vec<_>>()
            .join("%0A");
        format!("https://wa.me/{}?text={}", self.phone, text)
    }
}

/// Template parameters handed to the email relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailParams {
    pub event_type: String,
    pub event_date: String,
    pub interests: String,
    pub crowd_size: String,
}

impl From<&InquiryForm> for EmailParams {
    fn from(form: &InquiryForm) -> Self {
        Self {
            event_type: form.event_type.clone(),
            event_date: form.event_date.clone(),
            interests: form.interests_joined(),
            crowd_size: form.crowd_size.clone(),
        }
    }
}

/// Outbound sinks an inquiry is dispatched to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Channels {
    pub chat: bool,
    pub email_relay: bool,
    pub form_relay: bool,
}

impl Default for Channels {
    fn default() -> Self {
        Self {
            chat: true,
            email_relay: true,
            form_relay: false,
        }
    }
}

/// Everything the submission flow needs to decide what to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitPolicy {
    pub channels: Channels,
    pub required: Vec<RequiredField>,
    pub chat: ChatTarget,
}

impl Default for SubmitPolicy {
    fn default() -> Self {
        Self {
            channels: Channels::default(),
            required: vec![RequiredField::EventType, RequiredField::Location],
            chat: ChatTarget::default(),
        }
    }
}

/// Result of the form-relay request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelayOutcome {
    Status(u16),
    NetworkError(String),
}

pub const RELAY_FAILURE_MESSAGE: &str =
    "Something went wrong while sending your inquiry. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    /// Waiting for the form relay to answer.
    Sending,
    /// Success block shown, close pending.
    Succeeded,
    /// Modal closed, form restore pending.
    Closing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitEffect {
    Alert(String),
    DisableSubmit,
    EnableSubmit,
    OpenChat(String),
    SendEmail(EmailParams),
    PostFormRelay,
    ShowSuccess,
    ScheduleClose { after_ms: u32 },
    CloseModal,
    ScheduleRestore { after_ms: u32 },
    RestoreForm,
}

/// Submit -> dispatch -> success/failure -> close -> restore, as a state machine.
#[derive(Clone, Debug)]
pub struct SubmissionFlow {
    phase: SubmitPhase,
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self {
            phase: SubmitPhase::Idle,
        }
    }
}

impl SubmissionFlow {
    #[inline]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn submit(&mut self, form: &InquiryForm, policy: &SubmitPolicy) -> Vec<SubmitEffect> {
        if self.phase != SubmitPhase::Idle {
            return Vec::new();
        }
        if let Err(e) = form.validate(&policy.required) {
            return vec![SubmitEffect::Alert(e.to_string())];
        }
        let mut out = vec![SubmitEffect::DisableSubmit];
        if policy.channels.chat {
            out.push(SubmitEffect::OpenChat(policy.chat.link(form)));
        }
        if policy.channels.email_relay {
            out.push(SubmitEffect::SendEmail(EmailParams::from(form)));
        }
        if policy.channels.form_relay {
            out.push(SubmitEffect::PostFormRelay);
            self.phase = SubmitPhase::Sending;
        } else {
            self.succeed(&mut out);
        }
        out
    }

    pub fn relay_finished(&mut self, outcome: RelayOutcome) -> Vec<SubmitEffect> {
        if self.phase != SubmitPhase::Sending {
            return Vec::new();
        }
        let mut out = Vec::new();
        match outcome {
            RelayOutcome::Status(200) => self.succeed(&mut out),
            RelayOutcome::Status(_) | RelayOutcome::NetworkError(_) => {
                self.phase = SubmitPhase::Idle;
                out.push(SubmitEffect::Alert(RELAY_FAILURE_MESSAGE.to_string()));
                out.push(SubmitEffect::EnableSubmit);
            }
        }
        out
    }

    pub fn close_elapsed(&mut self) -> Vec<SubmitEffect> {
        if self.phase != SubmitPhase::Succeeded {
            return Vec::new();
        }
        self.phase = SubmitPhase::Closing;
        vec![
            SubmitEffect::CloseModal,
            SubmitEffect::ScheduleRestore {
                after_ms: SUCCESS_RESET_DELAY_MS,
            },
        ]
    }

    pub fn restore_elapsed(&mut self) -> Vec<SubmitEffect> {
        if self.phase != SubmitPhase::Closing {
            return Vec::new();
        }
        self.phase = SubmitPhase::Idle;
        vec![SubmitEffect::RestoreForm, SubmitEffect::EnableSubmit]
    }

    fn succeed(&mut self, out: &mut Vec<SubmitEffect>) {
        self.phase = SubmitPhase::Succeeded;
        out.push(SubmitEffect::ShowSuccess);
        out.push(SubmitEffect::ScheduleClose {
            after_ms: SUCCESS_CLOSE_DELAY_MS,
        });
    }
}

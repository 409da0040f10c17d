use std::rc::Rc;

use serde::Serialize;
use yew::functional::Reducible;

use crate::toast::ToastKind;

/// One row of the hosted `lead` table.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub email: String,
    pub company_name: String,
    pub phone_number: Option<String>,
    pub challenges: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Email,
    CompanyName,
    PhoneNumber,
    Challenges,
}

/// What the visitor has typed so far. Every field is kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub email: String,
    pub company_name: String,
    pub phone_number: String,
    pub challenges: String,
}

fn optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl LeadDraft {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Email => &self.email,
            LeadField::CompanyName => &self.company_name,
            LeadField::PhoneNumber => &self.phone_number,
            LeadField::Challenges => &self.challenges,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Email => self.email = value,
            LeadField::CompanyName => self.company_name = value,
            LeadField::PhoneNumber => self.phone_number = value,
            LeadField::Challenges => self.challenges = value,
        }
    }

    /// Builds the record to insert, turning blank optional fields into `null`.
    pub fn to_lead(&self) -> Lead {
        Lead {
            email: self.email.clone(),
            company_name: self.company_name.clone(),
            phone_number: optional(&self.phone_number),
            challenges: optional(&self.challenges),
        }
    }
}

/// Controlled form state: the draft plus the in-flight lock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub draft: LeadDraft,
    pub submitting: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LeadFormAction {
    Edit(LeadField, String),
    Submit,
    Succeeded,
    Failed,
}

impl LeadForm {
    /// The record a submit would send now, or `None` while a submission is in flight.
    pub fn pending_lead(&self) -> Option<Lead> {
        (!self.submitting).then(|| self.draft.to_lead())
    }
}

/// What a finished submission does to the page.
#[derive(Debug, PartialEq, Eq)]
pub struct Settlement {
    pub notice: ToastKind,
    /// `None` once the form is gone.
    pub action: Option<LeadFormAction>,
    pub close: bool,
}

/// The toast always shows. The form and its container are only touched while mounted.
pub fn settle(succeeded: bool, mounted: bool) -> Settlement {
    let (notice, action) = if succeeded {
        (ToastKind::Success, LeadFormAction::Succeeded)
    } else {
        (ToastKind::Error, LeadFormAction::Failed)
    };
    Settlement {
        notice,
        action: mounted.then_some(action),
        close: succeeded && mounted,
    }
}

impl Reducible for LeadForm {
    type Action = LeadFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadFormAction::Edit(field, value) => next.draft.set(field, value),
            LeadFormAction::Submit => next.submitting = true,
            LeadFormAction::Succeeded => {
                next.draft = LeadDraft::default();
                next.submitting = false;
            }
            // Keep whatever was typed so the visitor can retry.
            LeadFormAction::Failed => next.submitting = false,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> LeadDraft {
        LeadDraft {
            email: "ada@acme.io".to_string(),
            company_name: "Acme".to_string(),
            phone_number: "+33 6 12 34 56 78".to_string(),
            challenges: "Too many unused fields on Account".to_string(),
        }
    }

    fn reduce(form: LeadForm, action: LeadFormAction) -> LeadForm {
        (*Rc::new(form).reduce(action)).clone()
    }

    #[test]
    fn blank_optionals_are_sent_as_null() {
        let draft = LeadDraft {
            email: "ada@acme.io".to_string(),
            company_name: "Acme".to_string(),
            ..LeadDraft::default()
        };
        let body = serde_json::to_value(draft.to_lead()).unwrap();
        assert_eq!(
            body,
            json!({
                "email": "ada@acme.io",
                "company_name": "Acme",
                "phone_number": null,
                "challenges": null,
            })
        );
    }

    #[test]
    fn whitespace_only_optional_counts_as_blank() {
        let draft = LeadDraft { challenges: "   \n".to_string(), ..filled() };
        assert_eq!(draft.to_lead().challenges, None);
    }

    #[test]
    fn filled_fields_are_sent_verbatim() {
        let draft = LeadDraft { email: " ada@acme.io ".to_string(), ..filled() };
        let lead = draft.to_lead();
        assert_eq!(lead.email, " ada@acme.io ");
        assert_eq!(lead.company_name, "Acme");
        assert_eq!(lead.phone_number.as_deref(), Some("+33 6 12 34 56 78"));
        assert_eq!(lead.challenges.as_deref(), Some("Too many unused fields on Account"));
    }

    #[test]
    fn edits_touch_only_their_field() {
        let form = reduce(LeadForm::default(), LeadFormAction::Edit(LeadField::CompanyName, "Acme".into()));
        assert_eq!(form.draft.get(LeadField::CompanyName), "Acme");
        assert_eq!(form.draft.get(LeadField::Email), "");
        assert_eq!(form.draft.get(LeadField::PhoneNumber), "");
        assert_eq!(form.draft.get(LeadField::Challenges), "");
    }

    #[test]
    fn submit_locks_until_settled() {
        let form = LeadForm { draft: filled(), submitting: false };
        assert!(form.pending_lead().is_some());

        let in_flight = reduce(form, LeadFormAction::Submit);
        assert!(in_flight.submitting);
        assert_eq!(in_flight.pending_lead(), None);
    }

    #[test]
    fn failure_keeps_draft_and_unlocks() {
        let in_flight = LeadForm { draft: filled(), submitting: true };
        let after = reduce(in_flight, LeadFormAction::Failed);
        assert_eq!(after.draft, filled());
        assert!(!after.submitting);
    }

    #[test]
    fn mounted_success_resets_and_closes_once() {
        let settled = settle(true, true);
        assert_eq!(settled.notice, ToastKind::Success);
        assert_eq!(settled.action, Some(LeadFormAction::Succeeded));
        assert!(settled.close);
    }

    #[test]
    fn mounted_failure_keeps_container_open() {
        let settled = settle(false, true);
        assert_eq!(settled.notice, ToastKind::Error);
        assert_eq!(settled.action, Some(LeadFormAction::Failed));
        assert!(!settled.close);
    }

    #[test]
    fn late_success_after_unmount_only_notifies() {
        let settled = settle(true, false);
        assert_eq!(settled.notice, ToastKind::Success);
        assert_eq!(settled.action, None);
        assert!(!settled.close);
    }

    #[test]
    fn late_failure_after_unmount_only_notifies() {
        let settled = settle(false, false);
        assert_eq!(settled.notice, ToastKind::Error);
        assert_eq!(settled.action, None);
        assert!(!settled.close);
    }

    #[test]
    fn second_submit_while_in_flight_sends_nothing() {
        let form = reduce(LeadForm { draft: filled(), submitting: false }, LeadFormAction::Submit);
        assert_eq!(form.pending_lead(), None);
        let again = reduce(form, LeadFormAction::Submit);
        assert_eq!(again.pending_lead(), None);
        assert_eq!(again.draft, filled());
    }

    #[test]
    fn success_clears_draft_and_unlocks() {
        let in_flight = LeadForm { draft: filled(), submitting: true };
        let after = reduce(in_flight, LeadFormAction::Succeeded);
        assert_eq!(after, LeadForm::default());
    }
}

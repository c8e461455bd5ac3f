use serde::Deserialize;

/// Weekly time budgets offered on the inquiry form, in hours per week.
pub const TIME_CHOICES: [&str; 4] = ["1-2", "3-5", "5-7", "7-10"];

/// Goal codes offered on the inquiry form. Must match the seeded goals.
pub const GOAL_CHOICES: [&str; 4] = ["travel", "study", "work", "relocate"];

/// Per-field validation messages collected while checking a form.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, &'static str)>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push((field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn message(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }
}

/// Booking form: three hidden fields carrying the targeted slot, plus the
/// visitor's contact details.
#[derive(Debug, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub client_weekday: String,
    #[serde(default)]
    pub client_time: String,
    #[serde(default)]
    pub client_teacher: i32,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
}

impl BookingForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.client_name.trim().is_empty() {
            errors.push("client_name", "Please enter your name");
        }
        if self.client_phone.trim().is_empty() {
            errors.push("client_phone", "Please enter your phone number");
        }
        errors
    }
}

/// Inquiry form: goal and time budget radios plus contact details.
#[derive(Debug, Default, Deserialize)]
pub struct RequestForm {
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
}

impl RequestForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if !GOAL_CHOICES.contains(&self.goal.as_str()) {
            errors.push("goal", "Pick a goal from the list");
        }
        if !TIME_CHOICES.contains(&self.time.as_str()) {
            errors.push("time", "Pick a time budget from the list");
        }
        if self.client_name.trim().is_empty() {
            errors.push("client_name", "Please enter your name");
        }
        if self.client_phone.trim().is_empty() {
            errors.push("client_phone", "Please enter your phone number");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_form_requires_contact_fields() {
        let form = BookingForm {
            client_weekday: "mon".into(),
            client_time: "10:00".into(),
            client_teacher: 1,
            client_name: "  ".into(),
            client_phone: String::new(),
        };
        let errors = form.validate();
        assert!(errors.message("client_name").is_some());
        assert!(errors.message("client_phone").is_some());
    }

    #[test]
    fn booking_form_accepts_filled_contact_fields() {
        let form = BookingForm {
            client_weekday: "mon".into(),
            client_time: "10:00".into(),
            client_teacher: 1,
            client_name: "A".into(),
            client_phone: "123".into(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn request_form_rejects_unknown_choices() {
        let form = RequestForm {
            goal: "world-domination".into(),
            time: "40-60".into(),
            client_name: "A".into(),
            client_phone: "123".into(),
        };
        let errors = form.validate();
        assert!(errors.message("goal").is_some());
        assert!(errors.message("time").is_some());
        assert!(errors.message("client_name").is_none());
    }

    #[test]
    fn request_form_accepts_listed_choices() {
        let form = RequestForm {
            goal: "study".into(),
            time: "3-5".into(),
            client_name: "A".into(),
            client_phone: "123".into(),
        };
        assert!(form.validate().is_empty());
    }
}

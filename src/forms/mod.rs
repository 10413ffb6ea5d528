//! Client-side form validation.
//!
//! Each form collects raw user input and turns it into a request body, or
//! reports every invalid field at once. Nothing is sent for an invalid form.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{
    Category, CreateRetrievalRequest, CreateUserRequest, LoginRequest, RegisterRequest,
    ReportFoundRequest, ReportLostRequest, Role,
};

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// A single invalid field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Collects field errors while a form is checked.
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn required(&mut self, field: &'static str, label: &str, value: &str) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.errors
                .push(FieldError::new(field, format!("{} is required", label)));
        }
        value.to_string()
    }

    fn email(&mut self, value: &str) -> String {
        let value = self.required("email", "Email", value);
        if !value.is_empty() && !EMAIL_RE.is_match(&value) {
            self.errors.push(FieldError::new("email", "Invalid email"));
        }
        value
    }

    fn category(&mut self, value: &str) -> Option<Category> {
        let value = self.required("category", "Category", value);
        if value.is_empty() {
            return None;
        }
        let category = Category::parse(&value);
        if category.is_none() {
            self.errors.push(FieldError::new(
                "category",
                format!("Unknown category '{}'", value),
            ));
        }
        category
    }

    fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, Vec<FieldError>> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        // Every field that `build` unwraps was checked above
        build().ok_or_else(Vec::new)
    }
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Sign-in form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, Vec<FieldError>> {
        let mut check = Checker::default();
        let email = check.email(&self.email);
        if self.password.is_empty() {
            check
                .errors
                .push(FieldError::new("password", "Password is required"));
        }
        check.finish(|| {
            Some(LoginRequest {
                email,
                password: self.password.clone(),
            })
        })
    }
}

/// Account creation form.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<RegisterRequest, Vec<FieldError>> {
        let mut check = Checker::default();
        let name = check.required("name", "Name", &self.name);
        let email = check.email(&self.email);

        if self.password.is_empty() {
            check
                .errors
                .push(FieldError::new("password", "Password is required"));
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            check.errors.push(FieldError::new(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }

        if self.confirm_password.is_empty() {
            check.errors.push(FieldError::new(
                "confirm_password",
                "Confirm password is required",
            ));
        } else if self.confirm_password != self.password {
            check
                .errors
                .push(FieldError::new("confirm_password", "Passwords must match"));
        }

        check.finish(|| {
            Some(RegisterRequest {
                name,
                email,
                password: self.password.clone(),
            })
        })
    }
}

/// Lost item report form.
#[derive(Debug, Clone, Default)]
pub struct LostItemForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    /// `YYYY-MM-DD`; today when left out
    pub date_lost: Option<String>,
    pub serial_number: Option<String>,
}

impl LostItemForm {
    pub fn validate(&self, today: NaiveDate) -> Result<ReportLostRequest, Vec<FieldError>> {
        let mut check = Checker::default();
        let title = check.required("title", "Title", &self.title);
        let description = check.required("description", "Description", &self.description);
        let category = check.category(&self.category);
        let location = check.required("location", "Location", &self.location);

        let date_lost = match self.date_lost.as_deref() {
            None => Some(today),
            Some(raw) => {
                let raw = check.required("date_lost", "Date lost", raw);
                if raw.is_empty() {
                    None
                } else {
                    match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                        Ok(date) => Some(date),
                        Err(_) => {
                            check.errors.push(FieldError::new(
                                "date_lost",
                                "Date lost must be a date (YYYY-MM-DD)",
                            ));
                            None
                        }
                    }
                }
            }
        };

        check.finish(|| {
            Some(ReportLostRequest {
                title,
                description,
                category: category?,
                location,
                date_lost: date_lost?,
                serial_number: optional(&self.serial_number),
            })
        })
    }
}

/// Found item report form.
#[derive(Debug, Clone, Default)]
pub struct FoundItemForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub serial_number: Option<String>,
}

impl FoundItemForm {
    pub fn validate(&self) -> Result<ReportFoundRequest, Vec<FieldError>> {
        let mut check = Checker::default();
        let title = check.required("title", "Title", &self.title);
        let description = check.required("description", "Description", &self.description);
        let category = check.category(&self.category);
        let location = check.required("location", "Location", &self.location);

        check.finish(|| {
            Some(ReportFoundRequest {
                title,
                description,
                category: category?,
                location,
                serial_number: optional(&self.serial_number),
            })
        })
    }
}

/// Retrieval record form, filled in by an administrator at handoff.
#[derive(Debug, Clone, Default)]
pub struct RetrievalForm {
    pub claim_id: String,
    pub notes: Option<String>,
    pub location: Option<String>,
}

impl RetrievalForm {
    pub fn validate(&self) -> Result<CreateRetrievalRequest, Vec<FieldError>> {
        let mut check = Checker::default();
        let claim_id = check.required("claim_id", "Claim", &self.claim_id);

        check.finish(|| {
            Some(CreateRetrievalRequest {
                claim_id,
                notes: optional(&self.notes).unwrap_or_default(),
                location: optional(&self.location),
            })
        })
    }
}

/// User creation form for administrators.
#[derive(Debug, Clone, Default)]
pub struct NewUserForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl NewUserForm {
    pub fn validate(&self) -> Result<CreateUserRequest, Vec<FieldError>> {
        let mut check = Checker::default();
        let name = check.required("name", "Name", &self.name);
        let email = check.email(&self.email);

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            check.errors.push(FieldError::new(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }

        let role = if self.role.trim().is_empty() {
            Some(Role::Student)
        } else {
            let role = Role::parse(&self.role);
            if role.is_none() {
                check.errors.push(FieldError::new(
                    "role",
                    "Role must be 'student' or 'admin'",
                ));
            }
            role
        };

        check.finish(|| {
            Some(CreateUserRequest {
                name,
                email,
                password: self.password.clone(),
                role: role?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_login_requires_valid_email_and_password() {
        let errors = LoginForm {
            email: "not-an-email".to_string(),
            password: String::new(),
        }
        .validate()
        .unwrap_err();

        assert_eq!(fields(&errors), vec!["email", "password"]);
        assert_eq!(errors[0].message, "Invalid email");
    }

    #[test]
    fn test_login_trims_email() {
        let req = LoginForm {
            email: "  test@example.com ".to_string(),
            password: "test123".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(req.email, "test@example.com");
    }

    #[test]
    fn test_signup_rules() {
        let errors = SignupForm {
            name: " ".to_string(),
            email: "a@b.co".to_string(),
            password: "12345".to_string(),
            confirm_password: "123456".to_string(),
        }
        .validate()
        .unwrap_err();

        assert_eq!(fields(&errors), vec!["name", "password", "confirm_password"]);
        assert_eq!(errors[1].message, "Password must be at least 6 characters");
        assert_eq!(errors[2].message, "Passwords must match");
    }

    #[test]
    fn test_signup_ok() {
        let req = SignupForm {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "test123".to_string(),
            confirm_password: "test123".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(req.name, "Test User");
    }

    #[test]
    fn test_lost_form_reports_every_missing_field() {
        let errors = LostItemForm::default().validate(today()).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["title", "description", "category", "location"]
        );
    }

    #[test]
    fn test_lost_form_defaults_date_to_today() {
        let req = LostItemForm {
            title: "Phone".to_string(),
            description: "Black Pixel 7".to_string(),
            category: "electronics".to_string(),
            location: "Gym".to_string(),
            date_lost: None,
            serial_number: Some("   ".to_string()),
        }
        .validate(today())
        .unwrap();

        assert_eq!(req.date_lost, today());
        assert_eq!(req.category, Category::Electronics);
        assert!(req.serial_number.is_none());
    }

    #[test]
    fn test_lost_form_rejects_bad_date_and_category() {
        let errors = LostItemForm {
            title: "Phone".to_string(),
            description: "Black".to_string(),
            category: "Gadgets".to_string(),
            location: "Gym".to_string(),
            date_lost: Some("yesterday".to_string()),
            serial_number: None,
        }
        .validate(today())
        .unwrap_err();

        assert_eq!(fields(&errors), vec!["category", "date_lost"]);
    }

    #[test]
    fn test_found_form() {
        let req = FoundItemForm {
            title: "Keys".to_string(),
            description: "Three keys on a red lanyard".to_string(),
            category: "Keys & Cards".to_string(),
            location: "Cafeteria".to_string(),
            serial_number: Some("SN-42".to_string()),
        }
        .validate()
        .unwrap();
        assert_eq!(req.serial_number.as_deref(), Some("SN-42"));
    }

    #[test]
    fn test_retrieval_form_notes_default_empty() {
        let req = RetrievalForm {
            claim_id: "c1".to_string(),
            notes: None,
            location: None,
        }
        .validate()
        .unwrap();
        assert_eq!(req.notes, "");

        assert!(RetrievalForm::default().validate().is_err());
    }

    #[test]
    fn test_new_user_form_role() {
        let form = NewUserForm {
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "secret1".to_string(),
            role: "root".to_string(),
        };
        assert_eq!(fields(&form.validate().unwrap_err()), vec!["role"]);

        let req = NewUserForm {
            role: String::new(),
            ..form
        }
        .validate()
        .unwrap();
        assert_eq!(req.role, Role::Student);
    }
}

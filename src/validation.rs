//! Form checks run before a request is made.
//!
//! Messages are the Portuguese strings shown inline under each field.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::model::{Location, NewFeedback};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_COMMENT_LEN: usize = 10;
pub const MAX_COMMENT_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    BusLine,
    FeedbackType,
    Comment,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::BusLine => "busLineId",
            Self::FeedbackType => "feedbackTypeId",
            Self::Comment => "comment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Nome é obrigatório")]
    NameRequired,
    #[error("Email é obrigatório")]
    EmailRequired,
    #[error("Email inválido")]
    EmailInvalid,
    #[error("Senha é obrigatória")]
    PasswordRequired,
    #[error("A senha deve ter pelo menos 6 caracteres")]
    PasswordTooShort,
    #[error("As senhas não coincidem")]
    PasswordMismatch,
    #[error("Selecione uma linha de ônibus")]
    BusLineRequired,
    #[error("Selecione um tipo de problema")]
    FeedbackTypeRequired,
    #[error("Escreva um comentário")]
    CommentRequired,
    #[error("O comentário deve ter pelo menos 10 caracteres")]
    CommentTooShort,
    #[error("O comentário deve ter no máximo 500 caracteres")]
    CommentTooLong,
}

/// Form-level messages for a request that was made and refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Este email já está em uso")]
    EmailInUse,
    #[error("Email ou senha inválidos")]
    InvalidCredentials,
    #[error("Você precisa estar logado para enviar feedback")]
    NotAuthenticated,
}

/// Every failing field of one form, at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field.as_str(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// Loose shape check: something, `@`, something, `.`, something, no
/// whitespace in any part.
pub fn is_valid_email(email: &str) -> bool {
    // Any whitespace-free run containing `x@y.z` is enough.
    email.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, d)| d == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.is_empty() {
            errors.insert(Field::Name, FieldError::NameRequired);
        }

        check_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.insert(Field::Password, FieldError::PasswordRequired);
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(Field::Password, FieldError::PasswordTooShort);
        }

        if self.password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, FieldError::PasswordMismatch);
        }

        errors.into_result()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.insert(Field::Password, FieldError::PasswordRequired);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    pub bus_line_id: String,
    pub feedback_type_id: String,
    pub comment: String,
    pub location: Option<Location>,
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        if self.bus_line_id.is_empty() {
            errors.insert(Field::BusLine, FieldError::BusLineRequired);
        }

        if self.feedback_type_id.is_empty() {
            errors.insert(Field::FeedbackType, FieldError::FeedbackTypeRequired);
        }

        let length = self.comment.chars().count();
        if length == 0 {
            errors.insert(Field::Comment, FieldError::CommentRequired);
        } else if length < MIN_COMMENT_LEN {
            errors.insert(Field::Comment, FieldError::CommentTooShort);
        } else if length > MAX_COMMENT_LEN {
            errors.insert(Field::Comment, FieldError::CommentTooLong);
        }

        errors.into_result()
    }

    /// Validate and turn the form into a submission for `user_id`.
    pub fn into_submission(self, user_id: &str) -> Result<NewFeedback, FormErrors> {
        self.validate()?;
        let feedback = NewFeedback::new(user_id, self.bus_line_id, self.feedback_type_id, self.comment);
        Ok(match self.location {
            Some(location) => feedback.with_location(location),
            None => feedback,
        })
    }
}

fn check_email(email: &str, errors: &mut FormErrors) {
    if email.is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, FieldError::EmailInvalid);
    }
}

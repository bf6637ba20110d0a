use std::io::Write;

use super::render;
use super::{CliError, Command};
use crate::app::App;
use crate::feedback::FeedbackFilter;
use crate::model::Location;
use crate::store::Catalog;
use crate::validation::{FeedbackForm, LoginForm, RegisterForm, SubmitError};

/// Run one command and write its output to `out`.
///
/// `shell` is not handled here; see [`run_shell`](super::run_shell).
pub async fn execute(app: &App, command: Command, out: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Lines => {
            for line in app.store.bus_lines() {
                writeln!(out, "{}", render::bus_line(line))?;
            }
        }
        Command::Types => {
            for kind in app.store.feedback_types() {
                writeln!(out, "{}", render::feedback_type(kind))?;
            }
        }
        Command::List { line, kind, mine } => {
            let filter = FeedbackFilter {
                bus_line_id: line,
                feedback_type_id: kind,
                only_mine: mine,
            };
            list(app, &filter, out)?;
        }
        Command::Login { email, password } => {
            let form = LoginForm { email, password };
            form.validate()?;
            if !app.auth.login(&form.email, &form.password).await {
                return Err(SubmitError::InvalidCredentials.into());
            }
            if let Some(user) = app.auth.current_user() {
                writeln!(out, "Bem-vindo, {}!", user.name)?;
            }
        }
        Command::Register {
            name,
            email,
            password,
            confirm,
        } => {
            let form = RegisterForm {
                name,
                email,
                password,
                confirm_password: confirm,
            };
            form.validate()?;
            if !app.auth.register(&form.name, &form.email, &form.password).await {
                return Err(SubmitError::EmailInUse.into());
            }
            writeln!(out, "Conta criada. Bem-vindo, {}!", form.name)?;
        }
        Command::Logout => {
            app.auth.logout();
            writeln!(out, "Sessão encerrada.")?;
        }
        Command::Whoami => match app.auth.current_user() {
            Some(user) => writeln!(out, "{}", render::user(&user))?,
            None => writeln!(out, "Não autenticado.")?,
        },
        Command::Submit {
            line,
            kind,
            comment,
            lat,
            lon,
        } => {
            let Some(user_id) = app.auth.current_user_id() else {
                return Err(SubmitError::NotAuthenticated.into());
            };

            let form = FeedbackForm {
                bus_line_id: line,
                feedback_type_id: kind,
                comment,
                location: lat.zip(lon).map(|(latitude, longitude)| Location {
                    latitude,
                    longitude,
                }),
            };
            form.validate()?;
            if app.store.bus_line(&form.bus_line_id).is_none() {
                return Err(CliError::UnknownBusLine {
                    id: form.bus_line_id,
                });
            }
            if app.store.feedback_type(&form.feedback_type_id).is_none() {
                return Err(CliError::UnknownFeedbackType {
                    id: form.feedback_type_id,
                });
            }

            let record = app.feedback.add_feedback(form.into_submission(&user_id)?).await;
            writeln!(out, "Feedback enviado com sucesso! ({})", record.id)?;
        }
        Command::Shell => {
            tracing::debug!("Ignoring nested shell command");
        }
    }
    Ok(())
}

fn list(app: &App, filter: &FeedbackFilter, out: &mut dyn Write) -> Result<(), CliError> {
    if filter.only_mine && !app.auth.is_authenticated() {
        return Err(SubmitError::NotAuthenticated.into());
    }

    let viewer = app.auth.current_user_id();
    let records = app.feedback.filtered(filter);
    if records.is_empty() {
        if filter.is_active() {
            writeln!(out, "Nenhum feedback encontrado com os filtros selecionados.")?;
        } else {
            writeln!(out, "Nenhum feedback enviado ainda.")?;
        }
        return Ok(());
    }

    for record in &records {
        writeln!(out, "{}", render::feedback(&*app.store, record, viewer.as_deref()))?;
    }
    writeln!(out, "{} feedback(s)", records.len())?;
    Ok(())
}

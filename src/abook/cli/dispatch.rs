//! Routing parsed input to the API, and turning every failure into a message.
//!
//! This is the one place errors become text. Handlers below it return
//! `Result`; [`respond`] never fails and never ends the session on its own.

use super::input::{parse_line, Input, InputError, Verb};
use abook::api::{AbookApi, CmdMessage, CmdResult};
use abook::error::{AbookError, Result};
use abook::store::DataStore;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
pub struct Response {
    pub result: CmdResult,
    pub flow: Flow,
    /// False when the command was rejected.
    pub ok: bool,
}

impl Response {
    fn done(result: CmdResult) -> Self {
        Self {
            result,
            flow: Flow::Continue,
            ok: true,
        }
    }

    pub fn failed(message: CmdMessage) -> Self {
        Self {
            result: CmdResult::default().with_message(message),
            flow: Flow::Continue,
            ok: false,
        }
    }
}

/// Parse and run one line of session input.
pub fn respond<S: DataStore>(api: &mut AbookApi<S>, line: &str) -> Response {
    match parse_line(line) {
        Ok(input) => respond_to(api, &input),
        Err(e) => Response::failed(input_error_message(&e)),
    }
}

pub fn respond_to<S: DataStore>(api: &mut AbookApi<S>, input: &Input) -> Response {
    match execute(api, input) {
        Ok(response) => response,
        Err(e) => {
            debug!(verb = %input.verb, error = %e, "command rejected");
            Response::failed(error_message(&e))
        }
    }
}

pub fn execute<S: DataStore>(api: &mut AbookApi<S>, input: &Input) -> Result<Response> {
    let args: Vec<&str> = input.args.iter().map(String::as_str).collect();

    let result = match (input.verb, args.as_slice()) {
        (Verb::Hello, _) => {
            CmdResult::default().with_message(CmdMessage::info("How can I help you?"))
        }
        (Verb::Help, _) => help(),
        (Verb::Exit, _) => {
            return Ok(Response {
                result: CmdResult::default().with_message(CmdMessage::info("Good bye!")),
                flow: Flow::Exit,
                ok: true,
            })
        }
        (Verb::Add, [name, phone]) => api.add_contact(name, phone)?,
        (Verb::Change, [name, new]) => api.change_phone(name, None, new)?,
        (Verb::Change, [name, old, new]) => api.change_phone(name, Some(*old), new)?,
        (Verb::Phone, [name]) => api.show_phone(name)?,
        (Verb::RemovePhone, [name, phone]) => api.remove_phone(name, phone)?,
        (Verb::All, []) => api.all_contacts()?,
        (Verb::Delete, [name]) => api.delete_contact(name)?,
        (Verb::AddBirthday, [name, date]) => api.add_birthday(name, date)?,
        (Verb::ShowBirthday, [name]) => api.show_birthday(name)?,
        (Verb::Birthdays, []) => api.upcoming_birthdays()?,
        (verb, _) => return Err(AbookError::arguments(verb.name(), verb.usage())),
    };

    Ok(Response::done(result))
}

pub fn error_message(err: &AbookError) -> CmdMessage {
    match err {
        AbookError::Validation(e) => {
            CmdMessage::error(format!("Give me the correct arguments please. {}", e))
        }
        AbookError::ContactNotFound(_) => CmdMessage::warning("Contact not found."),
        AbookError::PhoneNotFound { name, phone } => {
            CmdMessage::warning(format!("Phone {} not found for {}.", phone, name))
        }
        AbookError::Arguments { verb, usage } => CmdMessage::error(
            format!("Provide enough arguments. Usage: {} {}", verb, usage)
                .trim_end()
                .to_string(),
        ),
        AbookError::Ambiguous(message) => CmdMessage::warning(message.clone()),
        other => CmdMessage::error(format!("Error: {}", other)),
    }
}

pub fn input_error_message(err: &InputError) -> CmdMessage {
    CmdMessage::error(err.to_string())
}

fn help() -> CmdResult {
    let width = Verb::all()
        .iter()
        .map(|v| v.name().len() + 1 + v.usage().len())
        .max()
        .unwrap_or(0);

    let mut result = CmdResult::default();
    for verb in Verb::all() {
        let synopsis = format!("{} {}", verb.name(), verb.usage());
        result.add_message(CmdMessage::info(format!(
            "  {:<width$}  {}",
            synopsis.trim_end(),
            verb.about(),
            width = width
        )));
    }
    result
}

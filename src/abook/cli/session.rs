use super::dispatch::{input_error_message, respond, Flow, Response};
use super::input::InputError;
use super::render::write_result;
use abook::api::AbookApi;
use abook::error::Result;
use abook::store::DataStore;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub const WELCOME: &str = "Welcome to abook! Type 'exit' or 'close' to quit.";
pub const PROMPT: &str = "Enter a command: ";

/// Read commands line by line until `exit`/`close` or end of input, then
/// save the book. Command failures, including lines that are not valid
/// UTF-8, are printed and the loop goes on. A read error still saves the
/// book before it is returned.
pub fn run_session<S, R, W>(
    api: &mut AbookApi<S>,
    mut input: R,
    out: &mut W,
    prompt: bool,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        if prompt {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                debug!("end of input, closing session");
                api.save()?;
                return Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "reading input failed, saving before exit");
                api.save()?;
                return Err(e.into());
            }
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => respond(api, line),
            Err(_) => {
                debug!(bytes = buf.len(), "input line is not valid UTF-8");
                Response::failed(input_error_message(&InputError::Empty))
            }
        };

        if response.flow == Flow::Exit {
            api.save()?;
            write_result(out, &response.result)?;
            return Ok(());
        }
        write_result(out, &response.result)?;
    }
}

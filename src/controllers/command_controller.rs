use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use crate::config::environment::OutputFormat;
use crate::dto::command_dto::Command;
use crate::dto::response_dto::{ApiResponse, CommandOutput};
use crate::services::{billing_service, lot_service, stay_service};
use crate::state::SystemState;
use crate::utils::errors::{AppError, AppResult};

/// Resultado de procesar una línea de entrada
#[derive(Debug, PartialEq)]
pub enum LineOutcome {
    /// Líneas a escribir en la salida (puede estar vacía)
    Output(Vec<String>),
    /// Fin del procesamiento
    Quit,
}

pub struct CommandController {
    output_format: OutputFormat,
}

impl CommandController {
    pub fn new(output_format: OutputFormat) -> Self {
        Self { output_format }
    }

    /// Ejecutar un comando ya parseado sobre el estado
    pub fn execute(&self, state: &mut SystemState, command: Command) -> AppResult<CommandOutput> {
        match command {
            Command::ListLots => Ok(CommandOutput::Lots(lot_service::list_lots(state))),
            Command::CreateLot(request) => {
                lot_service::create_lot(state, request)?;
                Ok(CommandOutput::LotCreated)
            }
            Command::Entry(request) => stay_service::register_entry(state, request).map(CommandOutput::Entry),
            Command::Exit(request) => stay_service::register_exit(state, request).map(CommandOutput::Exit),
            Command::PlateHistory { plate } => {
                stay_service::history_for_plate(state, &plate).map(CommandOutput::PlateHistory)
            }
            Command::Billing { lot_name, date: None } => {
                billing_service::billing_for_lot(state, &lot_name).map(CommandOutput::DailyTotals)
            }
            Command::Billing {
                lot_name,
                date: Some(date),
            } => billing_service::billing_for_day(state, &lot_name, &date).map(CommandOutput::DayCharges),
            Command::RemoveLot { lot_name } => {
                lot_service::remove_lot(state, &lot_name).map(CommandOutput::RemainingLots)
            }
            Command::Quit => Err(AppError::Internal("quit is handled by the caller".to_string())),
        }
    }

    /// Parsear, ejecutar y renderizar una línea de entrada
    pub fn handle_line(&self, state: &mut SystemState, line: &str) -> LineOutcome {
        let command = match Command::parse(line) {
            Ok(Some(Command::Quit)) => return LineOutcome::Quit,
            Ok(Some(command)) => command,
            Ok(None) => return LineOutcome::Output(Vec::new()),
            Err(e) => return LineOutcome::Output(self.render_error(&e)),
        };

        log::debug!("📥 Comando: {:?}", command);
        match self.execute(state, command) {
            Ok(output) => LineOutcome::Output(self.render(&output)),
            Err(e) => {
                log::warn!("❌ Comando rechazado: {}", e);
                LineOutcome::Output(self.render_error(&e))
            }
        }
    }

    /// Procesar líneas de `input` hasta `q` o fin de entrada, escribiendo en `output`
    ///
    /// Los bytes que no son UTF-8 se sustituyen por U+FFFD; la línea se
    /// procesa igualmente.
    pub fn run<R: BufRead, W: Write>(&self, state: &mut SystemState, mut input: R, output: &mut W) -> io::Result<()> {
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }

            let decoded = String::from_utf8_lossy(&buffer);
            if matches!(decoded, Cow::Owned(_)) {
                log::warn!("⚠️ Línea con bytes no UTF-8: {}", decoded.trim_end());
            }
            let line = decoded.trim_end_matches(|c: char| c == '\n' || c == '\r');

            match self.handle_line(state, line) {
                LineOutcome::Output(lines) => {
                    for rendered in lines {
                        writeln!(output, "{}", rendered)?;
                    }
                }
                LineOutcome::Quit => {
                    log::debug!("👋 Comando de salida recibido");
                    break;
                }
            }
        }

        output.flush()
    }

    fn render(&self, output: &CommandOutput) -> Vec<String> {
        match self.output_format {
            OutputFormat::Text => output.render_lines(),
            OutputFormat::Json => vec![to_json_line(&ApiResponse::success(output))],
        }
    }

    fn render_error(&self, error: &AppError) -> Vec<String> {
        match self.output_format {
            OutputFormat::Text => vec![error.to_string()],
            OutputFormat::Json => vec![to_json_line(&ApiResponse::error(error))],
        }
    }
}

fn to_json_line<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("❌ Error serializando respuesta: {}", e);
        format!("{{\"success\":false,\"error\":{{\"code\":\"INTERNAL_ERROR\",\"message\":\"{}\"}}}}", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(controller: &CommandController, state: &mut SystemState, line: &str) -> Vec<String> {
        match controller.handle_line(state, line) {
            LineOutcome::Output(lines) => lines,
            LineOutcome::Quit => panic!("unexpected quit for '{}'", line),
        }
    }

    #[test]
    fn test_text_session() {
        let controller = CommandController::new(OutputFormat::Text);
        let mut state = SystemState::default();

        assert!(run(&controller, &mut state, "p Norte 2 0.25 0.30 10.00").is_empty());
        assert_eq!(run(&controller, &mut state, "p"), vec!["Norte 2 2"]);
        assert_eq!(run(&controller, &mut state, "e Norte AA-00-AA 01-01-2024 10:00"), vec!["Norte 1"]);
        assert_eq!(
            run(&controller, &mut state, "s Norte AA-00-AA 01-01-2024 10:17"),
            vec!["AA-00-AA 01-01-2024 10:00 01-01-2024 10:17 0.50"]
        );
        assert_eq!(run(&controller, &mut state, "f Norte"), vec!["01-01-2024 0.50"]);
        assert_eq!(run(&controller, &mut state, "f Norte 01-01-2024"), vec!["AA-00-AA 10:17 0.50"]);
        assert_eq!(run(&controller, &mut state, "r Norte"), Vec::<String>::new());
        assert_eq!(run(&controller, &mut state, "f Norte"), vec!["Norte: no such parking."]);
        assert_eq!(controller.handle_line(&mut state, "q"), LineOutcome::Quit);
    }

    #[test]
    fn test_parse_errors_are_reported() {
        let controller = CommandController::new(OutputFormat::Text);
        let mut state = SystemState::default();
        let lines = run(&controller, &mut state, "e Norte AA-00-AA");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Bad request"));
        assert!(run(&controller, &mut state, "z").is_empty());
    }

    #[test]
    fn test_run_survives_invalid_utf8() {
        let controller = CommandController::new(OutputFormat::Text);
        let mut state = SystemState::default();
        let input: &[u8] = b"p Norte 5 1 2 10\np S\xe3o 5 1 2 10\r\np\nq\np\n";
        let mut output = Vec::new();

        controller.run(&mut state, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "Norte 5 5\nS\u{FFFD}o 5 5\n");
        assert_eq!(state.lots.len(), 2);
    }

    #[test]
    fn test_json_output() {
        let controller = CommandController::new(OutputFormat::Json);
        let mut state = SystemState::default();

        let created = run(&controller, &mut state, "p Norte 2 0.25 0.30 10.00");
        let value: serde_json::Value = serde_json::from_str(&created[0]).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["type"], "lot_created");

        let rejected = run(&controller, &mut state, "p Norte 2 0.25 0.30 10.00");
        let value: serde_json::Value = serde_json::from_str(&rejected[0]).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "DUPLICATE_LOT");
    }
}

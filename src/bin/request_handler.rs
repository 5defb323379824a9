use std::io::{self, Read, Write};

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::bin::error::MazeError;
use crate::bin::json_utils::{self, TraceRequest};
use crate::bin::loader::parse_maze;
use crate::bin::network;
use crate::bin::traversal::{trace_path, TraceOptions};
use crate::bin::validator::is_valid;

/// Répond aux requêtes JSON `Validate` et `Trace` reçues par le serveur.
pub struct RequestHandler {
    options: TraceOptions,
    handled: usize,
}

impl RequestHandler {
    pub fn new(options: TraceOptions) -> Self {
        RequestHandler {
            options,
            handled: 0,
        }
    }

    /// Nombre de requêtes traitées depuis la création.
    pub fn handled(&self) -> usize {
        self.handled
    }

    /// Construit la réponse à un message déjà décodé.
    pub fn process_message(&mut self, msg: &Value) -> Value {
        self.handled += 1;

        if let Some(maze) = json_utils::extract_validate_maze(msg) {
            let verdict = match parse_maze(maze) {
                Ok(maze) if is_valid(&maze) => "Valid",
                Ok(_) => "Invalid",
                Err(err) => {
                    debug!(%err, "validate request with unreadable maze");
                    "Invalid"
                }
            };
            return json!({ "ValidateResult": verdict });
        }

        if let Some(request) = json_utils::extract_trace_request(msg) {
            let result = request.and_then(|request| self.trace(&request));
            return match result {
                Ok(path) => json!({ "TraceResult": { "Ok": path } }),
                Err(err) => json!({ "TraceResult": { "Err": err.to_string() } }),
            };
        }

        warn!(?msg, "unknown request");
        json!({ "Error": "expected a Validate or Trace request" })
    }

    fn trace(&self, request: &TraceRequest) -> Result<Value, MazeError> {
        let maze = parse_maze(&request.maze)?;
        if !is_valid(&maze) {
            warn!("tracing through a maze that failed validation");
        }
        let path = trace_path(&maze, request.row, request.col, request.rule, self.options)?;
        Ok(json_utils::path_to_json(request.rule, &path))
    }

    /// Traite les messages d'un client jusqu'à ce qu'il ferme la connexion.
    pub fn serve_connection<S: Read + Write>(&mut self, stream: &mut S) -> io::Result<()> {
        loop {
            let msg = match network::receive_message(stream) {
                Ok(msg) => msg,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    info!(handled = self.handled, "client disconnected");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let response = match json_utils::parse_json(&msg) {
                Ok(parsed) => self.process_message(&parsed),
                Err(e) => {
                    warn!(%e, "failed to parse JSON");
                    json!({ "Error": format!("invalid JSON: {}", e) })
                }
            };
            network::send_message(stream, &response.to_string())?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Flux en mémoire : lit les requêtes préparées, garde les réponses écrites.
    struct MockStream {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
    }

    impl Read for MockStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for MockStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.output.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_validate_requests() {
        let mut handler = RequestHandler::new(TraceOptions::default());
        let valid = handler.process_message(&json!({"Validate": {"maze": "1 2\n2 1\n"}}));
        assert_eq!(valid, json!({"ValidateResult": "Valid"}));
        let invalid = handler.process_message(&json!({"Validate": {"maze": "1 2\n2 0\n"}}));
        assert_eq!(invalid, json!({"ValidateResult": "Invalid"}));
        let malformed = handler.process_message(&json!({"Validate": {"maze": "2 2\n0 0\n"}}));
        assert_eq!(malformed, json!({"ValidateResult": "Invalid"}));
        assert_eq!(handler.handled(), 3);
    }

    #[test]
    fn test_trace_request() {
        let mut handler = RequestHandler::new(TraceOptions::default());
        let response = handler.process_message(&json!({
            "Trace": {"maze": "3 3\n0 0 0\n0 0 0\n0 0 0\n", "row": 1, "col": 1, "rule": "right"}
        }));
        assert_eq!(
            response["TraceResult"]["Ok"]["path"],
            json!([[1, 1], [1, 2], [2, 2], [2, 1]])
        );
    }

    #[test]
    fn test_trace_request_errors() {
        let mut handler = RequestHandler::new(TraceOptions::default());
        let rejected = handler.process_message(&json!({
            "Trace": {"maze": "3 3\n0 0 0\n0 0 0\n0 0 0\n", "row": 2, "col": 2}
        }));
        assert_eq!(
            rejected["TraceResult"]["Err"],
            "Can't enter the maze from cell on row `2` and column `2`"
        );

        let malformed = handler.process_message(&json!({
            "Trace": {"maze": "2 2\n0 0\n", "row": 1, "col": 1}
        }));
        assert!(malformed["TraceResult"]["Err"].is_string());

        let unknown = handler.process_message(&json!({"Shortest": {}}));
        assert!(unknown["Error"].is_string());
    }

    #[test]
    fn test_serve_connection() {
        let mut input = Vec::new();
        network::send_message(&mut input, r#"{"Validate": {"maze": "1 1\n0\n"}}"#).unwrap();
        network::send_message(&mut input, "not json").unwrap();
        let mut stream = MockStream {
            input: Cursor::new(input),
            output: Vec::new(),
        };

        let mut handler = RequestHandler::new(TraceOptions::default());
        handler.serve_connection(&mut stream).unwrap();

        let mut replies = Cursor::new(stream.output);
        let first = json_utils::parse_json(&network::receive_message(&mut replies).unwrap()).unwrap();
        assert_eq!(first, json!({"ValidateResult": "Valid"}));
        let second = json_utils::parse_json(&network::receive_message(&mut replies).unwrap()).unwrap();
        assert!(second["Error"].as_str().unwrap().starts_with("invalid JSON"));
        assert_eq!(handler.handled(), 1);
    }
}

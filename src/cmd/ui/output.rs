//! Structured output abstraction for titra.
//!
//! Provides a unified interface for rendering calculator results in
//! different modes:
//! - Human: Colored glyph-prefixed output for terminal display
//! - Json: Structured JSON events for programmatic consumption
//! - Quiet: Only failures are emitted
//!
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture. Validation failures are always
//! emitted, whatever the mode.

use colored::Colorize;
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use titra::format::format_value;
use titra::outcome::CalculationResult;

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable colored output with glyph prefixes
    Human,
    /// JSON-formatted structured output
    Json,
    /// Silent mode - only failures
    Quiet,
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false, // Assume non-TTY for custom writers
        }
    }

    /// Render a calculation outcome.
    ///
    /// Human mode prints a headline, the value line, and the quality grade
    /// when one is attached; Json mode prints the serialized outcome as a
    /// single event with the rendered display string alongside the raw
    /// value. A failure renders through [`Output::error`] in every mode.
    pub fn result(&self, result: &CalculationResult, decimals: usize) {
        match result {
            CalculationResult::Success {
                label,
                value,
                unit,
                quality,
            } => {
                let rendered = format_value(*value, decimals);
                match self.mode {
                    OutputMode::Human => {
                        self.success("Calculation complete");
                        let line = match unit.as_deref() {
                            // percentages read better without the space
                            Some("%") => format!("{} = {}%", label, rendered),
                            Some(unit) => format!("{} = {} {}", label, rendered, unit),
                            None => format!("{} = {}", label, rendered),
                        };
                        if self.is_tty {
                            self.write_line(&format!("  {}", line.bold()));
                        } else {
                            self.write_line(&format!("  {}", line));
                        }
                        if let Some(quality) = quality {
                            self.detail(&format!("Grade: {}", quality));
                        }
                    }
                    OutputMode::Json => {
                        let mut event = serde_json::to_value(result).unwrap_or_else(|_| json!({}));
                        event["level"] = json!("result");
                        event["display"] = json!(rendered);
                        if let Ok(mut writer) = self.writer.lock() {
                            let _ = writeln!(writer, "{}", event);
                        }
                    }
                    OutputMode::Quiet => {}
                }
            }
            CalculationResult::Failure { message } => self.error(message),
        }
    }

    /// Output a success message: "✓ {msg}" in green
    pub fn success(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    "✓".green().to_string()
                } else {
                    "✓".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => {
                self.write_json("success", msg);
            }
            OutputMode::Quiet => {}
        }
    }

    /// Output a warning message: "⚠ {msg}" in yellow
    pub fn warn(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    "⚠".yellow().to_string()
                } else {
                    "⚠".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => {
                self.write_json("warning", msg);
            }
            OutputMode::Quiet => {}
        }
    }

    /// Output an error message: "✗ {msg}" in red
    pub fn error(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    "✗".red().to_string()
                } else {
                    "✗".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => {
                self.write_json("error", msg);
            }
            OutputMode::Quiet => {
                // Errors always output, even in quiet mode
                self.write_line(&format!("✗ {}", msg));
            }
        }
    }

    /// Output plain info text (no prefix)
    pub fn info(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                self.write_line(msg);
            }
            OutputMode::Json => {
                self.write_json("info", msg);
            }
            OutputMode::Quiet => {}
        }
    }

    /// Output detail text (indented, for subordinate info)
    pub fn detail(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                self.write_line(&format!("  {}", msg));
            }
            OutputMode::Json => {
                self.write_json("detail", msg);
            }
            OutputMode::Quiet => {}
        }
    }

    /// Output a structured JSON event, whatever the mode
    pub fn json(&self, value: &serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", value);
        }
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    /// Write a JSON-formatted log line
    fn write_json(&self, level: &str, msg: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let obj = json!({
                "level": level,
                "msg": msg,
            });
            let _ = writeln!(writer, "{}", obj);
        }
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // Test-specific writer that wraps Arc<Mutex<Vec<u8>>>
    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.buffer.lock().unwrap().flush()
        }
    }

    fn captured(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        let data = buffer.lock().unwrap();
        String::from_utf8(data.clone()).unwrap()
    }

    #[test]
    fn test_human_mode_output() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Human, Box::new(writer));

        output.success("Done");
        output.warn("Warning");
        output.error("Error");
        output.info("Info");
        output.detail("Detail");

        let result = captured(&buffer);
        assert!(result.contains("✓ Done"));
        assert!(result.contains("⚠ Warning"));
        assert!(result.contains("✗ Error"));
        assert!(result.contains("Info"));
        assert!(result.contains("  Detail"));
    }

    #[test]
    fn test_json_mode_output() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Json, Box::new(writer));

        output.success("Done");
        output.detail("Formula: 0.5 × 40");

        let result = captured(&buffer);
        assert!(result.contains(r#""level":"success""#));
        assert!(result.contains(r#""msg":"Done""#));
        assert!(result.contains(r#""level":"detail""#));
    }

    #[test]
    fn test_quiet_mode_only_errors() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Quiet, Box::new(writer));

        output.success("Done");
        output.warn("Warning");
        output.error("Error");
        output.info("Info");

        let result = captured(&buffer);
        // Only error should be present
        assert!(result.contains("✗ Error"));
        assert!(!result.contains("Done"));
        assert!(!result.contains("Warning"));
        assert!(!result.contains("Info"));
    }

    #[test]
    fn test_result_human_rendering() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Human, Box::new(writer));

        let result = CalculationResult::success("Normality (N)", 2.0)
            .with_unit("N")
            .with_quality("excellent");
        output.result(&result, 4);

        let rendered = captured(&buffer);
        assert!(rendered.contains("✓ Calculation complete"));
        assert!(rendered.contains("Normality (N) = 2.0000 N"));
        assert!(rendered.contains("Grade: excellent"));
    }

    #[test]
    fn test_result_human_percent_has_no_space() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Human, Box::new(writer));

        output.result(&CalculationResult::success("Purity", 98.0).with_unit("%"), 2);

        assert!(captured(&buffer).contains("Purity = 98.00%"));
    }

    #[test]
    fn test_result_json_event() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Json, Box::new(writer));

        let result = CalculationResult::success("Strength", 20.0).with_unit("g/L");
        output.result(&result, 4);

        let rendered = captured(&buffer);
        assert!(rendered.contains(r#""level":"result""#));
        assert!(rendered.contains(r#""status":"success""#));
        assert!(rendered.contains(r#""display":"20.0000""#));
    }

    #[test]
    fn test_result_failure_always_emitted() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Quiet, Box::new(writer));

        output.result(&CalculationResult::failure("Please enter a valid Weight"), 4);

        assert!(captured(&buffer).contains("✗ Please enter a valid Weight"));
    }

    #[test]
    fn test_mode_getter() {
        let output = Output::new(OutputMode::Json);
        assert_eq!(output.mode(), OutputMode::Json);
    }
}

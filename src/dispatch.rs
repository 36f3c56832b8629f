use std::io::Write;

use thiserror::Error;

use crate::command::Command;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sink rejected command: {0}")]
    Rejected(String),
}

/// Destino físico (o simulado) de los comandos. El motor trata el dispatch
/// como fire-and-forget: un fallo del sink se reporta al caller pero nunca
/// interrumpe la clasificación del siguiente frame.
pub trait ActuatorSink {
    fn dispatch(&mut self, cmd: &Command) -> Result<(), SinkError>;
}

/// Sink de simulación: imprime y registra cada comando recibido.
#[derive(Default)]
pub struct MockSink {
    pub sent: Vec<Command>,
    /// En silencio no imprime (útil en tests).
    pub quiet: bool,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn silent() -> Self {
        Self {
            sent: Vec::new(),
            quiet: true,
        }
    }
}

impl ActuatorSink for MockSink {
    fn dispatch(&mut self, cmd: &Command) -> Result<(), SinkError> {
        if !self.quiet {
            println!("🤖 [MockSink] {}", cmd);
        }
        self.sent.push(cmd.clone());
        Ok(())
    }
}

/// Sink serie: protocolo de texto delimitado por salto de línea, igual que
/// el firmware del robot original espera ("gpio 17 on\n", "servo 18 0.5\n",
/// raw literal). Genérico sobre cualquier Write (puerto serie abierto como
/// archivo, socket, etc.).
pub struct SerialSink<W: Write> {
    writer: W,
}

impl<W: Write> SerialSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ActuatorSink for SerialSink<W> {
    fn dispatch(&mut self, cmd: &Command) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", cmd)?;
        self.writer.flush()?;
        Ok(())
    }
}

//! Interactive host driving one mounted board.
//!
//! # Responsibility
//! - Own the document, the board and the drag session for one process.
//! - Translate parsed commands into form submits and drag gestures.
//!
//! # Invariants
//! - Command failures are reported to the user and never abort the loop.

use crate::command::{Command, HELP};
use dragboard_core::{
    Board, BoardConfig, Document, DragSession, DropOutcome, FormField, Mount, MountError,
    ProjectId, ProjectStatus, ProjectStore,
};
use log::debug;
use std::io::{self, Write};
use std::rc::Rc;

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    document: Rc<Document>,
    board: Board,
    session: DragSession,
}

impl Shell {
    /// Builds the document, the store and the board described by `config`.
    pub fn new(config: &BoardConfig) -> Result<Self, MountError> {
        let document = Rc::new(Document::with_default_templates(&config.host_id));
        let mount: Rc<dyn Mount> = document.clone();
        let board = Board::mount(Rc::new(ProjectStore::new()), mount, config)?;
        Ok(Self {
            document,
            board,
            session: DragSession::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs one command, writing user-facing output to `out`.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        debug!("event=shell_command module=cli status=ok command={:?}", command);
        match command {
            Command::Add {
                title,
                description,
                people,
            } => {
                let form = self.board.form();
                form.set_field(FormField::Title, title);
                form.set_field(FormField::Description, description);
                form.set_field(FormField::People, people);
                match form.submit() {
                    Ok(id) => writeln!(out, "added {id}")?,
                    Err(err) => writeln!(out, "alert: {err}")?,
                }
            }
            Command::Move { id_prefix, to } => match self.resolve(&id_prefix) {
                Ok(id) => match self.board.move_project(&mut self.session, id, to) {
                    Ok(outcome) => report_outcome(&outcome, out)?,
                    Err(err) => writeln!(out, "error: {err}")?,
                },
                Err(message) => writeln!(out, "error: {message}")?,
            },
            Command::Drag { id_prefix } => {
                let card = self
                    .resolve(&id_prefix)
                    .and_then(|id| {
                        self.board
                            .card(id)
                            .ok_or_else(|| format!("no card for {id}"))
                    });
                match card.map(|card| self.session.start(card)) {
                    Ok(Ok(())) => writeln!(out, "dragging")?,
                    Ok(Err(err)) => writeln!(out, "error: {err}")?,
                    Err(message) => writeln!(out, "error: {message}")?,
                }
            }
            Command::Over(kind) => match self.session.drag_over(self.board.view(kind)) {
                Ok(true) => writeln!(out, "over {kind}: drop allowed")?,
                Ok(false) => writeln!(out, "over {kind}: drop rejected")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Command::Leave(kind) => match self.session.drag_leave(self.board.view(kind)) {
                Ok(()) => writeln!(out, "left {kind}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Command::Drop(kind) => match self.session.drop(self.board.view(kind)) {
                Ok(outcome) => report_outcome(&outcome, out)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Command::Cancel => match self.session.cancel() {
                Ok(outcome) => report_outcome(&outcome, out)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Command::Show => write!(out, "{}", self.document.render_text())?,
            Command::Json => {
                let snapshot = self.board.store().snapshot();
                match serde_json::to_string_pretty(&*snapshot) {
                    Ok(json) => writeln!(out, "{json}")?,
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Resolves a full id or a unique id prefix.
    fn resolve(&self, id_prefix: &str) -> Result<ProjectId, String> {
        let matches: Vec<ProjectId> = self
            .board
            .store()
            .snapshot()
            .iter()
            .map(|project| project.id)
            .filter(|id| id.to_string().starts_with(id_prefix))
            .collect();
        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(format!("no project matches `{id_prefix}`")),
            _ => Err(format!("`{id_prefix}` matches {} projects", matches.len())),
        }
    }
}

fn report_outcome(outcome: &DropOutcome, out: &mut impl Write) -> io::Result<()> {
    match outcome {
        DropOutcome::Dropped(target) => writeln!(out, "dropped on {target}"),
        DropOutcome::Cancelled => writeln!(out, "drag cancelled"),
    }
}

/// Lists per-view counts, used after each command in interactive mode.
pub fn summary(board: &Board) -> String {
    ProjectStatus::ALL
        .iter()
        .map(|kind| format!("{kind}={}", board.view(*kind).project_ids().len()))
        .collect::<Vec<_>>()
        .join(" ")
}

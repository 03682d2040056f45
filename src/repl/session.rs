//! Session state and command execution.
//!
//! A `Session` owns everything one REPL user sees: the cube, its fixed
//! projection, the current symmetry and the coloring. Every command
//! computes its result first and commits only when nothing failed, so an
//! error never leaves a half-applied state behind.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::automorphism::Automorphism;
use crate::config::ReplConfig;
use crate::model::{bits, Dimension, Edge, Hypercube, VertexId};
use crate::projection::ProjectionTable;
use crate::render::{self, Color, Coloring, Frame};
use crate::{Error, Result};
use super::ast::{Command, Target, VertexSet, COMMANDS};

/// What the controller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State may have changed; the next frame shows it.
    Updated,
    /// Print this text.
    Message(String),
    /// Leave the REPL.
    Quit,
}

/// JSON view of the current state.
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    dimension: Dimension,
    automorphism: &'a Automorphism,
    display: String,
    order: u64,
    labeling: Vec<String>,
}

pub struct Session {
    cube: Hypercube,
    table: ProjectionTable,
    current: Automorphism,
    coloring: Coloring,
    rng: StdRng,
    verbose: bool,
    last_line: Vec<Command>,
    config: ReplConfig,
}

impl Session {
    pub fn new(config: ReplConfig) -> Self {
        let dim = config.initial_dimension;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            cube: Hypercube::build(dim),
            table: ProjectionTable::build(dim),
            current: Automorphism::identity(dim),
            coloring: Coloring::new(),
            rng,
            verbose: config.verbose,
            last_line: Vec::new(),
            config,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn dimension(&self) -> Dimension {
        self.cube.dimension()
    }

    pub fn cube(&self) -> &Hypercube {
        &self.cube
    }

    pub fn table(&self) -> &ProjectionTable {
        &self.table
    }

    pub fn current(&self) -> &Automorphism {
        &self.current
    }

    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Label displayed at the position of each vertex.
    pub fn labeling(&self) -> Result<Vec<VertexId>> {
        self.cube.labeling(&self.current)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render the current state.
    pub fn frame(&self) -> Result<Frame> {
        let labeling = self.labeling()?;
        render::render(&self.table, &labeling, self.cube.edges(), Some(&self.coloring))
    }

    /// The current frame as terminal text, with ANSI colors when enabled.
    pub fn render_text(&self) -> Result<String> {
        let frame = self.frame()?;
        Ok(if self.config.color { frame.to_ansi() } else { frame.to_string() })
    }

    /// The current symmetry, its order and its cycles on vertices.
    pub fn describe(&self) -> String {
        let dim = self.dimension();
        let cycles = self.current.cycles();
        let cycles = if cycles.is_empty() {
            "none".to_string()
        } else {
            cycles
                .iter()
                .map(|cycle| {
                    let labels: Vec<String> = cycle.iter().map(|v| v.bit_string(dim)).collect();
                    format!("({})", labels.join(" "))
                })
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!(
            "symmetry: {}\norder: {}\ncycles: {cycles}",
            self.current,
            self.current.order()
        )
    }

    /// The current symmetry and labeling as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        let dim = self.dimension();
        let snapshot = Snapshot {
            dimension: dim,
            automorphism: &self.current,
            display: self.current.to_string(),
            order: self.current.order(),
            labeling: self.labeling()?.iter().map(|v| v.bit_string(dim)).collect(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Parse a line. An empty line stands for the previous line's commands;
    /// a line that parses becomes the new previous line.
    pub fn prepare_line(&mut self, line: &str) -> Result<Vec<Command>> {
        if line.trim().is_empty() {
            return Ok(self.last_line.clone());
        }
        let commands = super::parse(line)?;
        self.last_line = commands.clone();
        Ok(commands)
    }

    /// Run every command on a line, stopping at the first error. Commands
    /// before the failing one stay applied.
    pub fn execute_line(&mut self, line: &str) -> Result<Vec<Outcome>> {
        let commands = self.prepare_line(line)?;
        let mut outcomes = Vec::with_capacity(commands.len());
        for command in &commands {
            let outcome = self.execute(command)?;
            let quit = outcome == Outcome::Quit;
            outcomes.push(outcome);
            if quit {
                break;
            }
        }
        Ok(outcomes)
    }

    /// Run one command.
    pub fn execute(&mut self, command: &Command) -> Result<Outcome> {
        debug!(?command, "executing command");
        let dim = self.dimension();

        match command {
            Command::New(n) => {
                let dim = Dimension::new(*n)?;
                self.select_dimension(dim);
                Ok(Outcome::Updated)
            }
            Command::Flip(axis) => self.transform(Automorphism::flip(*axis, dim)?),
            Command::Swap(i, j) => self.transform(Automorphism::transposition(*i, *j, dim)?),
            Command::Reflect(text) => {
                self.require_axes()?;
                let mask = bits::parse_mask(text, dim)?;
                self.transform(Automorphism::reflection(mask, dim)?)
            }
            Command::Rotate(order) => {
                self.require_axes()?;
                self.transform(Automorphism::from_bit_order(order, dim)?)
            }
            Command::Random => {
                let element = Automorphism::random(dim, &mut self.rng);
                self.transform(element)
            }
            Command::Invert => {
                self.current = self.current.inverse();
                Ok(self.updated())
            }
            Command::Reset => {
                self.current = Automorphism::identity(dim);
                Ok(self.updated())
            }
            Command::Show => Ok(Outcome::Message(self.describe())),
            Command::Json => Ok(Outcome::Message(self.to_json()?)),
            Command::Color { target, color } => {
                let (vertices, edges) = self.resolve(target)?;
                self.paint(&vertices, &edges, Some(*color));
                Ok(Outcome::Updated)
            }
            Command::Uncolor { target } => {
                let (vertices, edges) = self.resolve(target)?;
                self.paint(&vertices, &edges, None);
                Ok(Outcome::Updated)
            }
            Command::Help => Ok(Outcome::Message(help_text())),
            Command::Verbose => {
                self.verbose = !self.verbose;
                let state = if self.verbose { "on" } else { "off" };
                Ok(Outcome::Message(format!("verbose {state}")))
            }
            Command::Exit => Ok(Outcome::Quit),
        }
    }

    fn select_dimension(&mut self, dim: Dimension) {
        info!(dimension = %dim, "selected dimension");
        self.cube = Hypercube::build(dim);
        self.table = ProjectionTable::build(dim);
        self.current = Automorphism::identity(dim);
        self.coloring.clear();
    }

    /// Apply `element` after the current symmetry.
    fn transform(&mut self, element: Automorphism) -> Result<Outcome> {
        self.current = element.compose(&self.current)?;
        Ok(self.updated())
    }

    fn updated(&self) -> Outcome {
        if self.verbose {
            Outcome::Message(format!("{} (order {})", self.current, self.current.order()))
        } else {
            Outcome::Updated
        }
    }

    /// Reflections and rotations need at least one coordinate.
    fn require_axes(&self) -> Result<()> {
        let dim = self.dimension();
        if dim.get() == 0 {
            return Err(Error::AxisOutOfRange { axis: 0, dimension: 0 });
        }
        Ok(())
    }

    fn resolve(&self, target: &Target) -> Result<(Vec<VertexId>, Vec<Edge>)> {
        Ok(match target {
            Target::Vertices(set) => (self.vertex_set(set)?, Vec::new()),
            Target::Between(set) => {
                let vertices = self.vertex_set(set)?;
                (Vec::new(), self.cube.induced_edges(&vertices))
            }
            Target::Subcube(pattern) => {
                let vertices = bits::pattern_vertices(pattern, self.dimension())?;
                let edges = self.cube.induced_edges(&vertices);
                (vertices, edges)
            }
        })
    }

    fn vertex_set(&self, set: &VertexSet) -> Result<Vec<VertexId>> {
        let dim = self.dimension();
        match set {
            VertexSet::Labels(labels) => labels.iter().map(|l| bits::parse_vertex(l, dim)).collect(),
            VertexSet::Pattern(pattern) => bits::pattern_vertices(pattern, dim),
        }
    }

    fn paint(&mut self, vertices: &[VertexId], edges: &[Edge], color: Option<Color>) {
        match color {
            Some(color) => {
                self.coloring.color_vertices(vertices, color);
                self.coloring.color_edges(edges, color);
            }
            None => {
                self.coloring.uncolor_vertices(vertices);
                self.coloring.uncolor_edges(edges);
            }
        }
    }
}

/// Command summary printed by `help`.
pub fn help_text() -> String {
    let usage_width = COMMANDS.iter().map(|(usage, _, _)| usage.len()).max().unwrap_or(0);
    let mut out = String::from("Commands (several may share a line, an empty line repeats the last):\n");
    for (usage, description, example) in COMMANDS {
        out.push_str(&format!("  {usage:<usage_width$}  {description} (e.g. {example})\n"));
    }
    let colors: Vec<&str> = Color::ALL.iter().map(|c| c.name()).collect();
    out.push_str("Targets: vertex labels, a pattern like 1*0, between <vertices>, subcube <pattern>\n");
    out.push_str(&format!("Colors: {}", colors.join(", ")));
    out
}

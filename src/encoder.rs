// src/encoder.rs

//! Defines the `Encoder`, which binds a partition strategy, the boundary
//! table computed from one surface snapshot, and the classifier built
//! from that table, and turns every surface sample into a symbol.
//!
//! The boundary table is computed once, at construction. `rebind` swaps
//! in a fresh surface copy without recomputing the table; construct a new
//! `Encoder` if the zone layout must follow the new surface's range.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use log::{debug, error};

use crate::classifier::ZonedClassifier;
use crate::error::EncodeError;
use crate::ngram::NGramGraph;
use crate::partition::PartitionStrategy;
use crate::surface::Surface;
use crate::symbol::{BoundaryEntry, TextPoint};

/// N-gram rank used when lifting rendered text into a graph.
const NGRAM_SIZE: usize = 3;
/// Co-occurrence window used when lifting rendered text into a graph.
const NGRAM_WINDOW: usize = 3;

/// Turns surface samples into an ordered symbol sequence ("the text").
///
/// Owns an independent copy of its surface, so two encoders over the
/// same data never alias; each is safe to drive from its own thread.
#[derive(Debug, Clone)]
pub struct Encoder {
    surface: Surface,
    strategy: PartitionStrategy,
    table: Vec<BoundaryEntry>,
    classifier: ZonedClassifier,
    text: Vec<TextPoint>,
}

impl Encoder {
    /// Builds an encoder bound to a copy of `surface`, with the boundary
    /// table and classifier for `zones` zones computed up front. The
    /// symbol sequence starts empty; call [`classify`](Self::classify) to
    /// populate it.
    pub fn new(
        strategy: PartitionStrategy,
        zones: usize,
        surface: &Surface,
    ) -> Result<Self, EncodeError> {
        let table = strategy.boundary_table(surface, zones)?;
        let classifier = ZonedClassifier::from_table(table.clone())?;
        debug!(
            "encoder bound: {:?}, {} zones, domain [{}, {}]",
            strategy,
            zones,
            classifier.min(),
            classifier.max()
        );
        Ok(Encoder {
            surface: surface.clone(),
            strategy,
            table,
            classifier,
            text: Vec::new(),
        })
    }

    /// Replaces the bound surface with an independent copy of `surface`
    /// and clears the symbol sequence. The boundary table is **not**
    /// recomputed.
    pub fn rebind(&mut self, surface: &Surface) {
        self.surface = surface.clone();
        self.text.clear();
    }

    /// Classifies every sample of the bound surface, in scan order,
    /// appending one `TextPoint` each.
    ///
    /// Repeated calls without an intervening [`rebind`](Self::rebind)
    /// append a second full pass; clearing first is the caller's
    /// responsibility. Fails with [`EncodeError::OutOfDomain`] on the
    /// first sample whose measured value falls outside the boundary
    /// table.
    pub fn classify(&mut self) -> Result<(), EncodeError> {
        self.text.reserve(self.surface.total());
        for point in self.surface.points() {
            let value = self.strategy.measure(&self.surface, point);
            let symbol = self.classifier.classify(value)?;
            self.text.push(TextPoint {
                index: point.index,
                symbol,
            });
        }
        Ok(())
    }

    /// The symbol sequence produced by [`classify`](Self::classify).
    pub fn text(&self) -> &[TextPoint] {
        &self.text
    }

    /// The boundary table this encoder classifies against.
    pub fn boundary_table(&self) -> &[BoundaryEntry] {
        &self.table
    }

    /// The bound surface snapshot.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Multiplies the rms reference by `10^exponent` and rescales the
    /// bound surface's heights accordingly. Meant to run before any
    /// classification pass.
    pub fn rescale(&mut self, exponent: i32) {
        let new_rms = self.surface.rms() * 10f64.powi(exponent);
        self.surface.rescale(new_rms);
    }

    /// Renders the symbol sequence as N rows of N symbols, each row
    /// newline-terminated, with one trailing blank line. No metadata
    /// header; see [`render_to`](Self::render_to) for the file form.
    pub fn render(&self) -> String {
        let n = self.surface.side_len();
        let mut out = String::with_capacity(self.text.len() + self.text.len() / n.max(1) + 2);
        for (i, point) in self.text.iter().enumerate() {
            out.push(point.symbol);
            if (i + 1) % n == 0 {
                out.push('\n');
            }
        }
        out.push('\n');
        out
    }

    /// Writes the metadata header and the symbol grid to `sink`.
    ///
    /// Header format: `rms:<rms>:clx:<clx>:cly:<cly>:N:<N>`. The sink is
    /// taken by value, so it is dropped (released) whether or not a write
    /// fails partway.
    pub fn render_to<W: Write>(&self, mut sink: W) -> anyhow::Result<()> {
        let s = &self.surface;
        let mut out = format!(
            "rms:{}:clx:{}:cly:{}:N:{}\n",
            s.rms(),
            s.clx(),
            s.cly(),
            s.side_len()
        );
        out.push_str(&self.render());
        sink.write_all(out.as_bytes())
            .context("failed to write encoded text")?;
        sink.flush().context("failed to flush encoded text")?;
        Ok(())
    }

    /// Creates `path` and renders into it via
    /// [`render_to`](Self::render_to).
    pub fn render_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create output file {}", path.display()))?;
        self.render_to(BufWriter::new(file))
            .with_context(|| format!("failed to render to {}", path.display()))
    }

    /// Loads a rendered text file and lifts it into an n-gram graph for
    /// downstream similarity work. A load failure is logged and returned
    /// to the caller; it is recoverable, never a panic.
    pub fn to_graph<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<NGramGraph> {
        let path = path.as_ref();
        match NGramGraph::load_from_text(path, NGRAM_SIZE, NGRAM_WINDOW) {
            Ok(graph) => Ok(graph),
            Err(e) => {
                error!("failed to build n-gram graph from {}: {:#}", path.display(), e);
                Err(e)
            }
        }
    }
}

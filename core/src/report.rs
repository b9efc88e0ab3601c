//! Reading and writing the simulation reports.
//!
//! Both reports are headerless, comma-separated files. The agent report
//! contains one agent name per line, the interaction report contains
//! `agent,partner,weight` triples.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::errors::{InteraxError, Result};
use crate::types::InteractionRecord;
use crate::InteractionGraph;

const INTERACTION_FIELDS: usize = 3;

fn report_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}

fn report_writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.has_headers(false).flexible(true);
    builder
}

fn open_report(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| InteraxError::OpenReport {
        path: path.to_path_buf(),
        source: e,
    })
}

fn record_line(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

fn node_id_field(record: &csv::StringRecord, i: usize, origin: &Path) -> Result<String> {
    match record.get(i) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(InteraxError::EmptyNodeId {
            path: origin.to_path_buf(),
            line: record_line(record),
        }),
    }
}

/// Parse an agent report from any reader.
///
/// `origin` is only used to describe the source in error messages.
pub fn read_agent_report_from_reader<R: Read>(reader: R, origin: &Path) -> Result<Vec<String>> {
    let mut csv_reader = report_reader_builder().from_reader(reader);
    let mut result = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source| InteraxError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;
        result.push(node_id_field(&record, 0, origin)?);
    }
    Ok(result)
}

/// Parse an interaction report from any reader.
///
/// Rows must have exactly three fields and the weight must be a finite
/// number, otherwise parsing stops with an error pointing to the line.
pub fn read_interaction_report_from_reader<R: Read>(
    reader: R,
    origin: &Path,
) -> Result<Vec<InteractionRecord>> {
    let mut csv_reader = report_reader_builder().from_reader(reader);
    let mut result = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source| InteraxError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;
        if record.len() != INTERACTION_FIELDS {
            return Err(InteraxError::MalformedRecord {
                path: origin.to_path_buf(),
                line: record_line(&record),
                expected: INTERACTION_FIELDS,
                found: record.len(),
            });
        }
        let node1 = node_id_field(&record, 0, origin)?;
        let node2 = node_id_field(&record, 1, origin)?;
        let raw_weight = record.get(2).unwrap_or_default();
        let weight = raw_weight
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| InteraxError::InvalidWeight {
                path: origin.to_path_buf(),
                line: record_line(&record),
                value: raw_weight.to_string(),
            })?;
        result.push(InteractionRecord {
            node1,
            node2,
            weight,
        });
    }
    Ok(result)
}

pub fn read_agent_report(path: &Path) -> Result<Vec<String>> {
    let file = open_report(path)?;
    read_agent_report_from_reader(file, path)
}

pub fn read_interaction_report(path: &Path) -> Result<Vec<InteractionRecord>> {
    let file = open_report(path)?;
    read_interaction_report_from_reader(file, path)
}

/// Node identifiers are trimmed when reading, so only identifiers that
/// survive a round trip unchanged can be written.
fn writable_node_id(id: &str) -> Result<&str> {
    if id.is_empty() || id.trim() != id {
        Err(InteraxError::UnwritableNodeId(id.to_string()))
    } else {
        Ok(id)
    }
}

/// Write agent names in the report format.
///
/// Fails with [`InteraxError::UnwritableNodeId`] for empty names or names
/// with leading or trailing whitespace.
pub fn write_agent_report_to_writer<W: Write>(writer: W, agents: &[String]) -> Result<()> {
    let mut csv_writer = report_writer_builder().from_writer(writer);
    for a in agents {
        csv_writer.write_record([writable_node_id(a)?])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write interaction records in the report format.
///
/// Weights use the shortest representation that parses back to the same
/// value, so reading the output again yields identical weights. Node
/// identifiers are checked like in [`write_agent_report_to_writer`].
pub fn write_interaction_report_to_writer<W: Write>(
    writer: W,
    records: &[InteractionRecord],
) -> Result<()> {
    let mut csv_writer = report_writer_builder().from_writer(writer);
    for r in records {
        let weight = r.weight.to_string();
        csv_writer.write_record([
            writable_node_id(&r.node1)?,
            writable_node_id(&r.node2)?,
            weight.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_agent_report(path: &Path, agents: &[String]) -> Result<()> {
    write_agent_report_to_writer(File::create(path)?, agents)
}

pub fn write_interaction_report(path: &Path, records: &[InteractionRecord]) -> Result<()> {
    write_interaction_report_to_writer(File::create(path)?, records)
}

/// Locations of the two reports that make up one data set.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFiles {
    pub agent_report: PathBuf,
    pub interaction_report: PathBuf,
}

impl ReportFiles {
    pub fn in_dir<P: AsRef<Path>>(dir: P, agent_report: &str, interaction_report: &str) -> Self {
        let dir = dir.as_ref();
        ReportFiles {
            agent_report: dir.join(agent_report),
            interaction_report: dir.join(interaction_report),
        }
    }
}

/// Read both reports and build the interaction graph.
pub fn load_graph(files: &ReportFiles) -> Result<InteractionGraph> {
    let t_start = Instant::now();

    debug!("reading agent report {}", files.agent_report.display());
    let agents = read_agent_report(&files.agent_report)?;
    debug!(
        "reading interaction report {}",
        files.interaction_report.display()
    );
    let interactions = read_interaction_report(&files.interaction_report)?;
    info!(
        "read {} agents and {} interactions",
        agents.len(),
        interactions.len()
    );

    let g = InteractionGraph::from_records(&agents, &interactions);
    info!(
        "built graph with {} nodes and {} edges in {} ms",
        g.node_count(),
        g.edge_count(),
        t_start.elapsed().as_millis()
    );
    Ok(g)
}

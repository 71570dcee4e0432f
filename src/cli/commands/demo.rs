//! demo command - Build the genealogy example and print its ranks

use std::collections::BTreeSet;

use anyhow::{bail, Context as _, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::core::tissue::Tissue;
use crate::core::types::{CellKey, Dimension, Direction};
use crate::core::verify::{fast_verify, VerifyResult};
use crate::ui::output::{self, Verbosity};

/// Dimension linking parents to children.
pub const GENERATION: &str = "generation";
/// Dimension linking brothers and sisters.
pub const SIBLING: &str = "sibling";

/// One printed rank.
#[derive(Debug, Serialize)]
pub struct RankView {
    pub dimension: String,
    pub cells: Vec<String>,
    pub ring: bool,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    cells: usize,
    deleted: Vec<String>,
    direction: Direction,
    ranks: Vec<RankView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verify: Option<VerifyResult>,
}

/// Build the genealogy structure.
///
/// Ann is re-linked under Elizabeth II in `generation` with replace,
/// which displaces Charles from that rank.
pub fn build_genealogy() -> Result<Tissue<String>> {
    use Direction::{Negative, Positive};

    let generation = Dimension::new(GENERATION)?;
    let sibling = Dimension::new(SIBLING)?;
    let mut tissue = Tissue::new();

    let liz = tissue.start("Elizabeth II".to_string());
    let charles = tissue.add(liz, &generation, "Charles".into(), Positive)?;
    let ann = tissue.add(charles, &sibling, "Ann".into(), Positive)?;
    tissue.connect(ann, liz, &generation, Negative, true)?;
    let andrew = tissue.add(ann, &sibling, "Andrew".into(), Positive)?;
    tissue.add(andrew, &sibling, "Edward".into(), Positive)?;
    let george = tissue.add(liz, &generation, "George VI".into(), Negative)?;
    tissue.add(george, &generation, "Victoria".into(), Negative)?;

    Ok(tissue)
}

/// Find the first cell, in key order, holding `name`.
pub fn find_by_value(tissue: &Tissue<String>, name: &str) -> Option<CellKey> {
    tissue
        .cells()
        .find(|cell| cell.value() == name)
        .map(|cell| cell.key())
}

/// Collect every rank of every dimension, walked in `direction`.
///
/// Each rank is listed once, from the end opposite `direction`. Cells
/// whose slots in a dimension are both empty are not part of a rank.
pub fn collect_ranks(tissue: &Tissue<String>, direction: Direction) -> Result<Vec<RankView>> {
    let dimensions: BTreeSet<Dimension> = tissue
        .cells()
        .flat_map(|cell| cell.dimensions().cloned())
        .collect();

    let mut ranks = Vec::new();
    for dimension in &dimensions {
        let mut seen = BTreeSet::new();
        for cell in tissue.cells() {
            let linked = cell
                .connectors(dimension)
                .is_some_and(|slots| !slots.is_empty());
            if !linked || seen.contains(&cell.key()) {
                continue;
            }

            let origin = tissue.end(cell.key(), dimension, direction.other())?;
            let mut rank = tissue.rank(origin, dimension, direction)?;
            let keys: Vec<CellKey> = rank.by_ref().collect();
            let ring = rank.is_closed();

            let cells = keys
                .iter()
                .map(|&key| tissue.value(key).cloned())
                .collect::<Result<Vec<_>, _>>()?;
            seen.extend(keys);
            ranks.push(RankView {
                dimension: dimension.to_string(),
                cells,
                ring,
            });
        }
    }

    Ok(ranks)
}

/// Run the demo.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `delete` - Names of cells to delete, in order
/// * `json` - Force JSON output
/// * `direction` - Direction override for printing ranks
pub fn demo(
    ctx: &Context,
    delete: &[String],
    json: bool,
    direction: Option<Direction>,
) -> Result<()> {
    let json = json || ctx.config.json();
    let direction = direction.unwrap_or_else(|| ctx.config.direction());

    let mut tissue = build_genealogy().context("Failed to build genealogy")?;

    for name in delete {
        let Some(key) = find_by_value(&tissue, name) else {
            bail!("No cell named '{}'", name);
        };
        tissue
            .delete(key)
            .with_context(|| format!("Failed to delete '{}'", name))?;
        tracing::debug!(%key, name = %name, "deleted by name");
    }

    let verify = ctx.config.verify().then(|| fast_verify(&tissue));
    let ranks = collect_ranks(&tissue, direction)?;

    if json {
        let report = DemoReport {
            cells: tissue.len(),
            deleted: delete.to_vec(),
            direction,
            ranks,
            verify,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for rank in &ranks {
        let line = output::format_rank(&rank.cells, rank.ring);
        output::print(format!("{}: {line}", rank.dimension), ctx.verbosity);
    }

    if let Some(result) = verify {
        if !result.ok {
            for err in &result.errors {
                output::warn(err, ctx.verbosity);
            }
            bail!("Tissue failed verification ({} problems)", result.errors.len());
        }
        if ctx.verbosity == Verbosity::Debug {
            output::print("verify: ok", ctx.verbosity);
        }
    }

    Ok(())
}

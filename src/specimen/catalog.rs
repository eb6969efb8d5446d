use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rayon::prelude::*;

use crate::foundation::error::{SpecimenError, SpecimenResult};
use crate::random::prng::seed_from_f64;
use crate::specimen::assemble::{Specimen, resolve_cue};
use crate::specimen::input::CueDefinition;

/// An authored list of cue definitions, as loaded from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    pub cues: Vec<CueDefinition>,
}

impl Catalog {
    pub fn from_reader<R: std::io::Read>(r: R) -> SpecimenResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SpecimenError::serde(format!("parse catalog JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> SpecimenResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| SpecimenError::serde(format!("parse catalog JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> SpecimenResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SpecimenError::validation(format!("open catalog JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Structural checks that do not need any cue to resolve: at least one cue, no empty or
    /// repeated ids.
    pub fn validate(&self) -> SpecimenResult<()> {
        if self.cues.is_empty() {
            return Err(SpecimenError::validation("catalog has no cues"));
        }
        let mut seen = HashSet::with_capacity(self.cues.len());
        for (i, cue) in self.cues.iter().enumerate() {
            if cue.id.trim().is_empty() {
                return Err(SpecimenError::validation(format!("cue #{i} has an empty id")));
            }
            if !seen.insert(cue.id.as_str()) {
                return Err(SpecimenError::validation(format!(
                    "duplicate cue id '{}'",
                    cue.id
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of resolving one catalog cue.
#[derive(Debug)]
pub struct CatalogEntry {
    pub id: String,
    pub outcome: SpecimenResult<Specimen>,
}

/// Per-cue outcomes in catalog order, plus authoring warnings that do not fail a cue.
#[derive(Debug, Default)]
pub struct CatalogReport {
    pub entries: Vec<CatalogEntry>,
    pub warnings: Vec<String>,
}

impl CatalogReport {
    pub fn failures(&self) -> impl Iterator<Item = (&str, &SpecimenError)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            Ok(_) => None,
            Err(err) => Some((e.id.as_str(), err)),
        })
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn specimens(&self) -> impl Iterator<Item = (&str, &Specimen)> {
        self.entries
            .iter()
            .filter_map(|e| e.outcome.as_ref().ok().map(|s| (e.id.as_str(), s)))
    }
}

/// Resolves every cue in parallel. Each cue owns its PRNG, so the report is identical to a
/// sequential run and keeps catalog order.
///
/// A bad cue fails only its own entry. Seeds shared between cues and seeds `<= 0` are legal
/// but usually authoring slips, so they are reported as warnings.
#[tracing::instrument(skip_all, fields(cues = catalog.cues.len()))]
pub fn resolve_catalog(catalog: &Catalog) -> CatalogReport {
    let entries: Vec<CatalogEntry> = catalog
        .cues
        .par_iter()
        .map(|cue| CatalogEntry {
            id: cue.id.clone(),
            outcome: resolve_cue(cue),
        })
        .collect();

    let warnings = seed_warnings(&catalog.cues);
    for w in &warnings {
        tracing::warn!("{w}");
    }
    for entry in &entries {
        if let Err(err) = &entry.outcome {
            tracing::warn!(cue = %entry.id, stage = ?err.stage(), "{err}");
        }
    }

    CatalogReport { entries, warnings }
}

fn seed_warnings(cues: &[CueDefinition]) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut first_by_seed: HashMap<i64, &str> = HashMap::new();
    for cue in cues {
        // Unparseable seeds already fail their own entry.
        let Ok(seed) = seed_from_f64(cue.specimen_seed) else {
            continue;
        };
        if seed <= 0 {
            warnings.push(format!("cue '{}' has non-positive seed {seed}", cue.id));
        }
        match first_by_seed.get(&seed) {
            Some(first) => warnings.push(format!(
                "cue '{}' reuses seed {seed} from cue '{first}'",
                cue.id
            )),
            None => {
                first_by_seed.insert(seed, cue.id.as_str());
            }
        }
    }
    warnings
}

#[cfg(test)]
#[path = "../../tests/unit/specimen/catalog.rs"]
mod tests;

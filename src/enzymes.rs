use crate::restriction_enzyme::{EnzymeLookup, RestrictionEnzyme};
use anyhow::{Result, anyhow};
use std::fs;

pub const RUNTIME_REBASE_PATH: &str = "data/resources/rebase.enzymes.json";
const BUILTIN_ENZYMES_JSON: &str = include_str!("../assets/enzymes.json");

#[derive(Clone, Debug, Default)]
pub struct Enzymes {
    restriction_enzymes: Vec<RestrictionEnzyme>,
}

impl Enzymes {
    pub fn new(json_text: &str) -> Result<Self> {
        let res: serde_json::Value = serde_json::from_str(json_text)?;
        let arr = res
            .as_array()
            .ok_or(anyhow!("Enzymes file is not a JSON array"))?;
        let mut restriction_enzymes = Vec::with_capacity(arr.len());
        for row in arr {
            match row.get("type").and_then(|et| et.as_str()) {
                Some("restriction") => {
                    let mut re: RestrictionEnzyme = serde_json::from_value(row.clone())
                        .map_err(|e| anyhow!("Bad restriction enzyme {row}: {e}"))?;
                    re.cut_locations()
                        .map_err(|e| anyhow!("Bad cut locations for {}: {e}", re.name))?;
                    re.check_palindromic();
                    restriction_enzymes.push(re);
                }
                Some(other) => {
                    log::debug!("Skipping enzyme entry of type '{other}'");
                }
                None => return Err(anyhow!("Missing enzyme type for {}", row)),
            }
        }
        Ok(Self {
            restriction_enzymes,
        })
    }

    pub fn from_path(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow!("Could not read enzymes file '{path}': {e}"))?;
        Self::new(&text)
    }

    pub fn restriction_enzymes(&self) -> &Vec<RestrictionEnzyme> {
        &self.restriction_enzymes
    }

    /// The built-in database, replaced by the runtime file when that exists
    /// and holds at least one restriction enzyme.
    pub fn builtin_with_runtime_override() -> Self {
        let mut base = match Enzymes::new(BUILTIN_ENZYMES_JSON) {
            Ok(base) => base,
            Err(e) => {
                log::error!("Built-in enzyme database is unusable: {e}");
                Enzymes::default()
            }
        };
        if let Ok(text) = fs::read_to_string(RUNTIME_REBASE_PATH) {
            match Enzymes::new(&text) {
                Ok(custom) if !custom.restriction_enzymes.is_empty() => {
                    log::debug!(
                        "Using {} restriction enzymes from {RUNTIME_REBASE_PATH}",
                        custom.restriction_enzymes.len()
                    );
                    base = custom;
                }
                Ok(_) => {}
                Err(e) => log::warn!("Ignoring {RUNTIME_REBASE_PATH}: {e}"),
            }
        }
        base
    }
}

impl EnzymeLookup for Enzymes {
    fn lookup(&self, name: &str) -> Option<&RestrictionEnzyme> {
        self.restriction_enzymes.lookup(name)
    }
}

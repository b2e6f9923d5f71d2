use std::path::PathBuf;

use crate::error::{Result, ScaffoldError};
use crate::options::ComponentSet;

/// Suffixes given to plugins in a multi-plugin marketplace, in creation order.
pub const PLUGIN_SUFFIXES: [&str; 5] = ["core", "hooks", "extras", "utils", "styles"];

pub const MAX_PLUGIN_COUNT: i64 = 10;

/// Directory holding the only plugin of a single-plugin marketplace.
pub const SINGLE_PLUGIN_DIR: &str = "plugin";

/// Parent directory of every plugin in a multi-plugin marketplace.
pub const PLUGINS_DIR: &str = "plugins";

/// Parse a plugin count as typed by the user. Anything that is not an
/// integer is reported as an invalid count.
pub fn parse_plugin_count(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ScaffoldError::InvalidPluginCount {
            value: raw.to_string(),
        })
}

/// Check that `count` lies in `1..=10`.
pub fn validate_plugin_count(count: i64) -> Result<usize> {
    let invalid = || ScaffoldError::InvalidPluginCount {
        value: count.to_string(),
    };
    if !(1..=MAX_PLUGIN_COUNT).contains(&count) {
        return Err(invalid());
    }
    usize::try_from(count).map_err(|_| invalid())
}

/// Compute the ordered plugin identifiers for a marketplace.
///
/// A single plugin reuses `base` verbatim. Otherwise each plugin gets the next
/// suffix from [`PLUGIN_SUFFIXES`]; positions past the list fall back to
/// `plugin-{n}` (1-based), so `acme` with 7 plugins ends in `acme-plugin-7`.
pub fn derive_plugin_names(base: &str, count: i64) -> Result<Vec<String>> {
    let count = validate_plugin_count(count)?;

    if count == 1 {
        return Ok(vec![base.to_string()]);
    }

    Ok((0..count)
        .map(|i| match PLUGIN_SUFFIXES.get(i) {
            Some(suffix) => format!("{base}-{suffix}"),
            None => format!("{base}-plugin-{}", i + 1),
        })
        .collect())
}

/// Output shape of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// One plugin under `plugin/`.
    Single,
    /// Several plugins under `plugins/<identifier>/`.
    Multi,
}

impl Topology {
    pub fn for_count(count: usize) -> Self {
        if count > 1 {
            Topology::Multi
        } else {
            Topology::Single
        }
    }
}

/// One generated plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginUnit {
    pub name: String,
    /// Directory relative to the marketplace root.
    pub dir: PathBuf,
    pub components: ComponentSet,
}

impl PluginUnit {
    /// Relative `source` entry for the marketplace manifest, e.g. `./plugins/acme-core`.
    pub fn source(&self) -> String {
        let parts: Vec<_> = self
            .dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        format!("./{}", parts.join("/"))
    }
}

/// Lay out every plugin of a run: identifiers paired with their directories.
pub fn plugin_units(names: &[String], components: ComponentSet) -> Vec<PluginUnit> {
    let topology = Topology::for_count(names.len());
    names
        .iter()
        .map(|name| {
            let dir = match topology {
                Topology::Single => PathBuf::from(SINGLE_PLUGIN_DIR),
                Topology::Multi => PathBuf::from(PLUGINS_DIR).join(name),
            };
            PluginUnit {
                name: name.clone(),
                dir,
                components,
            }
        })
        .collect()
}

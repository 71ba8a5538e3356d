use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What went into an artifact, recorded next to it.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<PathBuf>,
    /// Outputs written alongside the primary artifact (e.g. the zone table).
    pub extra_outputs: Vec<PathBuf>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
            extra_outputs: Vec::new(),
        }
    }

    pub fn with_inputs<I, P>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.inputs.extend(inputs.into_iter().map(Into::into));
        self
    }
}

/// Write `<artifact>.provenance.json` with the git commit, engine version,
/// callsite, params, inputs and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let outputs: Vec<String> = std::iter::once(artifact)
        .chain(payload.extra_outputs.iter().map(PathBuf::as_path))
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let inputs: Vec<String> = payload
        .inputs
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let doc = json!({
        "code_rev": current_git_rev(),
        "engine_version": plotzone::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "inputs": inputs,
        "outputs": outputs
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// Provenance block without artifacts, for `plotzone report`.
pub fn summary() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "engine_version": plotzone::VERSION,
        "params": {},
        "inputs": [],
        "outputs": []
    })
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    let baked = option_env!("GIT_COMMIT").filter(|s| !s.is_empty());
    if let Some(rev) = baked {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let base = Path::new("/tmp/plots/site-a.json");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/plots/site-a.provenance.json")
        );
    }

    #[test]
    fn sidecar_lists_inputs_and_outputs() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("report.json");
        let table = dir.path().join("zones.csv");
        fs::write(&report, "{}").unwrap();
        let mut payload =
            Payload::new(json!({"north_tilt": 12.5})).with_inputs([dir.path().join("job.json")]);
        payload.extra_outputs.push(table.clone());

        let prov_path = write_sidecar(&report, payload).unwrap();
        assert_eq!(prov_path, dir.path().join("report.provenance.json"));
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], report.to_string_lossy().as_ref());
        assert_eq!(parsed["outputs"][1], table.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["north_tilt"], 12.5);
        assert_eq!(parsed["inputs"].as_array().map(Vec::len), Some(1));
        assert_eq!(parsed["engine_version"], plotzone::VERSION);
        assert!(parsed["callsite"]["file"]
            .as_str()
            .is_some_and(|f| f.ends_with("provenance.rs")));
    }

    #[test]
    fn summary_has_no_outputs() {
        let s = summary();
        assert_eq!(s["outputs"], json!([]));
        assert!(s["code_rev"].is_string());
    }
}

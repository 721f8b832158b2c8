pub mod files;

use crate::error::{Result, TallyError};
use crate::types::penalty::PenaltyApplication;
use crate::types::rubric::Rubric;
use crate::types::vote::{Entrant, Judge, Vote};
use chrono::NaiveDate;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::Path;

pub const FESTIVAL_FILE: &str = "festival.json";
pub const RUBRIC_FILE: &str = "rubric.json";
pub const VOTES_DIR: &str = "votes";
pub const PENALTIES_DIR: &str = "penalties";

/// The festival document: event metadata plus the entrant and judge rosters.
#[derive(Debug, Clone, Deserialize)]
pub struct FestivalMeta {
    #[serde(default)]
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "fecha", default)]
    pub date: Option<NaiveDate>,
    #[serde(alias = "estatus", default)]
    pub status: String,
    #[serde(alias = "colegios", default)]
    pub entrants: Vec<Entrant>,
    #[serde(alias = "juecesAsignadosData", default)]
    pub judges: Vec<Judge>,
}

/// Read-only input snapshot for one aggregation run. The digest ties a
/// printed report back to the exact bytes it was computed from.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub festival: FestivalMeta,
    pub rubric: Rubric,
    pub votes: Vec<Vote>,
    pub penalties: Vec<PenaltyApplication>,
    pub digest: String,
}

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    festival: FestivalMeta,
    #[serde(alias = "plantilla")]
    rubric: Rubric,
    #[serde(alias = "evaluaciones", default)]
    votes: Vec<Vote>,
    #[serde(alias = "penalizacionesAplicadas", default)]
    penalties: Vec<PenaltyApplication>,
}

/// Loads a snapshot from a single JSON file or a snapshot directory and
/// applies the legacy aggregation-mode migration.
pub fn load(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        return Err(TallyError::PathNotFound(path.display().to_string()));
    }

    let mut snapshot = if path.is_dir() {
        load_dir(path)?
    } else {
        load_file(path)?
    };
    snapshot.rubric.migrate_legacy_aggregation();
    tracing::debug!(
        festival = %snapshot.festival.id,
        name = %snapshot.festival.name,
        entrants = snapshot.festival.entrants.len(),
        votes = snapshot.votes.len(),
        penalties = snapshot.penalties.len(),
        digest = %snapshot.digest,
        "snapshot loaded"
    );
    Ok(snapshot)
}

fn load_file(path: &Path) -> Result<Snapshot> {
    let bytes = std::fs::read(path)?;
    let digest = format!("{:x}", Sha256::digest(&bytes));
    let parsed: SnapshotFile = serde_json::from_slice(&bytes)
        .map_err(|e| TallyError::SnapshotParse(format!("{}: {}", path.display(), e)))?;

    Ok(Snapshot {
        festival: parsed.festival,
        rubric: parsed.rubric,
        votes: parsed.votes,
        penalties: parsed.penalties,
        digest,
    })
}

fn load_dir(root: &Path) -> Result<Snapshot> {
    let festival_path = root.join(FESTIVAL_FILE);
    if !festival_path.exists() {
        return Err(TallyError::SnapshotParse(format!(
            "{}: missing {}",
            root.display(),
            FESTIVAL_FILE
        )));
    }
    let rubric_path = root.join(RUBRIC_FILE);
    if !rubric_path.exists() {
        return Err(TallyError::RubricMissing(root.display().to_string()));
    }

    let mut hasher = Sha256::new();
    let festival: FestivalMeta = read_json(&festival_path, &mut hasher)?;
    let rubric: Rubric = read_json(&rubric_path, &mut hasher)?;

    let mut votes = Vec::new();
    for path in files::json_files(&root.join(VOTES_DIR)) {
        votes.push(read_json(&path, &mut hasher)?);
    }
    let mut penalties = Vec::new();
    for path in files::json_files(&root.join(PENALTIES_DIR)) {
        penalties.push(read_json(&path, &mut hasher)?);
    }

    Ok(Snapshot {
        festival,
        rubric,
        votes,
        penalties,
        digest: format!("{:x}", hasher.finalize()),
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, hasher: &mut Sha256) -> Result<T> {
    let bytes = std::fs::read(path)?;
    hasher.update(&bytes);
    serde_json::from_slice(&bytes)
        .map_err(|e| TallyError::SnapshotParse(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rubric::AggregationMode;
    use std::fs;
    use tempfile::TempDir;

    fn write_minimal_dir(root: &Path) {
        fs::write(
            root.join(FESTIVAL_FILE),
            r#"{
                "id": "fest-1",
                "nombre": "Festival de Danza",
                "fecha": "2026-05-12",
                "estatus": "en-revision",
                "colegios": [{"id": "e1", "nombre": "Colegio Norte"}],
                "juecesAsignadosData": [{"juezId": "j1", "nombre": "Ana"}]
            }"#,
        )
        .expect("festival should write");
        fs::write(
            root.join(RUBRIC_FILE),
            r#"{"categorias": [{"id": "cat-1", "nombre": "Música", "peso": 100}]}"#,
        )
        .expect("rubric should write");
    }

    #[test]
    fn load_missing_path_fails_with_path_not_found() {
        let err = load(Path::new("/nonexistent/snapshot")).expect_err("load should fail");
        assert!(matches!(err, TallyError::PathNotFound(_)));
    }

    #[test]
    fn load_dir_without_rubric_fails_fast() {
        let dir = TempDir::new().expect("temp dir should be created");
        write_minimal_dir(dir.path());
        fs::remove_file(dir.path().join(RUBRIC_FILE)).expect("rubric should be removable");

        let err = load(dir.path()).expect_err("load should fail");
        assert!(matches!(err, TallyError::RubricMissing(_)));
    }

    #[test]
    fn load_dir_collects_votes_and_penalties() {
        let dir = TempDir::new().expect("temp dir should be created");
        write_minimal_dir(dir.path());
        fs::create_dir_all(dir.path().join(VOTES_DIR)).expect("votes dir should create");
        fs::write(
            dir.path().join(VOTES_DIR).join("j1-e1.json"),
            r#"{"schoolId": "e1", "juezId": "j1", "puntuaciones": {"c1": 8}}"#,
        )
        .expect("vote should write");
        fs::create_dir_all(dir.path().join(PENALTIES_DIR)).expect("penalties dir should create");
        fs::write(
            dir.path().join(PENALTIES_DIR).join("p1.json"),
            r#"{"colegioId": "e1", "deducciones": [{"categoriaId": "cat-1", "puntos": -5}]}"#,
        )
        .expect("penalty should write");

        let snapshot = load(dir.path()).expect("load should succeed");
        assert_eq!(snapshot.festival.name, "Festival de Danza");
        assert_eq!(snapshot.votes.len(), 1);
        assert_eq!(snapshot.penalties.len(), 1);
        assert_eq!(snapshot.digest.len(), 64);
        // The migration ran: the legacy category resolved to straight sum.
        assert_eq!(
            snapshot.rubric.categories[0].aggregation_mode(),
            AggregationMode::Sum
        );
    }

    #[test]
    fn load_single_file_snapshot() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("snapshot.json");
        fs::write(
            &path,
            r#"{
                "festival": {"nombre": "Festival", "colegios": [], "juecesAsignadosData": []},
                "plantilla": {"categorias": []},
                "evaluaciones": [],
                "penalizacionesAplicadas": []
            }"#,
        )
        .expect("snapshot should write");

        let snapshot = load(&path).expect("load should succeed");
        assert_eq!(snapshot.festival.name, "Festival");
        assert!(snapshot.votes.is_empty());
    }

    #[test]
    fn load_malformed_json_reports_the_offending_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        write_minimal_dir(dir.path());
        fs::create_dir_all(dir.path().join(VOTES_DIR)).expect("votes dir should create");
        fs::write(dir.path().join(VOTES_DIR).join("bad.json"), "not json")
            .expect("vote should write");

        let err = load(dir.path()).expect_err("load should fail");
        match err {
            TallyError::SnapshotParse(message) => assert!(message.contains("bad.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn digest_changes_when_any_input_changes() {
        let dir = TempDir::new().expect("temp dir should be created");
        write_minimal_dir(dir.path());
        let before = load(dir.path()).expect("load should succeed").digest;

        fs::write(
            dir.path().join(RUBRIC_FILE),
            r#"{"categorias": [{"id": "cat-1", "nombre": "Música", "peso": 90}]}"#,
        )
        .expect("rubric should rewrite");
        let after = load(dir.path()).expect("load should succeed").digest;
        assert_ne!(before, after);
    }
}

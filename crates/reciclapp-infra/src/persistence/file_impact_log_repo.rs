//! File-based impact log repository implementation
//!
//! One JSON object per line, appended in registration order.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use reciclapp_domain::repository::ImpactLogRepository;
use reciclapp_types::{Error, ImpactRecord, Result};

/// Append-only JSON-lines history file
pub struct FileImpactLogRepository {
    log_path: PathBuf,
}

impl FileImpactLogRepository {
    /// Open a log at the given path; nothing is created until the first append
    pub fn open(log_path: PathBuf) -> Result<Self> {
        Ok(Self { log_path })
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }
}

impl ImpactLogRepository for FileImpactLogRepository {
    fn append(&self, record: &ImpactRecord) -> std::result::Result<(), Error> {
        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        info!(path = %self.log_path.display(), material = %record.material, "record appended");
        Ok(())
    }

    fn find_all(&self) -> std::result::Result<Vec<ImpactRecord>, Error> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.log_path)?);
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ImpactRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(
                    path = %self.log_path.display(),
                    line = index + 1,
                    error = %e,
                    "skipping malformed history line"
                ),
            }
        }
        Ok(records)
    }

    fn clear(&self) -> std::result::Result<bool, Error> {
        if !self.log_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.log_path)?;
        info!(path = %self.log_path.display(), "history cleared");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reciclapp_types::{ImpactValues, SizeTier, SizingInput};
    use tempfile::tempdir;

    fn record(material: &str, water: f64) -> ImpactRecord {
        ImpactRecord {
            id: Some(uuid::Uuid::new_v4()),
            material: material.to_string(),
            description: Some(format!("{} usado", material)),
            size_tier: SizeTier::Large,
            multiplier: 1.5,
            impact: ImpactValues::new(water, 0.75, 0.3),
            recyclable: true,
            measurement: Some(SizingInput::capacity(2.5)),
            recorded_at: Some(chrono::Utc::now()),
        }
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let dir = tempdir().unwrap();
        let repo = FileImpactLogRepository::open(dir.path().join("historial.txt")).unwrap();
        assert!(repo.find_all().unwrap().is_empty());
        assert!(!repo.exists());
    }

    #[test]
    fn test_append_and_read_back_in_order() {
        let dir = tempdir().unwrap();
        let repo = FileImpactLogRepository::open(dir.path().join("historial.txt")).unwrap();
        let written: Vec<_> = ["lata", "cartón", "vidrio", "lata"]
            .iter()
            .enumerate()
            .map(|(i, m)| record(m, i as f64 + 1.0))
            .collect();
        for r in &written {
            repo.append(r).unwrap();
        }

        let read = repo.find_all().unwrap();
        assert_eq!(read, written);
    }

    #[test]
    fn test_one_line_per_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("historial.txt");
        let repo = FileImpactLogRepository::open(path.clone()).unwrap();
        repo.append(&record("lata", 5.0)).unwrap();
        repo.append(&record("papel", 4.0)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.lines().all(|l| l.starts_with('{') && l.contains("\"impacto\"")));
    }

    #[test]
    fn test_parent_directory_created_on_first_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("historial.txt");
        let repo = FileImpactLogRepository::open(path.clone()).unwrap();
        assert!(repo.find_all().unwrap().is_empty());
        assert!(!repo.clear().unwrap());
        assert!(!dir.path().join("nested").exists());

        repo.append(&record("lata", 5.0)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_reads_legacy_lines_and_skips_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("historial_reciclaje.txt");
        std::fs::write(
            &path,
            concat!(
                r#"{"tipo": "botella de plástico", "tamaño": "grande", "factor_tamaño": 1.5, "impacto": {"agua": 4.5, "energia": 0.75, "co2": 0.3}}"#,
                "\n",
                "not json\n",
                "\n",
                r#"{"tipo": "cartón", "descripcion": "caja", "tamaño": "pequeño", "factor_tamaño": 0.8, "impacto": {"agua": 1.6, "energia": 0.24, "co2": 0.08}}"#,
                "\n",
            ),
        )
        .unwrap();

        let repo = FileImpactLogRepository::open(path).unwrap();
        let records = repo.find_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].material, "botella de plástico");
        assert_eq!(records[1].description.as_deref(), Some("caja"));
        assert_eq!(records[1].size_tier, SizeTier::Small);
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let repo = FileImpactLogRepository::open(dir.path().join("historial.txt")).unwrap();
        assert!(!repo.clear().unwrap());

        repo.append(&record("lata", 5.0)).unwrap();
        assert!(repo.clear().unwrap());
        assert!(repo.find_all().unwrap().is_empty());

        repo.append(&record("papel", 4.0)).unwrap();
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }
}

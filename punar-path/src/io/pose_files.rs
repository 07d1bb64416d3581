//! Pose directories: one JSON transform per file.
//!
//! A run is a directory of files named `NNNNNN_map_to_base_link.txt`, each
//! holding one `geometry_msgs/TransformStamped` as a JSON dictionary:
//!
//! ```json
//! {
//!   "header": {"seq": 12, "stamp": {"secs": 1571301234, "nsecs": 500000000}, "frame_id": "map"},
//!   "child_frame_id": "base_link",
//!   "transform": {
//!     "translation": {"x": 1.0, "y": 2.0, "z": 0.0},
//!     "rotation": {"x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0}
//!   }
//! }
//! ```
//!
//! Files are ordered by the integer before the first `_`, not by name, so
//! unpadded numbering still sorts correctly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::source::{PoseSnapshot, PoseSource, RawPose};

/// File name suffix of a pose record.
pub const POSE_FILE_SUFFIX: &str = "_map_to_base_link.txt";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Stamp {
    #[serde(default)]
    secs: i64,
    #[serde(default)]
    nsecs: i64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Header {
    #[serde(default)]
    seq: u64,
    #[serde(default)]
    stamp: Option<Stamp>,
    #[serde(default)]
    frame_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Vector3Msg {
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct QuaternionMsg {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TransformMsg {
    translation: Vector3Msg,
    rotation: QuaternionMsg,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TransformStampedMsg {
    #[serde(default)]
    header: Header,
    #[serde(default)]
    child_frame_id: String,
    transform: TransformMsg,
}

impl TransformStampedMsg {
    fn into_raw(self) -> (Option<f64>, RawPose) {
        let stamp = self
            .header
            .stamp
            .map(|s| s.secs as f64 + s.nsecs as f64 * 1e-9);
        let t = self.transform.translation;
        let r = self.transform.rotation;
        (stamp, RawPose::new([t.x, t.y, t.z], [r.x, r.y, r.z, r.w]))
    }

    fn from_snapshot(snapshot: &PoseSnapshot) -> Self {
        let stamp = snapshot.stamp.map(|secs| {
            let whole = secs.floor();
            Stamp {
                secs: whole as i64,
                nsecs: ((secs - whole) * 1e9).round() as i64,
            }
        });
        let t = snapshot.pose.translation;
        let q = snapshot.pose.rotation;
        Self {
            header: Header {
                seq: snapshot.index,
                stamp,
                frame_id: "map".to_string(),
            },
            child_frame_id: "base_link".to_string(),
            transform: TransformMsg {
                translation: Vector3Msg {
                    x: t.x,
                    y: t.y,
                    z: t.z,
                },
                rotation: QuaternionMsg {
                    x: q.i,
                    y: q.j,
                    z: q.k,
                    w: q.w,
                },
            },
        }
    }
}

/// Parse one pose record.
pub fn parse_pose_record(json: &str, index: u64) -> Result<PoseSnapshot> {
    let msg: TransformStampedMsg = serde_json::from_str(json)?;
    let (stamp, pose) = msg.into_raw();
    Ok(PoseSnapshot { index, stamp, pose })
}

/// Sequence number of a pose file, `None` if `path` is not a pose file.
fn sequence_number(path: &Path) -> Option<Result<u64>> {
    let name = path.file_name()?.to_str()?;
    if !name.ends_with(POSE_FILE_SUFFIX) {
        return None;
    }
    let prefix = name.split('_').next().unwrap_or_default();
    Some(
        prefix
            .parse::<u64>()
            .map_err(|_| Error::InvalidFileName(path.to_path_buf())),
    )
}

/// Pose files of a run directory, sorted by sequence number.
pub fn list_pose_files(dir: &Path) -> Result<Vec<(u64, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if let Some(number) = sequence_number(&path) {
            files.push((number?, path));
        }
    }
    files.sort_by_key(|(number, _)| *number);
    Ok(files)
}

/// Reads runs stored as pose directories.
///
/// Run names passed to [`PoseSource::load_run`] are directory paths, taken
/// relative to `root` when one is set.
#[derive(Clone, Debug, Default)]
pub struct PoseDirectory {
    root: Option<PathBuf>,
}

impl PoseDirectory {
    /// Resolve run names as paths as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve run names relative to `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, run: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(run),
            None => PathBuf::from(run),
        }
    }
}

impl PoseSource for PoseDirectory {
    fn load_run(&self, run: &str) -> Result<Vec<PoseSnapshot>> {
        let dir = self.resolve(run);
        let files = list_pose_files(&dir)?;
        if files.is_empty() {
            return Err(Error::EmptyRun(dir.display().to_string()));
        }

        log::debug!("Reading {} pose files from {}", files.len(), dir.display());

        files
            .iter()
            .map(|(number, path)| {
                let contents = fs::read_to_string(path)?;
                parse_pose_record(&contents, *number)
            })
            .collect()
    }
}

/// Writes snapshots into a pose directory, one file per call.
#[derive(Debug)]
pub struct PoseRecorder {
    dir: PathBuf,
    next: u64,
}

impl PoseRecorder {
    /// Create the directory if needed and start numbering at 0.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, next: 0 })
    }

    /// Directory being written.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of poses written so far.
    pub fn count(&self) -> u64 {
        self.next
    }

    /// Write `pose` as the next record and return its path.
    pub fn record(&mut self, pose: &RawPose, stamp: Option<f64>) -> Result<PathBuf> {
        let snapshot = PoseSnapshot {
            index: self.next,
            stamp,
            pose: *pose,
        };
        let path = self
            .dir
            .join(format!("{:06}{}", self.next, POSE_FILE_SUFFIX));
        let json = serde_json::to_string(&TransformStampedMsg::from_snapshot(&snapshot))?;
        fs::write(&path, json)?;
        self.next += 1;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    const RECORD: &str = r#"{"header": {"stamp": {"secs": 10, "nsecs": 250000000}, "frame_id": "map", "seq": 4},
        "child_frame_id": "base_link",
        "transform": {"translation": {"x": 1.5, "y": -0.5, "z": 0.0},
                      "rotation": {"x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0}}}"#;

    #[test]
    fn test_parse_record() {
        let snapshot = parse_pose_record(RECORD, 7).unwrap();
        assert_eq!(snapshot.index, 7);
        assert_relative_eq!(snapshot.stamp.unwrap(), 10.25);
        assert_relative_eq!(snapshot.pose.translation.x, 1.5);
        assert_relative_eq!(snapshot.pose.rotation.w, 1.0);
    }

    #[test]
    fn test_parse_without_header() {
        let json = r#"{"transform": {"translation": {"x": 0, "y": 0, "z": 0},
                       "rotation": {"x": 0, "y": 0, "z": 0, "w": 1}}}"#;
        let snapshot = parse_pose_record(json, 0).unwrap();
        assert_eq!(snapshot.stamp, None);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_pose_record("{\"transform\": 3}", 0),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_files_sorted_numerically() {
        let dir = TempDir::new().unwrap();
        for n in [10, 2, 1] {
            fs::write(dir.path().join(format!("{}{}", n, POSE_FILE_SUFFIX)), RECORD).unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = list_pose_files(dir.path()).unwrap();
        let numbers: Vec<u64> = files.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, vec![1, 2, 10]);
    }

    #[test]
    fn test_bad_file_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(format!("abc{}", POSE_FILE_SUFFIX)), RECORD).unwrap();
        assert!(matches!(
            list_pose_files(dir.path()),
            Err(Error::InvalidFileName(_))
        ));
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let source = PoseDirectory::new();
        let err = source.load_run(dir.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, Error::EmptyRun(_)));
    }

    #[test]
    fn test_recorder_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut recorder = PoseRecorder::create(dir.path().join("teach")).unwrap();

        let first = recorder
            .record(&RawPose::from_planar(0.0, 0.0, 0.0), Some(1.5))
            .unwrap();
        recorder
            .record(&RawPose::from_planar(1.0, 0.2, 0.3), None)
            .unwrap();

        assert_eq!(recorder.count(), 2);
        assert!(first.ends_with("000000_map_to_base_link.txt"));

        let source = PoseDirectory::with_root(dir.path());
        let snapshots = source.load_run("teach").unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_relative_eq!(snapshots[0].stamp.unwrap(), 1.5, epsilon = 1e-9);

        let traj = source.load_trajectory("teach").unwrap();
        let pose = traj.get(1).unwrap();
        assert_relative_eq!(pose.x, 1.0);
        assert_relative_eq!(pose.y, 0.2);
        assert_relative_eq!(pose.theta, 0.3, epsilon = 1e-12);
    }
}

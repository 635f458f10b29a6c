//! The `Destination` / `Skater` / `Scores` line format.
//!
//! ```text
//! Destination: Paris, 01/06/2025
//! Skater: Smith, regular, USA, male
//! Scores: Smith, Paris, [10.0, 20.0]
//! ```
//!
//! Decoding is partial-failure tolerant: a bad line is reported and skipped,
//! never aborting the load. `Scores` lines resolve names against records
//! decoded earlier in the same input.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::{
    athlete::Athlete,
    contest::Contest,
    core::{error::TourError, tour::Tour},
    types::{DEFAULT_CAPACITY, Gender, Stance},
};

use super::{PersistResult, TourStore};

/// Version of the line grammar produced by [`encode`].
pub const TEXT_FORMAT_VERSION: u16 = 1;

/// Leading tag of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// Contest line.
    Destination,
    /// Athlete line.
    Skater,
    /// Score association line.
    Scores,
}

impl RecordType {
    /// Tag text as written before the colon.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Destination => "Destination",
            Self::Skater => "Skater",
            Self::Scores => "Scores",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Destination" => Some(Self::Destination),
            "Skater" => Some(Self::Skater),
            "Scores" => Some(Self::Scores),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One parsed line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A contest stop.
    Destination(Contest),
    /// An athlete without scores.
    Skater(Athlete),
    /// Scores one athlete earned at one contest.
    Scores {
        /// Athlete name.
        athlete: String,
        /// Contest location.
        location: String,
        /// Score sequence in entry order.
        scores: Vec<f64>,
    },
}

/// Why a line was skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// No `<RecordType>:` prefix.
    MissingTag,
    /// The tag is not one of the known record types.
    UnknownRecordType(String),
    /// Field count or field contents do not match the record's grammar.
    Malformed {
        /// Record type the line claimed to be.
        record: RecordType,
        /// What was wrong with it.
        reason: String,
    },
    /// A `Scores` line names an athlete or contest not decoded so far.
    UnresolvedReference(TourError),
    /// A well-formed record the registry refused (full or duplicate).
    Rejected(TourError),
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTag => f.write_str("missing record type"),
            Self::UnknownRecordType(tag) => write!(f, "unknown record type `{tag}`"),
            Self::Malformed { record, reason } => write!(f, "malformed {record} record: {reason}"),
            Self::UnresolvedReference(err) => write!(f, "unresolved reference: {err}"),
            Self::Rejected(err) => write!(f, "rejected: {err}"),
        }
    }
}

/// A skipped line and the reason it was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeIssue {
    /// 1-based line number.
    pub line_no: usize,
    /// Raw line text.
    pub line: String,
    /// Reason.
    pub kind: IssueKind,
}

/// Result of a load: the tour plus every line that had to be skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    /// Decoded state.
    pub tour: Tour,
    /// Skipped lines in input order.
    pub issues: Vec<DecodeIssue>,
}

impl Loaded {
    fn empty(capacity: usize) -> Self {
        Self {
            tour: Tour::with_capacity(capacity),
            issues: Vec::new(),
        }
    }
}

impl Record {
    /// Parses one non-blank line.
    pub fn parse(line: &str) -> Result<Self, IssueKind> {
        let (tag, data) = line.split_once(':').ok_or(IssueKind::MissingTag)?;
        let tag = tag.trim();
        let record = RecordType::from_tag(tag)
            .ok_or_else(|| IssueKind::UnknownRecordType(tag.to_string()))?;
        let data = data.trim();

        match record {
            RecordType::Destination => {
                let [location, date] = split_fields::<2>(record, data)?;
                Ok(Self::Destination(Contest::new(location, date)))
            }
            RecordType::Skater => {
                let [name, stance, nationality, gender] = split_fields::<4>(record, data)?;
                let stance: Stance = stance.parse().map_err(|e| malformed(record, e))?;
                let gender: Gender = gender.parse().map_err(|e| malformed(record, e))?;
                Ok(Self::Skater(Athlete::new(name, stance, nationality, gender)))
            }
            RecordType::Scores => {
                let mut parts = data.splitn(3, ',').map(str::trim);
                let (Some(athlete), Some(location), Some(list)) =
                    (parts.next(), parts.next(), parts.next())
                else {
                    return Err(malformed(record, "expected 3 fields"));
                };
                Ok(Self::Scores {
                    athlete: athlete.to_string(),
                    location: location.to_string(),
                    scores: parse_score_list(list)?,
                })
            }
        }
    }

    /// Record type of this line.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Destination(_) => RecordType::Destination,
            Self::Skater(_) => RecordType::Skater,
            Self::Scores { .. } => RecordType::Scores,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.record_type())?;
        match self {
            Self::Destination(c) => write!(f, "{}, {}", c.location, c.date),
            Self::Skater(a) => write!(
                f,
                "{}, {}, {}, {}",
                a.name, a.stance, a.nationality, a.gender
            ),
            Self::Scores {
                athlete,
                location,
                scores,
            } => {
                write!(f, "{athlete}, {location}, ")?;
                write_score_list(f, scores)
            }
        }
    }
}

fn malformed(record: RecordType, reason: impl ToString) -> IssueKind {
    IssueKind::Malformed {
        record,
        reason: reason.to_string(),
    }
}

fn split_fields<const N: usize>(record: RecordType, data: &str) -> Result<[&str; N], IssueKind> {
    let fields: Vec<&str> = data.split(',').map(str::trim).collect();
    <[&str; N]>::try_from(fields.as_slice()).map_err(|_| {
        malformed(
            record,
            format!("expected {N} fields, found {}", fields.len()),
        )
    })
}

fn parse_score_list(list: &str) -> Result<Vec<f64>, IssueKind> {
    let inner = list
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| malformed(RecordType::Scores, "score list must be bracketed"))?
        .trim();
    if inner.is_empty() {
        return Err(malformed(RecordType::Scores, "score list is empty"));
    }

    inner
        .split(',')
        .map(str::trim)
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| malformed(RecordType::Scores, format!("invalid score `{s}`")))
        })
        .collect()
}

// `{:?}` keeps a fractional digit on whole numbers: 8.0, not 8.
fn write_score_list(f: &mut fmt::Formatter<'_>, scores: &[f64]) -> fmt::Result {
    f.write_str("[")?;
    for (i, s) in scores.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{s:?}")?;
    }
    f.write_str("]")
}

/// Decodes `input` into a tour whose registries hold at most `capacity` entries.
pub fn decode(input: &str, capacity: usize) -> Loaded {
    let mut loaded = Loaded::empty(capacity);

    for (idx, raw) in input.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        if let Err(kind) = apply_line(&mut loaded.tour, raw) {
            let issue = DecodeIssue {
                line_no: idx + 1,
                line: raw.to_string(),
                kind,
            };
            tracing::warn!(line_no = issue.line_no, line = %issue.line, "skipping line: {}", issue.kind);
            loaded.issues.push(issue);
        }
    }

    loaded
}

fn apply_line(tour: &mut Tour, line: &str) -> Result<(), IssueKind> {
    match Record::parse(line)? {
        Record::Destination(contest) => tour
            .add_contest(contest)
            .map(|_| ())
            .map_err(IssueKind::Rejected),
        Record::Skater(athlete) => tour
            .add_athlete(athlete)
            .map(|_| ())
            .map_err(IssueKind::Rejected),
        Record::Scores {
            athlete,
            location,
            scores,
        } => tour
            .set_scores(&athlete, &location, scores)
            .map_err(IssueKind::UnresolvedReference),
    }
}

/// Encodes `tour`: every contest, then every athlete, then one `Scores` line
/// per non-empty sequence, contest-major and athlete-minor.
pub fn encode(tour: &Tour) -> String {
    let mut out = String::new();
    let mut push = |record: Record| {
        out.push_str(&record.to_string());
        out.push('\n');
    };

    for contest in tour.contests() {
        push(Record::Destination(contest.clone()));
    }
    for athlete in tour.athletes() {
        push(Record::Skater(athlete.clone()));
    }
    for contest in tour.contests() {
        for athlete in tour.athletes() {
            let scores = athlete.scores.get_scores(contest);
            if scores.is_empty() {
                continue;
            }
            push(Record::Scores {
                athlete: athlete.name.clone(),
                location: contest.location.clone(),
                scores: scores.to_vec(),
            });
        }
    }

    out
}

/// Text file backing store.
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
    capacity: usize,
}

impl TextFileStore {
    /// Store at `path` with default registry capacity.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Sets the registry capacity used for decoded tours.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TourStore for TextFileStore {
    /// Creates the file empty when it does not exist yet.
    fn load(&self) -> PersistResult<Loaded> {
        if !self.path.exists() {
            std::fs::File::create(&self.path)?;
            tracing::info!(path = %self.path.display(), "created empty data file");
            return Ok(Loaded::empty(self.capacity));
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let loaded = decode(&contents, self.capacity);
        tracing::info!(
            path = %self.path.display(),
            contests = loaded.tour.contests().count(),
            athletes = loaded.tour.athletes().count(),
            skipped = loaded.issues.len(),
            "loaded tour"
        );
        Ok(loaded)
    }

    fn save(&mut self, tour: &Tour) -> PersistResult<()> {
        std::fs::write(&self.path, encode(tour))?;
        tracing::info!(path = %self.path.display(), "saved tour");
        Ok(())
    }

    fn empty_tour(&self) -> Tour {
        Tour::with_capacity(self.capacity)
    }
}

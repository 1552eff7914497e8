/// Errors that affect the overall batch exit code, as distinct from
/// per-journal decode failures, which never do (see [`crate::driver`]).
///
/// ```text
/// ┌──────────────────┬─────────────────────────────────────────────┐
/// │ Variant           │ Cause                                       │
/// ├──────────────────┼─────────────────────────────────────────────┤
/// │ OpenSource        │ A journal's byte source could not be opened │
/// │ CreateSink        │ An output JSONL file could not be created   │
/// │ Io                │ Any other I/O failure setting up a run      │
/// └──────────────────┴─────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("could not open journal source {name:?}: {source}")]
    OpenSource {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not create output sink at {path:?}: {source}")]
    CreateSink {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

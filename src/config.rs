use std::path::PathBuf;


pub const DEFAULT_ADJACENCY_PATH: &str = "adjacencies.txt";
pub const DEFAULT_COORDINATES_PATH: &str = "coordinates.txt";


/// Locations of the input files
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataConfig {
    pub adjacency: PathBuf,
    pub coordinates: PathBuf,
}

impl DataConfig {

    pub fn new(adjacency: impl Into<PathBuf>, coordinates: impl Into<PathBuf>) -> Self {
        Self {
            adjacency: adjacency.into(),
            coordinates: coordinates.into(),
        }
    }

    /// Both files resolved against a data directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self::new(dir.join(DEFAULT_ADJACENCY_PATH), dir.join(DEFAULT_COORDINATES_PATH))
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADJACENCY_PATH, DEFAULT_COORDINATES_PATH)
    }
}

use std::path::{Path, PathBuf};

use objective_surfaces::Surface;

/// Parameter file read when none is given.
pub const DEFAULT_INPUT: &str = "input.txt";

/// Directory, relative to the working directory, that receives the result.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// File name of the result inside the output directory.
pub const DEFAULT_OUTPUT_FILE: &str = "output.dat";

/// Configuration for a single evaluation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Parameter file providing the coordinates.
    pub input: PathBuf,

    /// Directory created, if needed, to hold the output file.
    pub output_dir: PathBuf,

    /// Name of the output file inside `output_dir`.
    pub output_file: PathBuf,

    /// Surface to evaluate.
    pub surface: Surface,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            surface: Surface::default(),
        }
    }
}

impl RunConfig {
    /// Returns a copy of this config reading from `input`.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Returns a copy of this config writing into `output_dir`.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Returns a copy of this config naming the output file `output_file`.
    #[must_use]
    pub fn with_output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = output_file.into();
        self
    }

    /// Returns a copy of this config evaluating `surface`.
    #[must_use]
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    /// Returns the full path of the output file.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Returns the parameter file path.
    #[must_use]
    pub fn input(&self) -> &Path {
        &self.input
    }
}

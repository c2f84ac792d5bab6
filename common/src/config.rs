use std::path::PathBuf;

pub struct Config {
    /// Directory holding the customer, hotel and reservation records.
    pub data_dir: PathBuf,
    /// Directory the analysis commands write their results files into.
    pub output_dir: PathBuf,
    /// Quiet level.
    ///
    /// `1` hides the banner and section headers, `2` also hides the progress bar.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            quiet: 0,
            no_banner: false,
        }
    }
}

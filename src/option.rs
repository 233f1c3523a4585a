/// Options for chunk generation.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOption {
    /// Chunks with at least this many pixels are filled in parallel.
    pub parallel_threshold: usize,
    /// If true, print the progress of the whole scan.
    pub print_progress: bool,
}

impl std::default::Default for GeneratorOption {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
            print_progress: false,
        }
    }
}

impl GeneratorOption {
    // GRCOV_EXCL_START
    pub(crate) fn pb(&self, n: usize) -> indicatif::ProgressBar {
        if !self.print_progress {
            return indicatif::ProgressBar::hidden();
        }
        let pb = indicatif::ProgressBar::new(n as _);
        if let Ok(style) = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed}] [{bar:40.cyan/blue}] {pos}/{len} pixels ({eta})")
        {
            pb.set_style(style.progress_chars("#-"));
        }
        pb
    }
    // GRCOV_EXCL_STOP
}

/// Configuration for content sniffing.
///
/// # Examples
///
/// ```rust
/// use filekind::SniffOptions;
///
/// // Create with defaults
/// let options = SniffOptions::default();
/// assert_eq!(options.prefix_len, 2048);
///
/// // Or customize
/// let options = SniffOptions::new()
///     .with_prefix_len(4096)
///     .with_container_inspection(false);
/// ```
#[derive(Debug, Clone)]
pub struct SniffOptions {
    /// How many leading bytes are read for signature matching
    pub prefix_len: usize,
    /// How far into the prefix a `%PDF-` header may start
    pub pdf_header_window: usize,
    /// Whether ZIP and PalmDB containers are opened to refine the result
    pub inspect_containers: bool,
}

impl Default for SniffOptions {
    fn default() -> Self {
        Self {
            prefix_len: 2048,
            pdf_header_window: super::pdf::PDF_HEADER_WINDOW,
            inspect_containers: true,
        }
    }
}

impl SniffOptions {
    /// Create a new `SniffOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of leading bytes read from a file.
    ///
    /// PostScript detection needs at least 64 bytes, so smaller values make
    /// PostScript unrecognisable.
    #[inline]
    pub fn with_prefix_len(mut self, len: usize) -> Self {
        self.prefix_len = len;
        self
    }

    /// Set how far into the file the PDF header may start.
    #[inline]
    pub fn with_pdf_header_window(mut self, window: usize) -> Self {
        self.pdf_header_window = window;
        self
    }

    /// Set whether container formats are inspected.
    ///
    /// When disabled, a ZIP stays ZIP (no EPUB / XPS upgrade) and unknown
    /// content is not tried as a Mobipocket file.
    #[inline]
    pub fn with_container_inspection(mut self, inspect: bool) -> Self {
        self.inspect_containers = inspect;
        self
    }
}

/// Progress update sent while rendering or validating a database.
///
/// Long-running operations take a `&dyn Fn(RomDbProgress)` callback so a
/// frontend can show a log line or progress bar without the core knowing
/// about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RomDbProgress {
    /// A game page document has been rendered
    PageRendered {
        title: String,
        /// 1-based position of this page
        current: usize,
        total: usize,
    },

    /// The index document has been rendered
    IndexRendered { pages: usize },

    /// All reference checks for one record are done
    RecordChecked { current: usize, total: usize },

    /// All field comparisons for one page are done
    PageChecked { title: String },

    /// Validation finished
    ValidationDone { findings: usize },
}

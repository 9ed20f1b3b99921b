/// How the frequency table is rendered once input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<key> <count>`
    #[default]
    Plain,
    /// `<key>\t<count>`
    Tsv,
    Json,
}

/// How a list call is composed. Both styles behave identically to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FetchStyle {
    /// Future combinators (`map_err`/`and_then`)
    Chained,
    /// `async`/`.await`
    AsyncAwait,
}

impl FetchStyle {
    pub fn label(&self) -> &'static str {
        match self {
            FetchStyle::Chained => "Chained futures",
            FetchStyle::AsyncAwait => "Async/Await",
        }
    }
}

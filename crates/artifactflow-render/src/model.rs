#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Fail,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub rule_id: String,
    pub code: String,
    pub message: String,
    /// `false` for advisories that did not gate the verdict.
    pub blocking: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub artifact_id: Option<String>,
    pub environment: Option<String>,
    pub profile: String,
    pub findings: Vec<RenderableFinding>,
    pub error: Option<String>,
}

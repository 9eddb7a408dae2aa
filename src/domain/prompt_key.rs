use std::fmt;

/// Keys of the instruction prompts used by the analysis endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKey {
    DentalFindingsJsonList,
    DentalFindingsDocList,
}

impl PromptKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKey::DentalFindingsJsonList => "dental_findings_json_list",
            PromptKey::DentalFindingsDocList => "dental_findings_doc_list",
        }
    }
}

impl fmt::Display for PromptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

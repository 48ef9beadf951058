use super::{
    enums::generation_phase::GenerationPhase, errors::GenerateError,
    models::generated_image::GeneratedImage,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub message: String,
    pub retryable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Everything the page shows, owned by the orchestrator and changed only
/// through the transitions below.
#[derive(Debug, Clone, Default)]
pub struct GenerationState {
    pub phase: GenerationPhase,
    pub images: Vec<GeneratedImage>,
    pub last_prompt: Option<String>,
    pub error: Option<ErrorNotice>,
    /// Bumped on every started generation; completions carrying an older
    /// value are ignored.
    pub sequence: u64,
    pub modal: Option<String>,
    pub toast: Option<Toast>,
}

impl GenerationState {
    pub fn is_generating(&self) -> bool {
        self.phase == GenerationPhase::Generating
    }

    pub fn is_current(&self, sequence: u64) -> bool {
        self.sequence == sequence
    }

    pub fn image(&self, id: &str) -> Option<&GeneratedImage> {
        self.images.iter().find(|image| image.id == id)
    }

    pub(crate) fn start(&mut self, prompt: &str) -> u64 {
        self.sequence += 1;
        self.phase = GenerationPhase::Generating;
        self.last_prompt = Some(prompt.to_string());
        self.error = None;
        self.modal = None;
        self.sequence
    }

    /// Input was refused before any request went out.
    pub(crate) fn reject(&mut self, error: &GenerateError) {
        self.error = Some(ErrorNotice {
            message: error.to_string(),
            retryable: false,
        });
    }

    pub(crate) fn succeed(&mut self, images: Vec<GeneratedImage>) {
        self.phase = GenerationPhase::Succeeded;
        self.images = images;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, error: &GenerateError) {
        self.phase = GenerationPhase::Failed;
        self.error = Some(ErrorNotice {
            message: error.to_string(),
            retryable: error.is_retryable(),
        });
    }
}

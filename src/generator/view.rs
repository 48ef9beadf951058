use serde::Serialize;

use super::{enums::generation_phase::GenerationPhase, state::GenerationState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageCard {
    pub id: String,
    pub data_url: String,
    pub revised_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum Gallery {
    Placeholder,
    Hidden,
    Cards(Vec<ImageCard>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPanel {
    pub message: String,
    pub show_retry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastView {
    pub message: String,
    pub kind: String,
}

/// What a renderer needs to draw the page. Derived from
/// [`GenerationState`] and never edited directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub generate_enabled: bool,
    pub generate_label: String,
    pub loading: bool,
    pub error: Option<ErrorPanel>,
    pub gallery: Gallery,
    pub modal: Option<ImageCard>,
    pub toast: Option<ToastView>,
}

pub static GALLERY_PLACEHOLDER: &str = "Your generated images will appear here";

impl ViewModel {
    pub fn project(state: &GenerationState) -> Self {
        let generating = state.is_generating();
        let cards = || {
            state
                .images
                .iter()
                .map(|image| ImageCard {
                    id: image.id.to_string(),
                    data_url: image.data_url(),
                    revised_prompt: image.revised_prompt.to_string(),
                })
                .collect::<Vec<_>>()
        };

        let gallery = match state.phase {
            GenerationPhase::Generating | GenerationPhase::Failed => Gallery::Hidden,
            GenerationPhase::Idle | GenerationPhase::Succeeded if state.images.is_empty() => {
                Gallery::Placeholder
            }
            GenerationPhase::Idle | GenerationPhase::Succeeded => Gallery::Cards(cards()),
        };

        let modal = state.modal.as_deref().and_then(|id| {
            state.image(id).map(|image| ImageCard {
                id: image.id.to_string(),
                data_url: image.data_url(),
                revised_prompt: image.revised_prompt.to_string(),
            })
        });

        Self {
            generate_enabled: !generating,
            generate_label: if generating {
                "Generating...".to_string()
            } else {
                "Generate Images".to_string()
            },
            loading: generating,
            error: state.error.as_ref().map(|error| ErrorPanel {
                message: error.message.to_string(),
                show_retry: error.retryable,
            }),
            gallery,
            modal,
            toast: state.toast.as_ref().map(|toast| ToastView {
                message: toast.message.to_string(),
                kind: format!("{:?}", toast.kind).to_lowercase(),
            }),
        }
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::project(&GenerationState::default())
    }
}

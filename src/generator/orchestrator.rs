use std::path::{Path, PathBuf};

use tokio::sync::watch;
use validator::Validate;

use crate::{
    app::util::{time, validation},
    settings::{models::settings::Settings, service as settings_service, store::KeyValueStore},
    whomeai::{
        client::WhomeAiClient,
        structs::whomeai_generate_images_response::WhomeAiGenerateImagesResponse,
    },
};

use super::{
    errors::GenerateError,
    models::{generated_image::GeneratedImage, generation_request::GenerationRequest},
    state::{GenerationState, Toast, ToastKind},
    view::ViewModel,
};

/// A started generation. Awaiting [`PendingGeneration::send`] is the only
/// suspension point; the orchestrator is not borrowed meanwhile.
#[derive(Debug)]
pub struct PendingGeneration {
    sequence: u64,
    request: GenerationRequest,
    client: WhomeAiClient,
}

#[derive(Debug)]
pub struct FinishedGeneration {
    sequence: u64,
    request: GenerationRequest,
    result: Result<Vec<GeneratedImage>, GenerateError>,
}

#[derive(Debug)]
pub enum Completion {
    Applied(Result<Vec<GeneratedImage>, GenerateError>),
    /// A newer generation started after this one; nothing was changed.
    Stale,
}

impl PendingGeneration {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    pub async fn send(self) -> FinishedGeneration {
        let result = request_images(&self.client, &self.request).await;

        FinishedGeneration {
            sequence: self.sequence,
            request: self.request,
            result,
        }
    }
}

async fn request_images(
    client: &WhomeAiClient,
    request: &GenerationRequest,
) -> Result<Vec<GeneratedImage>, GenerateError> {
    tracing::info!(
        model = %request.model,
        size = %request.size,
        n = request.count,
        "generating images"
    );

    let body = client.generate_images(&request.to_input_spec()).await?;
    let response: WhomeAiGenerateImagesResponse = serde_json::from_value(body).map_err(|e| {
        tracing::error!(%e, "unexpected image entries");
        GenerateError::InvalidResponse
    })?;

    let images = GeneratedImage::from_response(response, request, time::current_time_in_millis());
    tracing::info!("generated {} images", images.len());

    Ok(images)
}

pub struct Orchestrator<S> {
    client: WhomeAiClient,
    store: S,
    settings: Settings,
    state: GenerationState,
    view: watch::Sender<ViewModel>,
}

impl<S: KeyValueStore> Orchestrator<S> {
    /// Starts idle with the saved settings, or defaults when none are stored.
    pub fn new(client: WhomeAiClient, store: S) -> Self {
        let settings = settings_service::load_settings(&store).unwrap_or_default();
        let state = GenerationState::default();
        let (view, _) = watch::channel(ViewModel::project(&state));

        Self {
            client,
            store,
            settings,
            state,
            view,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.view.subscribe()
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::project(&self.state)
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and persists a settings change.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), GenerateError> {
        if let Err(e) = settings.validate() {
            return Err(GenerateError::Validation(validation::first_message(&e)));
        }

        self.settings = settings;
        settings_service::save_settings(&mut self.store, &self.settings)?;
        Ok(())
    }

    /// Validates `prompt` and moves to `Generating`. Invalid input leaves the
    /// phase alone, shows the message and sends nothing.
    pub fn begin(&mut self, prompt: &str) -> Result<PendingGeneration, GenerateError> {
        let request = match GenerationRequest::new(prompt, &self.settings) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(%e, "prompt rejected");
                self.state.reject(&e);
                self.publish();
                return Err(e);
            }
        };

        let sequence = self.state.start(&request.prompt);
        self.publish();

        Ok(PendingGeneration {
            sequence,
            request,
            client: self.client.clone(),
        })
    }

    pub fn complete(&mut self, finished: FinishedGeneration) -> Completion {
        if !self.state.is_current(finished.sequence) {
            tracing::debug!(
                sequence = finished.sequence,
                current = self.state.sequence,
                "discarding stale generation"
            );
            return Completion::Stale;
        }

        match &finished.result {
            Ok(images) => {
                self.state.succeed(images.clone());
                settings_service::append_recent_prompt(&mut self.store, &finished.request.prompt);
                if let Err(e) = settings_service::save_settings(&mut self.store, &self.settings) {
                    tracing::warn!(%e, "failed to save settings");
                }
            }
            Err(e) => {
                tracing::error!(%e, "generation failed");
                self.state.fail(e);
            }
        }
        self.publish();

        Completion::Applied(finished.result)
    }

    pub async fn generate(&mut self, prompt: &str) -> Result<Vec<GeneratedImage>, GenerateError> {
        let pending = self.begin(prompt)?;
        let finished = pending.send().await;

        match self.complete(finished) {
            Completion::Applied(result) => result,
            Completion::Stale => Ok(Vec::new()),
        }
    }

    /// Runs the last submitted prompt again.
    pub async fn retry(&mut self) -> Result<Vec<GeneratedImage>, GenerateError> {
        let prompt = self.state.last_prompt.clone().unwrap_or_default();
        self.state.error = None;

        self.generate(&prompt).await
    }

    pub fn dismiss_error(&mut self) {
        self.state.error = None;
        self.publish();
    }

    pub fn open_image(&mut self, id: &str) -> Option<&GeneratedImage> {
        self.state.image(id)?;
        self.state.modal = Some(id.to_string());
        self.publish();

        self.state.image(id)
    }

    pub fn close_image(&mut self) {
        self.state.modal = None;
        self.publish();
    }

    /// Saves image `id` under `dir`. `Ok(None)` when no such image is shown.
    pub fn download_image(&mut self, id: &str, dir: &Path) -> Result<Option<PathBuf>, GenerateError> {
        let Some(image) = self.state.image(id) else {
            return Ok(None);
        };

        let result = image.download_to(dir);
        self.state.toast = Some(match &result {
            Ok(_) => Toast {
                message: "Image downloaded successfully!".to_string(),
                kind: ToastKind::Success,
            },
            Err(e) => Toast {
                message: e.to_string(),
                kind: ToastKind::Error,
            },
        });
        self.publish();

        result.map(Some)
    }

    pub fn dismiss_toast(&mut self) {
        self.state.toast = None;
        self.publish();
    }

    fn publish(&self) {
        self.view.send_replace(ViewModel::project(&self.state));
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        generator::{enums::generation_phase::GenerationPhase, errors::GenerateError},
        settings::{
            models::settings::Settings,
            service as settings_service,
            store::{KeyValueStore, MemoryStore},
            SETTINGS_KEY,
        },
        whomeai::client::WhomeAiClient,
    };

    use super::Orchestrator;

    fn unreachable_client() -> WhomeAiClient {
        WhomeAiClient::via_proxy(reqwest::Client::new(), "http://127.0.0.1:9/api/generateImages")
    }

    #[test]
    fn starts_with_saved_settings() {
        let mut store = MemoryStore::new();
        let saved = Settings {
            model: "flux-dev".to_string(),
            size: "512x512".to_string(),
            quantity: 4,
            seed: Some(9),
        };
        settings_service::save_settings(&mut store, &saved).unwrap();

        let orchestrator = Orchestrator::new(unreachable_client(), store);
        assert_eq!(orchestrator.settings(), &saved);
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, "][").unwrap();

        let orchestrator = Orchestrator::new(unreachable_client(), store);
        assert_eq!(orchestrator.settings(), &Settings::default());
    }

    #[tokio::test]
    async fn settings_outside_option_sets_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store
            .set(
                SETTINGS_KEY,
                r#"{"model":"dalle-9","size":"512x512","quantity":2,"seed":null}"#,
            )
            .unwrap();

        let mut orchestrator = Orchestrator::new(unreachable_client(), store);
        assert_eq!(orchestrator.settings(), &Settings::default());

        let err = orchestrator.generate("a red fox in snow").await.unwrap_err();
        assert!(!matches!(err, GenerateError::Validation(_)));
    }

    #[test]
    fn update_settings_persists_valid_changes_only() {
        let mut orchestrator = Orchestrator::new(unreachable_client(), MemoryStore::new());

        let changed = Settings {
            quantity: 2,
            ..Default::default()
        };
        orchestrator.update_settings(changed.clone()).unwrap();
        assert_eq!(
            settings_service::load_settings(orchestrator.store()),
            Some(changed.clone())
        );

        let invalid = Settings {
            size: "3x3".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            orchestrator.update_settings(invalid),
            Err(GenerateError::Validation(_))
        ));
        assert_eq!(orchestrator.settings(), &changed);
    }

    #[test]
    fn begin_rejects_short_prompt_without_state_change() {
        let mut orchestrator = Orchestrator::new(unreachable_client(), MemoryStore::new());
        let view = orchestrator.subscribe();

        let err = orchestrator.begin("cat").unwrap_err();

        assert!(matches!(err, GenerateError::Validation(_)));
        assert_eq!(orchestrator.state().phase, GenerationPhase::Idle);
        assert_eq!(orchestrator.state().sequence, 0);
        let panel = view.borrow().error.clone().unwrap();
        assert!(!panel.show_retry);
    }

    #[test]
    fn begin_publishes_generating_view() {
        let mut orchestrator = Orchestrator::new(unreachable_client(), MemoryStore::new());
        let view = orchestrator.subscribe();

        let pending = orchestrator.begin("  a red fox in snow ").unwrap();

        assert_eq!(pending.sequence(), 1);
        assert_eq!(pending.request().prompt, "a red fox in snow");
        assert!(view.borrow().loading);
        assert!(!view.borrow().generate_enabled);
    }

    #[test]
    fn unknown_image_is_ignored() -> anyhow::Result<()> {
        let mut orchestrator = Orchestrator::new(unreachable_client(), MemoryStore::new());
        let temp = tempfile::tempdir()?;

        assert!(orchestrator.open_image("img_0_0").is_none());
        assert!(orchestrator.download_image("img_0_0", temp.path())?.is_none());
        assert!(orchestrator.view().modal.is_none());
        assert!(orchestrator.view().toast.is_none());
        Ok(())
    }
}

use std::collections::HashMap;
use std::time::Duration;

use iced::widget::image::Handle;
use iced::widget::{column, container, text};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod config;
mod media;
mod state;
mod ui;

use api::client::PairStore;
use config::Config;
use media::encoder::{self, EncodedMedia, MediaKind};
use media::preview::{self, Preview};
use state::cache::PairCache;
use state::data::{Notification, NotificationKind, Pair};
use state::form::{FormDraft, MediaSlot};

/// How long a notification banner stays on screen
const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Main application state
struct PairManager {
    /// Client for the remote pair store
    store: PairStore,
    /// Mirror of the last acknowledged server state
    cache: PairCache,
    /// The upload/edit form
    draft: FormDraft,
    /// Decoded list thumbnails, keyed by pair id
    thumbnails: HashMap<String, Handle>,
    /// Live contents of the search input
    search_input: String,
    /// Filter currently applied to the list ("" shows everything)
    active_filter: String,
    /// Transient feedback banner, if one is showing
    notification: Option<Notification>,
    notification_seq: u64,
    /// True while a create/update request is in flight
    submitting: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The initial fetch of the collection finished
    PairsLoaded(Result<Vec<Pair>, String>),
    /// The name input changed
    NameChanged(String),
    /// User asked to pick a file for one of the slots
    PickFile(MediaKind),
    /// A picked file finished encoding
    MediaEncoded(MediaKind, Result<EncodedMedia, String>),
    /// The search input changed (filter not applied yet)
    SearchChanged(String),
    /// Search triggered via Enter or the button
    SearchSubmitted,
    /// The form was submitted
    SubmitForm,
    /// The store answered a create request
    CreateFinished(Result<Pair, String>),
    /// The store answered an update request
    UpdateFinished(Result<Pair, String>),
    /// User clicked Edit on a listed pair
    EditPressed(String),
    /// User left edit mode without saving
    CancelEdit,
    /// User clicked Delete on a listed pair
    DeletePressed(String),
    /// The store answered a delete request
    DeleteFinished { id: String, result: Result<(), String> },
    /// A notification's display time ran out
    NotificationExpired(u64),
}

impl PairManager {
    /// Create the application state and kick off the initial fetch
    fn new(config: Config) -> (Self, Task<Message>) {
        let store = PairStore::new(config.api_url);
        let fetch = store.clone();

        let manager = PairManager {
            store,
            cache: PairCache::new(),
            draft: FormDraft::default(),
            thumbnails: HashMap::new(),
            search_input: String::new(),
            active_filter: String::new(),
            notification: None,
            notification_seq: 0,
            submitting: false,
        };

        (
            manager,
            Task::perform(
                async move { fetch.list_all().await.map_err(|e| e.to_string()) },
                Message::PairsLoaded,
            ),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PairsLoaded(Ok(pairs)) => {
                tracing::info!("loaded {} pairs from the store", pairs.len());
                self.rebuild_thumbnails(&pairs);
                self.cache.replace_all(pairs);
                Task::none()
            }
            Message::PairsLoaded(Err(err)) => {
                // Keep whatever was on screen; the user can retry later
                tracing::error!("failed to load pairs: {err}");
                self.notify_error("Could not load pairs from the server")
            }

            Message::NameChanged(name) => {
                self.draft.name = name;
                Task::none()
            }

            Message::PickFile(kind) => {
                // Native picker; returns None when the user cancels
                let picked = match kind {
                    MediaKind::Image => FileDialog::new()
                        .set_title("Select an image")
                        .add_filter("Images", &["jpg", "jpeg", "png", "gif", "webp", "bmp"])
                        .pick_file(),
                    MediaKind::Video => FileDialog::new()
                        .set_title("Select a video")
                        .add_filter("Videos", &["mp4", "webm", "ogv", "mov", "mkv"])
                        .pick_file(),
                };

                match picked {
                    Some(path) => Task::perform(
                        async move {
                            encoder::encode_media(path, kind)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        move |result| Message::MediaEncoded(kind, result),
                    ),
                    None => Task::none(),
                }
            }
            Message::MediaEncoded(kind, Ok(media)) => {
                let slot = MediaSlot::Ready {
                    asset: media.asset,
                    preview: media.preview,
                };
                match kind {
                    MediaKind::Image => self.draft.image = slot,
                    MediaKind::Video => self.draft.video = slot,
                }
                Task::none()
            }
            Message::MediaEncoded(_, Err(err)) => {
                tracing::error!("failed to encode selected file: {err}");
                self.notify_error("Could not read the selected file")
            }

            Message::SearchChanged(term) => {
                self.search_input = term;
                Task::none()
            }
            Message::SearchSubmitted => {
                // Client-side only; the cache itself is untouched
                self.active_filter = self.search_input.trim().to_string();
                Task::none()
            }

            Message::SubmitForm => {
                if self.submitting {
                    return Task::none();
                }
                if let Err(err) = self.draft.validate() {
                    return self.notify_error(&err.to_string());
                }

                let (Some(image), Some(video)) = (
                    self.draft.image.data_uri().map(String::from),
                    self.draft.video.data_uri().map(String::from),
                ) else {
                    return Task::none();
                };
                let name = self.draft.name.trim().to_string();

                self.submitting = true;
                let store = self.store.clone();

                match self.draft.editing.clone() {
                    Some(id) => Task::perform(
                        async move {
                            store
                                .update(&id, &name, &image, &video)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        Message::UpdateFinished,
                    ),
                    None => Task::perform(
                        async move {
                            store
                                .create(&name, &image, &video)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        Message::CreateFinished,
                    ),
                }
            }

            Message::CreateFinished(Ok(pair)) => {
                self.submitting = false;
                self.add_thumbnail(&pair);
                self.cache.append(pair);
                self.draft.reset();
                self.notify_success("Pair saved")
            }
            Message::CreateFinished(Err(err)) => {
                // Cache and form are left as they were so the user can retry
                self.submitting = false;
                tracing::error!("create failed: {err}");
                self.notify_error("Could not save the pair")
            }

            Message::UpdateFinished(Ok(pair)) => {
                self.submitting = false;
                self.add_thumbnail(&pair);

                let id = pair.id.clone();
                if !self.cache.replace_by_id(pair) {
                    // The pair vanished while the update was in flight
                    tracing::warn!("updated pair {id} is no longer in the cache");
                    self.thumbnails.remove(&id);
                }

                self.draft.reset();
                self.notify_success("Pair updated")
            }
            Message::UpdateFinished(Err(err)) => {
                self.submitting = false;
                tracing::error!("update failed: {err}");
                self.notify_error("Could not update the pair")
            }

            Message::EditPressed(id) => {
                let thumbnail = self.thumbnails.get(&id).cloned().map(Preview::Image);
                if let Some(pair) = self.cache.get(&id) {
                    self.draft.load_pair(pair, thumbnail);
                }
                Task::none()
            }
            Message::CancelEdit => {
                self.draft.reset();
                Task::none()
            }

            Message::DeletePressed(id) => {
                let store = self.store.clone();
                Task::perform(
                    async move {
                        let result = store.delete(&id).await.map_err(|e| e.to_string());
                        (id, result)
                    },
                    |(id, result)| Message::DeleteFinished { id, result },
                )
            }
            Message::DeleteFinished { id, result: Ok(()) } => {
                self.cache.remove_by_id(&id);
                self.thumbnails.remove(&id);
                if self.draft.editing.as_deref() == Some(id.as_str()) {
                    // The pair being edited no longer exists
                    self.draft.reset();
                }
                self.notify_success("Pair deleted")
            }
            Message::DeleteFinished { result: Err(err), .. } => {
                tracing::error!("delete failed: {err}");
                self.notify_error("Could not delete the pair")
            }

            Message::NotificationExpired(seq) => {
                if self.notification.as_ref().is_some_and(|n| n.seq == seq) {
                    self.notification = None;
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let visible = self.cache.filter(&self.active_filter);

        let content = column![
            text("Pair Manager").size(32),
            ui::form::view(&self.draft, self.submitting),
            ui::search_bar(&self.search_input),
        ]
        .push_maybe(self.notification.as_ref().map(ui::notification))
        .push(ui::pairs::view(visible, &self.thumbnails))
        .spacing(20)
        .padding(30)
        .max_width(760.0);

        container(content).center_x(Length::Fill).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ---- helpers ----

    /// Show a notification and schedule its auto-dismiss
    fn notify(&mut self, kind: NotificationKind, message: &str) -> Task<Message> {
        self.notification_seq += 1;
        let seq = self.notification_seq;
        self.notification = Some(Notification {
            message: message.to_string(),
            kind,
            seq,
        });

        Task::perform(tokio::time::sleep(NOTIFICATION_TTL), move |_| {
            Message::NotificationExpired(seq)
        })
    }

    fn notify_success(&mut self, message: &str) -> Task<Message> {
        self.notify(NotificationKind::Success, message)
    }

    fn notify_error(&mut self, message: &str) -> Task<Message> {
        self.notify(NotificationKind::Error, message)
    }

    /// Decode list thumbnails for a fresh snapshot
    fn rebuild_thumbnails(&mut self, pairs: &[Pair]) {
        self.thumbnails.clear();
        for pair in pairs {
            self.add_thumbnail(pair);
        }
    }

    /// Decode one pair's image into a list thumbnail
    fn add_thumbnail(&mut self, pair: &Pair) {
        match preview::thumbnail_from_data_uri(&pair.image) {
            Ok(handle) => {
                self.thumbnails.insert(pair.id.clone(), handle);
            }
            Err(err) => {
                // The pair is still listed, just without a preview
                tracing::warn!("no thumbnail for '{}': {err}", pair.name);
            }
        }
    }
}

fn main() -> iced::Result {
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting pair manager");
    tracing::info!("pair store endpoint: {}", config.api_url);

    iced::application("Pair Manager", PairManager::update, PairManager::view)
        .theme(PairManager::theme)
        .centered()
        .run_with(move || PairManager::new(config.clone()))
}

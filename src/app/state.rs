//! Central application state
//!
//! `AppState` is shared across all egui views: the current route, form
//! fields, transiently mirrored server data and the receivers for results
//! still in flight. Workers run backend calls on their own threads and send
//! one message back; `poll` drains everything once per frame.
//!
//! There is no cancellation: a response arriving after the user navigated
//! away is simply dropped together with its receiver.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

use crate::app::config::Config;
use crate::app::session::{self, SessionState};
use crate::pocketbase::{
    AuthData, CategoryRecord, Client, LikeRecord, ListOptions, PostPayload, PostRecord, UserRecord,
};
use crate::shared::validation;

/// Delay before leaving the create form after a successful publish
const CREATE_REDIRECT_DELAY: Duration = Duration::from_millis(2000);
/// Delay before leaving the edit form after a successful save
const EDIT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// Delay before leaving the sign-out confirmation
const SIGN_OUT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Generic banner shown for any rejected post submission
const GENERIC_FORM_ERROR: &str = "Dogodila se greška, provjerite unos.";

/// Client-side route; each variant is one page of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    SignIn,
    SignUp,
    SignOut,
    CreatePost,
    EditPost(String),
    Error,
}

/// Create/edit form state. `editing` decides which call submit makes.
#[derive(Default)]
pub struct PostFormState {
    pub editing: Option<String>,
    pub title: String,
    pub content: String,
    /// Selected category id; empty string means none
    pub category: String,
    /// Path of the image file to upload; empty string means none
    pub image_path: String,
    /// URL of the already stored image when editing
    pub current_image: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub submit_result: Option<Receiver<Result<PostRecord, String>>>,
    pub load_result: Option<Receiver<Result<PostRecord, String>>>,
}

/// Outcome of a like worker
pub enum LikeEvent {
    Load(Result<(usize, Option<LikeRecord>), String>),
    Toggle(Result<LikeToggle, String>),
}

pub enum LikeToggle {
    Created(LikeRecord),
    Removed,
}

/// Per-post like state mirrored from the server
#[derive(Default)]
pub struct LikeState {
    pub count: usize,
    pub liked: bool,
    pub like_id: Option<String>,
    pub loading: bool,
    pending: Option<Receiver<LikeEvent>>,
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub client: Client,
    pub route: Route,

    // auth forms
    pub session: SessionState,
    pub name_input: String,
    pub email_input: String,
    pub password_input: String,
    pub password_confirm_input: String,
    auth_result: Option<Receiver<Result<AuthData, String>>>,

    // home
    pub posts: Vec<PostRecord>,
    pub posts_loading: bool,
    pub posts_error: bool,
    pub category_filter: Option<String>,
    posts_result: Option<Receiver<Result<Vec<PostRecord>, String>>>,

    // shared by home and the post forms
    pub categories: Vec<CategoryRecord>,
    categories_result: Option<Receiver<Result<Vec<CategoryRecord>, String>>>,

    pub post_form: PostFormState,
    pub likes: HashMap<String, LikeState>,

    redirect: Option<(Instant, Route)>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        let client = Client::new(config.server_url());
        Self {
            config,
            client,
            route: Route::Home,
            session: SessionState::new(),
            name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            password_confirm_input: String::new(),
            auth_result: None,
            posts: Vec::new(),
            posts_loading: false,
            posts_error: false,
            category_filter: None,
            posts_result: None,
            categories: Vec::new(),
            categories_result: None,
            post_form: PostFormState::default(),
            likes: HashMap::new(),
            redirect: None,
        }
    }

    /// Start on the home route with its data loading.
    pub fn startup(mut self) -> Self {
        self.navigate(Route::Home);
        self
    }

    /// Snapshot of the signed-in user, if any.
    pub fn user(&self) -> Option<UserRecord> {
        self.client.auth_store().record()
    }

    /// Switch routes. Per-view state is rebuilt from scratch: nothing is
    /// cached across visits.
    pub fn navigate(&mut self, route: Route) {
        self.redirect = None;
        match &route {
            Route::Home => {
                self.posts.clear();
                self.likes.clear();
                self.category_filter = None;
                self.reload_posts();
                self.load_categories();
            }
            Route::SignIn | Route::SignUp => {
                self.session = SessionState::new();
                self.name_input.clear();
                self.email_input.clear();
                self.password_input.clear();
                self.password_confirm_input.clear();
                self.auth_result = None;
            }
            Route::SignOut => {
                session::logout(&self.client);
                self.redirect = Some((Instant::now() + SIGN_OUT_REDIRECT_DELAY, Route::Home));
            }
            Route::CreatePost => {
                self.post_form = PostFormState::default();
                self.load_categories();
            }
            Route::EditPost(id) => {
                self.post_form = PostFormState {
                    editing: Some(id.clone()),
                    loading: true,
                    ..PostFormState::default()
                };
                self.load_categories();
                self.load_post_for_edit(id.clone());
            }
            Route::Error => {}
        }
        self.route = route;
    }

    /// Drain every pending worker result and fire due redirects. Called
    /// once per frame.
    pub fn poll(&mut self) {
        self.poll_auth();
        self.poll_posts();
        self.poll_categories();
        self.poll_post_form();
        self.poll_likes();

        if let Some((at, _)) = self.redirect {
            if Instant::now() >= at {
                let (_, route) = self.redirect.take().expect("redirect checked above");
                self.navigate(route);
            }
        }
    }

    // ---- auth -----------------------------------------------------------

    pub fn handle_sign_in(&mut self) {
        self.session.clear_error();
        if let Err(msg) = validation::validate_sign_in(&self.email_input, &self.password_input) {
            self.session.set_error(msg);
            return;
        }

        self.session.loading = true;
        let client = self.client.clone();
        let email = self.email_input.clone();
        let password = self.password_input.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = session::login(&client, &email, &password).map_err(|e| {
                tracing::error!("login failed: {}", e);
                "Neispravni podaci za prijavu. Provjerite email i lozinku.".to_string()
            });
            let _ = tx.send(result);
        });
        self.auth_result = Some(rx);
    }

    pub fn handle_sign_up(&mut self) {
        self.session.clear_error();
        if let Err(msg) = validation::validate_sign_up(
            &self.name_input,
            &self.email_input,
            &self.password_input,
            &self.password_confirm_input,
        ) {
            self.session.set_error(msg);
            return;
        }

        self.session.loading = true;
        let client = self.client.clone();
        let name = self.name_input.clone();
        let email = self.email_input.clone();
        let password = self.password_input.clone();
        let password_confirm = self.password_confirm_input.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result =
                session::register_and_login(&client, &email, &password, &password_confirm, &name);
            let _ = tx.send(result);
        });
        self.auth_result = Some(rx);
    }

    fn poll_auth(&mut self) {
        if let Some(ref rx) = self.auth_result {
            if let Ok(result) = rx.try_recv() {
                self.auth_result = None;
                self.session.loading = false;
                match result {
                    Ok(auth) => {
                        tracing::info!("signed in as {}", auth.record.email);
                        self.password_input.clear();
                        self.password_confirm_input.clear();
                        self.navigate(Route::Home);
                    }
                    Err(msg) => self.session.set_error(msg),
                }
            }
        }
    }

    // ---- home -----------------------------------------------------------

    /// Re-issue the post list fetch. Every filter change is a new round
    /// trip; nothing is filtered in memory.
    pub fn reload_posts(&mut self) {
        self.posts_loading = true;
        self.posts_error = false;

        let client = self.client.clone();
        let mut options = ListOptions::new()
            .sort("-created")
            .expand("author,category");
        if let Some(ref category) = self.category_filter {
            options = options.filter(format!("category=\"{}\"", category));
        }

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = client
                .collection("posts")
                .get_full_list::<PostRecord>(&options)
                .map_err(|e| {
                    tracing::error!("loading posts failed: {}", e);
                    e.to_string()
                });
            let _ = tx.send(result);
        });
        self.posts_result = Some(rx);
    }

    pub fn set_category_filter(&mut self, category: Option<String>) {
        if self.category_filter != category {
            self.category_filter = category;
            self.reload_posts();
        }
    }

    fn poll_posts(&mut self) {
        if let Some(ref rx) = self.posts_result {
            if let Ok(result) = rx.try_recv() {
                self.posts_result = None;
                self.posts_loading = false;
                match result {
                    Ok(posts) => {
                        for post in &posts {
                            self.likes.entry(post.id.clone()).or_default();
                        }
                        self.posts = posts;
                        self.load_all_likes();
                    }
                    Err(_) => self.posts_error = true,
                }
            }
        }
    }

    fn load_categories(&mut self) {
        let client = self.client.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = client
                .collection("categories")
                .get_full_list::<CategoryRecord>(&ListOptions::new())
                .map_err(|e| {
                    tracing::error!("loading categories failed: {}", e);
                    e.to_string()
                });
            let _ = tx.send(result);
        });
        self.categories_result = Some(rx);
    }

    fn poll_categories(&mut self) {
        if let Some(ref rx) = self.categories_result {
            if let Ok(result) = rx.try_recv() {
                self.categories_result = None;
                match result {
                    Ok(categories) => self.categories = categories,
                    // The dropdown just stays empty; the form still works.
                    Err(_) => {}
                }
            }
        }
    }

    // ---- create / edit --------------------------------------------------

    fn load_post_for_edit(&mut self, id: String) {
        let client = self.client.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = client
                .collection("posts")
                .get_one::<PostRecord>(&id, &ListOptions::new().expand("category"))
                .map_err(|e| {
                    tracing::error!("loading post {} failed: {}", id, e);
                    e.to_string()
                });
            let _ = tx.send(result);
        });
        self.post_form.load_result = Some(rx);
    }

    pub fn submit_post(&mut self) {
        self.post_form.error = None;
        self.post_form.success = None;

        if let Err(msg) = validation::validate_post(&self.post_form.title, &self.post_form.content)
        {
            self.post_form.error = Some(msg);
            return;
        }
        let user = match self.user() {
            Some(user) => user,
            None => {
                self.post_form.error = Some(GENERIC_FORM_ERROR.to_string());
                return;
            }
        };

        let client = self.client.clone();
        let editing = self.post_form.editing.clone();
        let title = self.post_form.title.clone();
        let content = self.post_form.content.clone();
        let category = self.post_form.category.clone();
        let image_path = self.post_form.image_path.trim().to_string();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = (|| -> Result<PostRecord, String> {
                let image = if image_path.is_empty() {
                    None
                } else {
                    let bytes = std::fs::read(&image_path).map_err(|e| {
                        tracing::error!("reading image {} failed: {}", image_path, e);
                        GENERIC_FORM_ERROR.to_string()
                    })?;
                    let file_name = std::path::Path::new(&image_path)
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "image".to_string());
                    Some((file_name, bytes))
                };

                let payload = PostPayload {
                    title,
                    content,
                    author: if editing.is_none() {
                        Some(user.id.clone())
                    } else {
                        None
                    },
                    category: if category.is_empty() {
                        None
                    } else {
                        Some(category)
                    },
                    image,
                };

                let posts = client.collection("posts");
                let call = match editing {
                    Some(ref id) => posts.update_multipart::<PostRecord>(id, payload.into_form()),
                    None => posts.create_multipart::<PostRecord>(payload.into_form()),
                };
                call.map_err(|e| {
                    tracing::error!("saving post failed: {}", e);
                    GENERIC_FORM_ERROR.to_string()
                })
            })();
            let _ = tx.send(result);
        });
        self.post_form.submit_result = Some(rx);
    }

    fn poll_post_form(&mut self) {
        if let Some(ref rx) = self.post_form.load_result {
            if let Ok(result) = rx.try_recv() {
                self.post_form.load_result = None;
                self.post_form.loading = false;
                match result {
                    Ok(post) => {
                        self.post_form.title = post.title.clone();
                        self.post_form.content = post.content.clone();
                        self.post_form.category = post.category.clone();
                        self.post_form.current_image = if post.image.is_empty() {
                            None
                        } else {
                            Some(self.client.file_url(
                                &post.collection_id,
                                &post.id,
                                &post.image,
                            ))
                        };
                    }
                    Err(_) => {
                        self.post_form.error = Some(
                            "Nije moguće učitati post. Provjerite vezu ili pokušajte kasnije."
                                .to_string(),
                        );
                    }
                }
            }
        }

        if let Some(ref rx) = self.post_form.submit_result {
            if let Ok(result) = rx.try_recv() {
                self.post_form.submit_result = None;
                match result {
                    Ok(_) => {
                        let editing = self.post_form.editing.is_some();
                        self.post_form.success = Some(if editing {
                            "Post je uspješno ažuriran!".to_string()
                        } else {
                            "Post uspješno objavljen".to_string()
                        });
                        let delay = if editing {
                            EDIT_REDIRECT_DELAY
                        } else {
                            CREATE_REDIRECT_DELAY
                        };
                        self.redirect = Some((Instant::now() + delay, Route::Home));
                    }
                    Err(msg) => self.post_form.error = Some(msg),
                }
            }
        }
    }

    // ---- likes ----------------------------------------------------------

    fn load_all_likes(&mut self) {
        let post_ids: Vec<String> = self.posts.iter().map(|p| p.id.clone()).collect();
        for post_id in post_ids {
            self.load_likes(post_id);
        }
    }

    /// Fetch all likes for one post and whether the session user is among
    /// them.
    fn load_likes(&mut self, post_id: String) {
        let client = self.client.clone();
        let user_id = self.user().map(|u| u.id);
        let state = self.likes.entry(post_id.clone()).or_default();
        state.loading = true;

        let filter_post_id = post_id.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = client
                .collection("likes")
                .get_full_list::<LikeRecord>(
                    &ListOptions::new().filter(format!("post=\"{}\"", filter_post_id)),
                )
                .map(|likes| {
                    let count = likes.len();
                    let own = user_id
                        .and_then(|uid| likes.into_iter().find(|like| like.user == uid));
                    (count, own)
                })
                .map_err(|e| {
                    tracing::error!("loading likes failed: {}", e);
                    e.to_string()
                });
            let _ = tx.send(LikeEvent::Load(result));
        });
        self.likes.get_mut(&post_id).expect("entry inserted above").pending = Some(rx);
    }

    /// Read-modify-write toggle. The in-flight guard is the only local
    /// serialization; cross-session races are resolved by the server.
    pub fn toggle_like(&mut self, post_id: &str) {
        let user = match self.user() {
            Some(user) => user,
            None => return,
        };
        let state = self.likes.entry(post_id.to_string()).or_default();
        if state.loading || state.pending.is_some() {
            return;
        }
        state.loading = true;
        let liked = state.liked;
        let like_id = state.like_id.clone();

        let client = self.client.clone();
        let post_id_owned = post_id.to_string();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let likes = client.collection("likes");
            let result = if liked {
                match like_id {
                    Some(id) => likes.delete(&id).map(|_| LikeToggle::Removed),
                    // Stale state; reload will straighten it out.
                    None => Err(crate::pocketbase::ClientError::NotFound),
                }
            } else {
                likes
                    .create::<LikeRecord>(&serde_json::json!({
                        "post": post_id_owned,
                        "user": user.id,
                    }))
                    .map(LikeToggle::Created)
            };
            let result = result.map_err(|e| {
                tracing::error!("like toggle failed: {}", e);
                e.to_string()
            });
            let _ = tx.send(LikeEvent::Toggle(result));
        });
        self.likes
            .get_mut(post_id)
            .expect("entry inserted above")
            .pending = Some(rx);
    }

    fn poll_likes(&mut self) {
        let post_ids: Vec<String> = self.likes.keys().cloned().collect();
        for post_id in post_ids {
            let event = {
                let state = match self.likes.get_mut(&post_id) {
                    Some(state) => state,
                    None => continue,
                };
                match state.pending.as_ref().and_then(|rx| rx.try_recv().ok()) {
                    Some(event) => {
                        state.pending = None;
                        state.loading = false;
                        event
                    }
                    None => continue,
                }
            };
            self.apply_like_event(&post_id, event);
        }
    }

    fn apply_like_event(&mut self, post_id: &str, event: LikeEvent) {
        match event {
            LikeEvent::Load(Ok((count, own))) => {
                if let Some(state) = self.likes.get_mut(post_id) {
                    state.count = count;
                    state.liked = own.is_some();
                    state.like_id = own.map(|like| like.id);
                }
            }
            LikeEvent::Load(Err(_)) => {
                // Already logged; the counter just stays where it was.
            }
            LikeEvent::Toggle(Ok(LikeToggle::Created(like))) => {
                if let Some(state) = self.likes.get_mut(post_id) {
                    state.liked = true;
                    state.like_id = Some(like.id);
                    state.count += 1;
                }
            }
            LikeEvent::Toggle(Ok(LikeToggle::Removed)) => {
                if let Some(state) = self.likes.get_mut(post_id) {
                    state.liked = false;
                    state.like_id = None;
                    state.count = state.count.saturating_sub(1);
                }
            }
            LikeEvent::Toggle(Err(_)) => {
                // A failed toggle reloads the whole like state for the post.
                self.load_likes(post_id.to_string());
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::shared::config::AppConfig;

    fn test_state() -> AppState {
        let config = Config::with_builder(
            AppConfig::builder().server_url("http://127.0.0.1:1".to_string()),
        )
        .unwrap();
        let client = Client::new(config.server_url());
        AppState {
            config,
            client,
            ..AppState::new()
        }
    }

    fn signed_in_state() -> AppState {
        let state = test_state();
        state.client.auth_store().save(
            "token123".to_string(),
            UserRecord {
                id: "u1".to_string(),
                email: "ana@example.com".to_string(),
                name: "Ana".to_string(),
                created: String::new(),
                updated: String::new(),
            },
        );
        state
    }

    #[test]
    fn test_sign_in_validation_blocks_request() {
        let mut state = test_state();
        state.handle_sign_in();
        assert!(state.session.error.is_some());
        assert!(state.auth_result.is_none());
        assert!(!state.session.loading);
    }

    #[test]
    fn test_sign_up_password_mismatch_blocks_request() {
        let mut state = test_state();
        state.name_input = "Ana".to_string();
        state.email_input = "ana@example.com".to_string();
        state.password_input = "password1".to_string();
        state.password_confirm_input = "password2".to_string();
        state.handle_sign_up();
        assert_eq!(
            state.session.error.as_deref(),
            Some("Lozinke se ne podudaraju")
        );
        assert!(state.auth_result.is_none());
    }

    #[test]
    fn test_post_validation_blocks_request() {
        let mut state = signed_in_state();
        state.post_form.title = "a".to_string();
        state.post_form.content = "long enough content".to_string();
        state.submit_post();
        assert!(state.post_form.error.is_some());
        assert!(state.post_form.submit_result.is_none());
    }

    #[test]
    fn test_sign_out_route_clears_session() {
        let mut state = signed_in_state();
        assert!(state.user().is_some());
        state.navigate(Route::SignOut);
        assert!(state.user().is_none());
        assert!(state.redirect.is_some());
    }

    #[test]
    fn test_toggle_like_requires_session() {
        let mut state = test_state();
        state.toggle_like("p1");
        let like = state.likes.get("p1");
        assert!(like.is_none() || like.unwrap().pending.is_none());
    }

    #[test]
    fn test_toggle_applies_created_and_removed() {
        let mut state = signed_in_state();
        state.likes.insert("p1".to_string(), LikeState::default());

        state.apply_like_event(
            "p1",
            LikeEvent::Toggle(Ok(LikeToggle::Created(LikeRecord {
                id: "l1".to_string(),
                post: "p1".to_string(),
                user: "u1".to_string(),
            }))),
        );
        let like = state.likes.get("p1").unwrap();
        assert!(like.liked);
        assert_eq!(like.count, 1);
        assert_eq!(like.like_id.as_deref(), Some("l1"));

        state.apply_like_event("p1", LikeEvent::Toggle(Ok(LikeToggle::Removed)));
        let like = state.likes.get("p1").unwrap();
        assert!(!like.liked);
        assert_eq!(like.count, 0);
        assert!(like.like_id.is_none());
    }

    #[test]
    fn test_like_load_result_applied() {
        let mut state = signed_in_state();
        state.likes.insert("p1".to_string(), LikeState::default());
        state.apply_like_event(
            "p1",
            LikeEvent::Load(Ok((
                3,
                Some(LikeRecord {
                    id: "l7".to_string(),
                    post: "p1".to_string(),
                    user: "u1".to_string(),
                }),
            ))),
        );
        let like = state.likes.get("p1").unwrap();
        assert_eq!(like.count, 3);
        assert!(like.liked);
        assert_eq!(like.like_id.as_deref(), Some("l7"));
    }

    #[test]
    fn test_navigate_resets_form_state() {
        let mut state = signed_in_state();
        state.post_form.title = "Stari naslov".to_string();
        state.navigate(Route::CreatePost);
        assert!(state.post_form.title.is_empty());
        assert!(state.post_form.editing.is_none());
    }

    #[test]
    fn test_navigate_edit_marks_editing() {
        let mut state = signed_in_state();
        state.navigate(Route::EditPost("p9".to_string()));
        assert_eq!(state.post_form.editing.as_deref(), Some("p9"));
        assert!(state.post_form.loading);
    }
}

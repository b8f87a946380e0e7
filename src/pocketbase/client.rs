//! PocketBase collection client
//!
//! Collection-scoped CRUD over the records REST API. Calls are synchronous
//! from the caller's point of view: each one drives a reqwest future to
//! completion on its own tokio runtime, so view code can run them on plain
//! worker threads and report back over a channel.

use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

use crate::pocketbase::auth_store::AuthStore;
use crate::pocketbase::error::ClientError;
use crate::pocketbase::files;
use crate::pocketbase::records::{AuthData, ListResult};

/// Batch size used by [`Collection::get_full_list`]
const FULL_LIST_BATCH: u32 = 200;

/// Query options for list and single-record fetches.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub expand: Option<String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }
}

/// PocketBase client. Cheap to clone; clones share the auth store.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
    auth: AuthStore,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_auth_store(base_url, AuthStore::new())
    }

    pub fn with_auth_store(base_url: impl Into<String>, auth: AuthStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
            auth,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_store(&self) -> &AuthStore {
        &self.auth
    }

    /// Scope subsequent calls to one collection.
    pub fn collection<'a>(&'a self, name: &str) -> Collection<'a> {
        Collection {
            client: self,
            name: name.to_string(),
        }
    }

    /// URL of a file stored on a record of this backend.
    pub fn file_url(&self, collection_id: &str, record_id: &str, filename: &str) -> String {
        files::file_url(&self.base_url, collection_id, record_id, filename)
    }

    fn records_url(&self, collection: &str) -> String {
        format!("{}/api/collections/{}/records", self.base_url, collection)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth.token() {
            Some(token) => request.header("Authorization", token),
            None => request,
        }
    }

    fn run<T, F>(&self, future: F) -> Result<T, ClientError>
    where
        F: std::future::Future<Output = Result<T, ClientError>>,
    {
        let rt = Runtime::new()?;
        rt.block_on(future)
    }

    /// Map a non-2xx response onto the error taxonomy. A 401 clears the
    /// session so the whole UI re-gates on the next frame.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status.as_u16() == 401 && self.auth.is_valid() {
            tracing::warn!("session rejected by server, clearing auth store");
            self.auth.clear();
        }
        if status.as_u16() == 404 {
            return Err(ClientError::NotFound);
        }
        let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("request failed")
            .to_string();
        let data = body
            .get("data")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
            data,
        })
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = self.check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

/// Handle for CRUD calls against one named collection.
pub struct Collection<'a> {
    client: &'a Client,
    name: String,
}

impl Collection<'_> {
    /// Create a record from a JSON body.
    pub fn create<T: DeserializeOwned>(&self, body: &serde_json::Value) -> Result<T, ClientError> {
        let url = self.client.records_url(&self.name);
        self.client.run(async {
            let request = self.client.apply_auth(self.client.http.post(&url)).json(body);
            let response = request.send().await?;
            self.client.read_json(response).await
        })
    }

    /// Create a record from a multipart form (used for file uploads).
    pub fn create_multipart<T: DeserializeOwned>(&self, form: Form) -> Result<T, ClientError> {
        let url = self.client.records_url(&self.name);
        self.client.run(async {
            let request = self
                .client
                .apply_auth(self.client.http.post(&url))
                .multipart(form);
            let response = request.send().await?;
            self.client.read_json(response).await
        })
    }

    /// Update a record from a JSON body.
    pub fn update<T: DeserializeOwned>(
        &self,
        id: &str,
        body: &serde_json::Value,
    ) -> Result<T, ClientError> {
        let url = format!("{}/{}", self.client.records_url(&self.name), id);
        self.client.run(async {
            let request = self.client.apply_auth(self.client.http.patch(&url)).json(body);
            let response = request.send().await?;
            self.client.read_json(response).await
        })
    }

    /// Update a record from a multipart form.
    pub fn update_multipart<T: DeserializeOwned>(
        &self,
        id: &str,
        form: Form,
    ) -> Result<T, ClientError> {
        let url = format!("{}/{}", self.client.records_url(&self.name), id);
        self.client.run(async {
            let request = self
                .client
                .apply_auth(self.client.http.patch(&url))
                .multipart(form);
            let response = request.send().await?;
            self.client.read_json(response).await
        })
    }

    /// Delete a record.
    pub fn delete(&self, id: &str) -> Result<(), ClientError> {
        let url = format!("{}/{}", self.client.records_url(&self.name), id);
        self.client.run(async {
            let request = self.client.apply_auth(self.client.http.delete(&url));
            let response = request.send().await?;
            self.client.check(response).await?;
            Ok(())
        })
    }

    /// Fetch a single record by id.
    pub fn get_one<T: DeserializeOwned>(
        &self,
        id: &str,
        options: &ListOptions,
    ) -> Result<T, ClientError> {
        let url = format!("{}/{}", self.client.records_url(&self.name), id);
        self.client.run(async {
            let mut request = self.client.apply_auth(self.client.http.get(&url));
            if let Some(ref expand) = options.expand {
                request = request.query(&[("expand", expand)]);
            }
            let response = request.send().await?;
            self.client.read_json(response).await
        })
    }

    /// Fetch one page of records.
    pub fn get_list<T: DeserializeOwned>(
        &self,
        page: u32,
        per_page: u32,
        options: &ListOptions,
    ) -> Result<ListResult<T>, ClientError> {
        let url = self.client.records_url(&self.name);
        self.client.run(async {
            let mut query: Vec<(&str, String)> = vec![
                ("page", page.to_string()),
                ("perPage", per_page.to_string()),
            ];
            if let Some(ref filter) = options.filter {
                query.push(("filter", filter.clone()));
            }
            if let Some(ref sort) = options.sort {
                query.push(("sort", sort.clone()));
            }
            if let Some(ref expand) = options.expand {
                query.push(("expand", expand.clone()));
            }
            let request = self.client.apply_auth(self.client.http.get(&url)).query(&query);
            let response = request.send().await?;
            self.client.read_json(response).await
        })
    }

    /// Fetch every record, paging until the server reports no more.
    ///
    /// Fine for the small datasets this blog expects; there is no cap.
    pub fn get_full_list<T: DeserializeOwned>(
        &self,
        options: &ListOptions,
    ) -> Result<Vec<T>, ClientError> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let result = self.get_list::<T>(page, FULL_LIST_BATCH, options)?;
            let fetched = result.items.len();
            items.extend(result.items);
            if fetched < FULL_LIST_BATCH as usize || page >= result.total_pages {
                break;
            }
            page += 1;
        }
        Ok(items)
    }

    /// Fetch the first record matching a filter.
    ///
    /// An empty result maps to [`ClientError::NotFound`], which callers use
    /// as an "absent" signal rather than a failure.
    pub fn get_first_list_item<T: DeserializeOwned>(
        &self,
        filter: &str,
    ) -> Result<T, ClientError> {
        let options = ListOptions::new().filter(filter);
        let mut result = self.get_list::<T>(1, 1, &options)?;
        match result.items.pop() {
            Some(item) => Ok(item),
            None => Err(ClientError::NotFound),
        }
    }

    /// Authenticate against this auth collection with an identity/password
    /// pair. On success the session is saved into the auth store, which
    /// notifies its listeners.
    pub fn auth_with_password(
        &self,
        identity: &str,
        password: &str,
    ) -> Result<AuthData, ClientError> {
        let url = format!(
            "{}/api/collections/{}/auth-with-password",
            self.client.base_url, self.name
        );
        let body = serde_json::json!({
            "identity": identity,
            "password": password,
        });
        let auth: AuthData = self.client.run(async {
            let response = self.client.http.post(&url).json(&body).send().await?;
            self.client.read_json(response).await
        })?;
        self.client
            .auth
            .save(auth.token.clone(), auth.record.clone());
        Ok(auth)
    }
}

//! Typed HTTP client for the portfolio API.

use atelier_db::models::project::{CreateProject, Project, UpdateProject};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;

/// A file queued for upload: original name, MIME type, bytes.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Presigned ticket returned by the token-issuance handshake.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTicket {
    pub key: String,
    pub upload_url: String,
    pub public_url: String,
    pub expires_in_secs: u64,
}

/// Client for the `/api` endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET /api/projects
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let response = self.http.get(self.url("/api/projects")).send().await?;
        Self::parse(response).await
    }

    /// GET /api/projects/{id}
    ///
    /// A 404 is a definitive answer, not an error: returns `None`.
    pub async fn get_project(&self, id: &str) -> Result<Option<Project>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/projects/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::parse(response).await.map(Some)
    }

    /// POST /api/projects
    pub async fn create_project(&self, input: &CreateProject) -> Result<Project, ClientError> {
        let response = self
            .http
            .post(self.url("/api/projects"))
            .json(input)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// PUT /api/projects/{id}
    pub async fn update_project(
        &self,
        id: &str,
        input: &UpdateProject,
    ) -> Result<Project, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/projects/{id}")))
            .json(input)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// DELETE /api/projects/{id}
    pub async fn delete_project(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/projects/{id}")))
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    /// POST /api/upload -- multipart upload through the server, returning
    /// the public URL of the stored image.
    pub async fn upload_image(&self, file: UploadFile) -> Result<String, ClientError> {
        #[derive(Deserialize)]
        struct UploadResponse {
            url: String,
        }

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await?;
        let body: UploadResponse = Self::parse(response).await?;
        Ok(body.url)
    }

    /// Upload a batch of gallery images concurrently and return their URLs
    /// in input order.
    ///
    /// Uploads are uncapped and joined together: if any one fails, the whole
    /// batch rejects and files that already finished stay orphaned in blob
    /// storage.
    pub async fn upload_images(&self, files: Vec<UploadFile>) -> Result<Vec<String>, ClientError> {
        futures::future::try_join_all(files.into_iter().map(|file| self.upload_image(file))).await
    }

    /// POST /api/upload/token -- request a presigned direct-upload ticket.
    pub async fn request_upload_ticket(
        &self,
        file_name: &str,
        content_type: &str,
        size: Option<u64>,
    ) -> Result<UploadTicket, ClientError> {
        let response = self
            .http
            .post(self.url("/api/upload/token"))
            .json(&serde_json::json!({
                "fileName": file_name,
                "contentType": content_type,
                "size": size,
            }))
            .send()
            .await?;
        Self::parse(response).await
    }

    /// PUT the file bytes straight to blob storage using a ticket, then
    /// report completion to the server. Returns the public URL.
    pub async fn upload_direct(
        &self,
        ticket: &UploadTicket,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ClientError> {
        let response = self
            .http
            .put(&ticket.upload_url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;
        Self::check(response).await?;

        // Completion callback; the server only logs it.
        let response = self
            .http
            .post(self.url("/api/upload/complete"))
            .json(&serde_json::json!({
                "key": ticket.key,
                "url": ticket.public_url,
            }))
            .send()
            .await?;
        Self::check(response).await?;

        Ok(ticket.public_url.clone())
    }

    /// Fail non-2xx responses with the server's `{error}` message.
    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }
}

//! Analysis backend client implementation.

use crate::error::ApiError;
use fitscan_core::analysis::{AnalysisResult, MealAnalysisResult, WorkoutPlanResult};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

/// Analysis calls wait on the backend's vision model.
const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(120);
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend health probe response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub ai_available: bool,
    pub environment: String,
}

/// Backend root info response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub ai_mode: String,
}

/// Optional JSON body carried by non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the remote analysis backend.
#[derive(Clone)]
pub struct AnalysisApi {
    client: Client,
    base_url: String,
}

impl AnalysisApi {
    /// Creates a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submits profile data and a body photo for composition analysis.
    ///
    /// The same ranges the backend enforces are validated here so obviously
    /// bad submissions never leave the device.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: a field is outside the accepted range
    /// - `Image`: the photo could not be read
    /// - `Server`: the backend rejected the submission
    pub async fn analyze_body(
        &self,
        age: u32,
        height: u32,
        weight: u32,
        image_path: &Path,
    ) -> Result<AnalysisResult, ApiError> {
        if !(10..=120).contains(&age) {
            return Err(ApiError::InvalidInput(
                "Age must be between 10 and 120 years".to_string(),
            ));
        }
        if !(100..=250).contains(&height) {
            return Err(ApiError::InvalidInput(
                "Height must be between 100 and 250 cm".to_string(),
            ));
        }
        if !(30..=300).contains(&weight) {
            return Err(ApiError::InvalidInput(
                "Weight must be between 30 and 300 kg".to_string(),
            ));
        }

        let form = Form::new()
            .text("age", age.to_string())
            .text("height", height.to_string())
            .text("weight", weight.to_string())
            .part("image", image_part(image_path).await?);

        self.post_multipart("/analyze-body/", form).await
    }

    /// Submits a meal photo for calorie/macro estimation.
    pub async fn analyze_meal(&self, image_path: &Path) -> Result<MealAnalysisResult, ApiError> {
        let form = Form::new().part("image", image_part(image_path).await?);
        self.post_multipart("/analyze-meal/", form).await
    }

    /// Requests a workout plan for the given training location and physical
    /// limitations (free text, may be empty).
    pub async fn generate_workout(
        &self,
        training_location: &str,
        limitations: &str,
    ) -> Result<WorkoutPlanResult, ApiError> {
        if training_location.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "Training location must not be blank".to_string(),
            ));
        }

        let form = Form::new()
            .text("training_location", training_location.trim().to_string())
            .text("limitations", limitations.trim().to_string());

        self.post_multipart("/generate-workout/", form).await
    }

    /// Backend health probe.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health").await
    }

    /// Backend identification/version info.
    pub async fn info(&self) -> Result<ApiInfo, ApiError> {
        self.get_json("/").await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .multipart(form)
            .timeout(ANALYSIS_TIMEOUT)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Decodes a response, turning non-2xx statuses into `ApiError::Server`
    /// with the backend's `detail` message when the error body carries one.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| extract_detail(&body))
                .unwrap_or_else(|| format!("server returned status {}", status.as_u16()));
            return Err(ApiError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Extracts the optional human-readable `detail` from an error body.
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
}

/// Builds the multipart image part: the source file name plus a MIME type
/// guessed from the extension, falling back to JPEG.
async fn image_part(path: &Path) -> Result<Part, ApiError> {
    let data = tokio::fs::read(path).await.map_err(|e| ApiError::Image {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("photo.jpg")
        .to_string();
    let mime = mime_guess::from_path(path).first_or(mime_guess::mime::IMAGE_JPEG);

    Ok(Part::bytes(data)
        .file_name(file_name)
        .mime_str(mime.essence_str())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = AnalysisApi::new("http://localhost:8000/");
        assert_eq!(api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_extract_detail() {
        assert_eq!(
            extract_detail(r#"{"detail": "Informe o local de treino."}"#).as_deref(),
            Some("Informe o local de treino.")
        );
        assert_eq!(extract_detail(r#"{"other": 1}"#), None);
        assert_eq!(extract_detail("<html>bad gateway</html>"), None);
    }

    #[tokio::test]
    async fn test_analyze_body_rejects_out_of_range_fields() {
        let api = AnalysisApi::new("http://localhost:8000");

        let err = api
            .analyze_body(5, 175, 75, Path::new("/tmp/body.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));

        let err = api
            .analyze_body(28, 99, 75, Path::new("/tmp/body.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));

        let err = api
            .analyze_body(28, 175, 301, Path::new("/tmp/body.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_generate_workout_rejects_blank_location() {
        let api = AnalysisApi::new("http://localhost:8000");
        let err = api.generate_workout("   ", "").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_missing_image_is_reported() {
        let err = image_part(Path::new("/nonexistent/meal.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Image { .. }));
    }
}

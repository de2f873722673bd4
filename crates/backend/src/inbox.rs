// =============================================================================
// ZeroEdge Backend - Contact & Careers Submissions
// =============================================================================
// Table of Contents:
// 1. Job Openings
// 2. Request Types
// 3. Validation
// 4. Handlers
// =============================================================================
//
// Both public forms land in the admin inbox. Each form carries a hidden
// `honeypot` field; any value in it rejects the submission.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::store::NewMessage;
use crate::AppState;

const MIN_NAME_LEN: usize = 2;
const MIN_COMPANY_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

// -----------------------------------------------------------------------------
// 1. Job Openings
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct JobOpening {
    pub id: &'static str,
    pub title: &'static str,
    pub department: &'static str,
    #[serde(rename = "type")]
    pub employment: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
}

pub static JOB_OPENINGS: &[JobOpening] = &[
    JobOpening {
        id: "game-mathematician",
        title: "Game Mathematician",
        department: "Mathematics",
        employment: "Full-time",
        location: "Remote",
        description: "Design and implement the mathematics behind our slot games: RTP \
                      calculations, volatility modeling and feature design.",
        requirements: &[
            "Strong background in statistics, probability or a related field",
            "Experience with game mathematics and RTP calculations",
            "Proficiency in Python, R or a similar statistical language",
            "Understanding of gaming regulation and compliance requirements",
        ],
    },
    JobOpening {
        id: "frontend-developer",
        title: "Frontend Developer",
        department: "Engineering",
        employment: "Full-time",
        location: "Remote",
        description: "Build the next generation of our slot games with modern web \
                      technology, from game engines to UI components and performance work.",
        requirements: &[
            "Strong JavaScript/TypeScript experience with a modern framework",
            "Experience with Canvas, WebGL or game development",
            "Performance optimization on mobile devices",
            "Familiarity with gaming industry standards",
        ],
    },
    JobOpening {
        id: "technical-artist",
        title: "Technical Artist",
        department: "Art",
        employment: "Full-time",
        location: "Remote",
        description: "Bridge art and technology: visual effects, animation and the \
                      technical side of shipping game assets.",
        requirements: &[
            "Experience with 2D/3D animation and visual effects",
            "Knowledge of game engines and real-time rendering",
            "Proficiency with After Effects, Blender or similar tools",
            "Awareness of performance constraints in games",
        ],
    },
];

pub fn job_opening(id: &str) -> Option<&'static JobOpening> {
    JOB_OPENINGS.iter().find(|job| job.id == id)
}

// -----------------------------------------------------------------------------
// 2. Request Types
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub honeypot: String,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationRequest {
    pub name: String,
    pub email: String,
    pub position: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    pub message: String,
    #[serde(default)]
    pub honeypot: String,
}

// -----------------------------------------------------------------------------
// 3. Validation
// -----------------------------------------------------------------------------

fn reject_bots(honeypot: &str) -> Result<(), ApiError> {
    if honeypot.is_empty() {
        Ok(())
    } else {
        tracing::debug!("form submission rejected by honeypot");
        Err(ApiError::BadRequest("invalid submission".into()))
    }
}

fn min_len(field: &str, value: &str, min: usize) -> Result<(), ApiError> {
    if value.trim().chars().count() < min {
        return Err(ApiError::BadRequest(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

fn required(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}

fn email(value: &str) -> Result<(), ApiError> {
    if is_valid_email(value.trim()) {
        Ok(())
    } else {
        Err(ApiError::BadRequest("invalid email address".into()))
    }
}

/// Basic shape check: one `@`, non-empty local part, dotted domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Optional profile link: blank is fine, anything else must be an http(s) URL.
fn profile_url(field: &str, value: Option<&str>) -> Result<Option<String>, ApiError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {
            Ok(Some(parsed.to_string()))
        }
        _ => Err(ApiError::BadRequest(format!("invalid {} URL", field))),
    }
}

impl ContactRequest {
    fn validate(self) -> Result<NewMessage, ApiError> {
        reject_bots(&self.honeypot)?;
        min_len("name", &self.name, MIN_NAME_LEN)?;
        email(&self.email)?;
        if let Some(company) = self.company.as_deref().filter(|c| !c.trim().is_empty()) {
            min_len("company", company, MIN_COMPANY_LEN)?;
        }
        required("subject", &self.subject)?;
        min_len("message", &self.message, MIN_MESSAGE_LEN)?;

        Ok(NewMessage {
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            subject: self.subject,
            message: self.message,
        })
    }
}

impl ApplicationRequest {
    fn validate(self) -> Result<NewMessage, ApiError> {
        reject_bots(&self.honeypot)?;
        min_len("name", &self.name, MIN_NAME_LEN)?;
        email(&self.email)?;
        let job = job_opening(self.position.trim())
            .ok_or_else(|| ApiError::BadRequest("please select a position".into()))?;
        let linkedin = profile_url("LinkedIn", self.linkedin.as_deref())?;
        let github = profile_url("GitHub", self.github.as_deref())?;
        min_len("message", &self.message, MIN_MESSAGE_LEN)?;

        let mut body = self.message.trim().to_string();
        for (label, link) in [("LinkedIn", linkedin), ("GitHub", github)] {
            if let Some(link) = link {
                body.push_str(&format!("\n{}: {}", label, link));
            }
        }

        Ok(NewMessage {
            name: self.name,
            email: self.email,
            phone: None,
            company: None,
            subject: format!("Application: {}", job.title),
            message: body,
        })
    }
}

// -----------------------------------------------------------------------------
// 4. Handlers
// -----------------------------------------------------------------------------

/// Accept a contact form submission into the admin inbox.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let message = state.store.add_message(req.validate()?);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": message.id })),
    ))
}

pub async fn list_openings() -> Json<Value> {
    Json(json!({ "openings": JOB_OPENINGS }))
}

/// Accept a job application into the admin inbox.
pub async fn submit_application(
    State(state): State<AppState>,
    Json(req): Json<ApplicationRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let message = state.store.add_message(req.validate()?);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": message.id })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::create_router;
    use crate::store::SiteStore;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use axum::response::Response;
    use axum::Router;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> (Router, AppState) {
        let state = AppState {
            config: Arc::new(Config::from_lookup(|_| None).unwrap()),
            store: SiteStore::from_fixtures().unwrap(),
        };
        (create_router(state.clone()), state)
    }

    async fn post(app: &Router, uri: &str, body: Value) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn json_body(res: Response) -> Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn contact() -> Value {
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "company": "Analytical Engines",
            "subject": "Licensing",
            "message": "We would like to license Neon Drift.",
            "honeypot": ""
        })
    }

    fn application() -> Value {
        json!({
            "name": "Grace",
            "email": "grace@example.com",
            "position": "frontend-developer",
            "linkedin": "https://www.linkedin.com/in/grace",
            "github": "",
            "message": "I have shipped three WebGL games.",
            "honeypot": ""
        })
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.b"));
        assert!(!is_valid_email("a@b@c.d"));
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(profile_url("GitHub", None).unwrap(), None);
        assert_eq!(profile_url("GitHub", Some("  ")).unwrap(), None);
        assert!(profile_url("GitHub", Some("https://github.com/grace")).unwrap().is_some());
        assert!(profile_url("GitHub", Some("github.com/grace")).is_err());
        assert!(profile_url("GitHub", Some("javascript:alert(1)")).is_err());
    }

    #[tokio::test]
    async fn test_contact_submission() {
        let (app, state) = test_app();
        let res = post(&app, "/api/contact", contact()).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let id = json_body(res).await["id"].as_u64().unwrap();
        let stored = state.store.message(id).unwrap();
        assert_eq!(stored.subject, "Licensing");
        assert_eq!(stored.company.as_deref(), Some("Analytical Engines"));
    }

    #[tokio::test]
    async fn test_contact_field_rules() {
        let (app, state) = test_app();
        let before = state.store.messages(None, None).len();

        for (field, value, expected) in [
            ("name", "A", "name must be at least 2 characters"),
            ("email", "not-an-email", "invalid email address"),
            ("company", "X", "company must be at least 2 characters"),
            ("subject", " ", "subject is required"),
            ("message", "Too short", "message must be at least 10 characters"),
        ] {
            let mut body = contact();
            body[field] = json!(value);
            let res = post(&app, "/api/contact", body).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", field);
            assert_eq!(json_body(res).await["error"], expected);
        }

        assert_eq!(state.store.messages(None, None).len(), before);
    }

    #[tokio::test]
    async fn test_company_is_optional() {
        let (app, _) = test_app();
        let mut body = contact();
        body.as_object_mut().unwrap().remove("company");
        assert_eq!(post(&app, "/api/contact", body).await.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_filled_honeypot_is_rejected() {
        let (app, state) = test_app();
        let before = state.store.messages(None, None).len();

        let mut body = contact();
        body["honeypot"] = json!("http://spam.example");
        let res = post(&app, "/api/contact", body).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(res).await["error"], "invalid submission");

        let mut body = application();
        body["honeypot"] = json!("x");
        assert_eq!(post(&app, "/api/careers/apply", body).await.status(), StatusCode::BAD_REQUEST);

        assert_eq!(state.store.messages(None, None).len(), before);
    }

    #[tokio::test]
    async fn test_list_openings() {
        let (app, _) = test_app();
        let res = app
            .clone()
            .oneshot(Request::builder().uri("/api/careers").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        let openings = body["openings"].as_array().unwrap();
        assert_eq!(openings.len(), JOB_OPENINGS.len());
        assert_eq!(openings[0]["type"], "Full-time");
    }

    #[tokio::test]
    async fn test_application_lands_in_inbox() {
        let (app, state) = test_app();
        let res = post(&app, "/api/careers/apply", application()).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let id = json_body(res).await["id"].as_u64().unwrap();
        let stored = state.store.message(id).unwrap();
        assert_eq!(stored.subject, "Application: Frontend Developer");
        assert!(stored.message.contains("LinkedIn: https://www.linkedin.com/in/grace"));
        assert!(!stored.message.contains("GitHub"));
    }

    #[tokio::test]
    async fn test_application_rules() {
        let (app, _) = test_app();

        let mut body = application();
        body["position"] = json!("");
        let res = post(&app, "/api/careers/apply", body).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(res).await["error"], "please select a position");

        let mut body = application();
        body["github"] = json!("not a url");
        let res = post(&app, "/api/careers/apply", body).await;
        assert_eq!(json_body(res).await["error"], "invalid GitHub URL");

        let mut body = application();
        body["message"] = json!("hire me");
        assert_eq!(post(&app, "/api/careers/apply", body).await.status(), StatusCode::BAD_REQUEST);
    }
}

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use anyhow::Context;
use g3_predictor::{
    config::ServerConfig, handle_submission, CategoricalMappings, EncodedRecord, Model,
    PredictError, StudentRecord, SubmissionOutcome, FEATURE_ORDER,
};

// ---------- Server state ----------

#[derive(Clone)]
struct AppState {
    model: Arc<Model>,
    mappings: Arc<CategoricalMappings>,
}

// ---------- Handlers ----------

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn predict(
    State(state): State<AppState>,
    Json(record): Json<StudentRecord>,
) -> Result<Json<SubmissionOutcome>, (StatusCode, Json<serde_json::Value>)> {
    let outcome = handle_submission(&state.model, &state.mappings, &record).map_err(|e| {
        let status = match e {
            PredictError::Encode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PredictError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": e.to_string() })))
    })?;

    // Debug signal so we can confirm what the model actually consumed
    if std::env::var("LOG_PRED").ok().as_deref() == Some("1") {
        let nonzero = outcome.encoded.iter().filter(|v| **v != 0).count();
        let sample: Vec<String> = FEATURE_ORDER
            .iter()
            .zip(outcome.encoded.iter())
            .take(6)
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        tracing::info!(
            "predict label={} p_good={:.3} nonzero={} sample=[{}]",
            outcome.label,
            outcome.probabilities[1],
            nonzero,
            sample.join(", ")
        );
    }

    Ok(Json(outcome))
}

// ---------- Startup ----------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = ServerConfig::from_env();

    let model = Model::load(&cfg.model_path)
        .with_context(|| format!("failed to load model artifact at {}", cfg.model_path.display()))?;
    model
        .check_schema(EncodedRecord::columns())
        .context("model artifact does not match the form's column order")?;

    // Warmup so artifact problems surface before the listener binds
    let _ = model.predict(&vec![0.0; model.n_features()])?;
    tracing::info!(
        "loaded model from {}; features[{}], warmup ok",
        cfg.model_path.display(),
        model.n_features()
    );

    let state = AppState {
        model: Arc::new(model),
        mappings: Arc::new(CategoricalMappings::new()),
    };

    let app = axum::Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .with_state(state);

    tracing::info!("listening on {}", cfg.addr);
    let listener = tokio::net::TcpListener::bind(cfg.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

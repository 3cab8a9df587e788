//! Route handlers.

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use patient_api_core::{Patient, PatientInput, PatientUpdate, PatientView};
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/patients", get(list_patients).post(create_patient))
        .route("/patients/:id", get(get_patient).patch(update_patient))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub msg: &'static str,
}

async fn root() -> Json<Welcome> {
    Json(Welcome {
        msg: "Welcome to the Patient API. See /patients for records.",
    })
}

async fn list_patients(
    State(state): State<AppState>,
) -> ApiResult<Json<BTreeMap<String, PatientView>>> {
    let patients = state.with_store(|store| store.list()).await?;
    Ok(Json(patients))
}

async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PatientView>> {
    let patient = state.with_store(move |store| store.get(&id)).await?;
    Ok(Json(patient.view()))
}

async fn create_patient(
    State(state): State<AppState>,
    body: Result<Json<PatientInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PatientView>)> {
    let Json(input) = body?;
    let patient = Patient::try_from(input)?;
    let view = state.with_store(move |store| store.insert(patient)).await?;

    info!("Created patient {} ({})", view.patient.id(), view.category);
    Ok((StatusCode::CREATED, Json(view)))
}

async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PatientUpdate>, JsonRejection>,
) -> ApiResult<Json<PatientView>> {
    let Json(update) = body?;
    let view = state
        .with_store(move |store| store.update(&id, &update))
        .await?;
    Ok(Json(view))
}

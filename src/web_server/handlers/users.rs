//! Form submission handler.

use axum::{
    extract::{Form, State},
    response::Redirect,
};
use log::info;

use super::super::error::WebError;
use super::super::types::{AppState, NewUserForm};

/// Stores the submitted user and sends the browser back to the list.
pub async fn add_user_handler(
    State(state): State<AppState>,
    Form(form): Form<NewUserForm>,
) -> Result<Redirect, WebError> {
    let id = state.store.add_user(&form.name, &form.email).await?;
    info!("Added user {id}");
    Ok(Redirect::to("/"))
}

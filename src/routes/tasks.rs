use crate::{
    auth::{present, AuthenticatedUser},
    error::AppError,
    models::{ApiResponse, TaskInput, TaskUpdate},
    store::TaskStore,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

/// Lists the authenticated user's tasks in insertion order.
#[get("")]
pub async fn list_tasks(
    store: web::Data<TaskStore>,
    auth: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = store.list_for_user(auth.user_id());
    Ok(HttpResponse::Ok().json(ApiResponse::ok(tasks, "Tasks retrieved successfully")))
}

/// Creates a task owned by the authenticated user.
///
/// Title and description are both required; the new task starts out not
/// completed, stamped with its creation time.
#[post("")]
pub async fn create_task(
    store: web::Data<TaskStore>,
    auth: AuthenticatedUser,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let (title, description) = match (
        present(&task_data.title),
        present(&task_data.description),
    ) {
        (Some(title), Some(description)) => (title, description),
        _ => {
            return Err(AppError::MissingField(
                "Title and description are required".into(),
            ))
        }
    };

    let task = store.create(auth.user_id(), title, description);
    log::info!("user '{}' created task {}", auth.0.username, task.id);

    Ok(HttpResponse::Created().json(ApiResponse::ok(task, "Task created successfully")))
}

/// Fetches one task by id, if it belongs to the authenticated user.
#[get("/{id}")]
pub async fn get_task(
    store: web::Data<TaskStore>,
    auth: AuthenticatedUser,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task = store
        .get_for_user(auth.user_id(), task_id.into_inner())
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(task, "Task retrieved successfully")))
}

/// Applies a partial update to the user's task.
///
/// Only the fields present in the body change; an empty body is valid and
/// returns the record untouched. A task owned by someone else is a 404, the
/// same as a nonexistent id.
#[put("/{id}")]
pub async fn update_task(
    store: web::Data<TaskStore>,
    auth: AuthenticatedUser,
    task_id: web::Path<i32>,
    changes: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    let task = store
        .update(auth.user_id(), task_id.into_inner(), &changes)
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(task, "Task updated successfully")))
}

/// Deletes the user's task and returns the removed record.
#[delete("/{id}")]
pub async fn delete_task(
    store: web::Data<TaskStore>,
    auth: AuthenticatedUser,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task = store
        .delete(auth.user_id(), task_id.into_inner())
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;
    log::info!("user '{}' deleted task {}", auth.0.username, task.id);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(task, "Task deleted successfully")))
}

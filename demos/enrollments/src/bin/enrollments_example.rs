use thinkific_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting enrollments example");

    let client = Client::from_env()?;
    let enrollments = client.enrollments();

    let page = enrollments
        .list(&Options::new().with("page", 1).with("limit", 10))
        .await?;
    info!("First page: {}", page);
    if let Some(pagination) = page.pagination() {
        info!("Pagination: {}", pagination);
    }

    let user_id = std::env::args().nth(1).unwrap_or_else(|| "1".to_string());
    let request = FindByRequest::new(json!(user_id)).single();

    match enrollments.find_by(&request).await? {
        FindResult::Found(enrollment) => {
            info!("Found enrollment: {}", enrollment);
            if let Some(id) = enrollment.id() {
                let id = match id {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                enrollments.expire(&id, None).await?;
                info!("Enrollment {} expired", id);
            }
        }
        FindResult::NotFound => info!("No enrollment for user {}", user_id),
        FindResult::Page(page) => info!("Unexpected page: {}", page),
    }

    Ok(())
}

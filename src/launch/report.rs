//! Result reporting.
//!
//! Pure formatting; any failure has already aborted the run upstream.

/// Deep link to the ECS console's task detail view.
pub fn console_url(region: &str, cluster: &str, task_id: &str) -> String {
    format!(
        "https://console.aws.amazon.com/ecs/home?region={region}#/clusters/{cluster}/tasks/{task_id}/details"
    )
}

/// The line printed on success.
pub fn success_line(url: &str) -> String {
    format!("Task started! View here:\n{url}")
}

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use contracts::shared::format::group_thousands;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Фильтр по умолчанию, если `RUST_LOG` не задан
pub const DEFAULT_LOG_FILTER: &str = "info,hyper=warn,reqwest=warn";

/// Консоль + файл `<log_dir>/backend.log` (без ANSI-цветов)
pub fn init_tracing(log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))
}

/// Голубой для 200, коричневый для остальных
fn status_color(status: u16) -> &'static str {
    if status == 200 {
        "36"
    } else {
        "33"
    }
}

fn format_line(color: &str, millis: u128, size: &str, status: u16, method: &str, path: &str) -> String {
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color,
        Local::now().format("%H:%M:%S"),
        millis,
        size,
        status,
        method,
        path
    )
}

/// Простой middleware для логирования запросов
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();
    let status = parts.status.as_u16();

    // Читаем тело ответа, чтобы узнать реальный размер
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let size = group_thousands(bytes.len() as u64, '.');
            println!(
                "{}",
                format_line(
                    status_color(status),
                    start.elapsed().as_millis(),
                    &size,
                    status,
                    method.as_str(),
                    &path
                )
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(_) => {
            println!(
                "{}",
                format_line("33", start.elapsed().as_millis(), "error", status, method.as_str(), &path)
            );
            Response::from_parts(parts, Body::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(200), "36");
        assert_eq!(status_color(502), "33");
    }

    #[test]
    fn test_format_line_layout() {
        let line = format_line("36", 12, "1.234", 200, "GET", "/api");
        assert!(line.ends_with("|    12ms |        1.234 | 200    GET /api"));
    }
}

use async_zip::tokio::write::ZipFileWriter;
use async_zip::{Compression, ZipEntryBuilder};
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::io::{AsyncWrite, DuplexStream};
use tokio_util::io::ReaderStream;
use uuid::Uuid;

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::models::ProjectRequest;
use crate::staging::StagingRoot;

/// Suggested download filename for the generated archive.
const ARCHIVE_FILENAME: &str = "generated-project.zip";

/// Buffer between the archive producer and the response body. The producer
/// blocks on slow consumers instead of assembling the archive in memory.
const STREAM_BUFFER_SIZE: usize = 64 * 1024;

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side; clients only see a generic message.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Project Generation
// ============================================================

/// Generate a Spring Boot project skeleton and stream it back as a zip.
///
/// The rendered tree is staged under a uniquely named directory, then
/// streamed entry-by-entry into the response body from a spawned task. The
/// staging tree is deleted when that task finishes, whether streaming
/// completed, failed mid-way, or the client disconnected.
pub async fn generate_project(
    State(config): State<GeneratorConfig>,
    Json(request): Json<ProjectRequest>,
) -> Result<Response, (StatusCode, String)> {
    let token = Uuid::new_v4();
    let staging =
        StagingRoot::create(&config.staging_base, &token.to_string()).map_err(internal_error)?;

    // Best-effort structuring: per-file failures are logged and skipped, the
    // client still receives an archive of whatever was written.
    let failures = staging.create_project_structure(&request);
    if !failures.is_empty() {
        tracing::warn!(
            skipped = failures.len(),
            staging = %staging.path().display(),
            "materialization completed with skipped files"
        );
    }

    let (reader, writer) = tokio::io::duplex(STREAM_BUFFER_SIZE);
    tokio::spawn(stream_archive(staging, writer));

    let body = Body::from_stream(ReaderStream::new(reader));
    Response::builder()
        .header(header::CONTENT_TYPE, "application/zip")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={ARCHIVE_FILENAME}"),
        )
        .body(body)
        .map_err(internal_error)
}

/// Stream the staging tree as a zip archive into `writer`, then delete the
/// staging tree.
///
/// The trailer write (`close`) is attempted on every path, and the staging
/// root is dropped before the writer, so by the time the response body
/// reaches EOF the staging tree is already gone. A mid-stream error aborts
/// the body at the transport level; there is no structured error payload to
/// send once streaming has begun.
async fn stream_archive(staging: StagingRoot, writer: DuplexStream) {
    let mut zip = ZipFileWriter::with_tokio(writer);
    let written = write_entries(&mut zip, &staging).await;
    let closed = zip.close().await;
    drop(staging);

    if let Err(err) = written {
        tracing::error!("archive streaming aborted: {}", err);
    }
    if let Err(err) = closed {
        tracing::error!("failed to finalize archive: {}", err);
    }
}

/// Write every regular file under the staging root as one deflate-compressed
/// entry, in sorted relative-path order.
async fn write_entries<W>(
    zip: &mut ZipFileWriter<W>,
    staging: &StagingRoot,
) -> Result<(), GeneratorError>
where
    W: AsyncWrite + Unpin,
{
    for (name, path) in staging.regular_files()? {
        let content = tokio::fs::read(&path).await?;
        let entry = ZipEntryBuilder::new(name.into(), Compression::Deflate);
        zip.write_entry_whole(entry, &content).await?;
    }
    Ok(())
}

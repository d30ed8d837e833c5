use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::card::{CardData, Logo};
use crate::config::{self, AppConfig};

const CARD_FILE_NAME: &str = "card.json";

/// Stand-in latency for the real persistence backend.
const SAVE_DELAY: Duration = Duration::from_secs(1);

/// Directory saved cards are written to.
pub fn save_dir(config: &AppConfig) -> Result<PathBuf> {
    match &config.save.dir {
        Some(dir) => Ok(dir.clone()),
        None => config::config_dir(),
    }
}

/// Persist a completed card after the simulated save delay. Returns the path
/// the card was written to.
pub async fn save_card(card: CardData, dir: PathBuf) -> Result<PathBuf> {
    tokio::time::sleep(SAVE_DELAY).await;
    write_card(&card, &dir).await
}

async fn write_card(card: &CardData, dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create save directory: {}", dir.display()))?;
    let path = dir.join(CARD_FILE_NAME);
    let payload = serde_json::to_string_pretty(card).context("Failed to serialize card")?;
    tokio::fs::write(&path, payload)
        .await
        .with_context(|| format!("Failed to write card file: {}", path.display()))?;
    Ok(path)
}

/// Read an image file and encode it as an embeddable data URL. Any readable
/// file is accepted; there is no size or type limit.
pub async fn read_logo(path: &str) -> Result<Logo> {
    let path = Path::new(path);
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read logo file: {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let byte_len = bytes.len();
    Ok(Logo {
        file_name,
        data_url: data_url(mime_for_path(path), &bytes),
        byte_len,
    })
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

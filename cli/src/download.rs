use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    env, fs,
    io::{Read, Write},
    path::{Path, PathBuf},
    time::Duration,
};

pub const CATALOGUE_ENV: &str = "FILMPATH_CATALOGUE";
pub const DOWNLOAD_URL_ENV: &str = "DB_DOWNLOAD_URL";
pub const DRIVE_FILE_ID_ENV: &str = "DB_FILE_ID";

const CATALOGUE_FILE_NAME: &str = "movies.sqlite";
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

pub fn build_drive_download_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={file_id}")
}

/// A direct URL wins over a Google Drive file id; blank values count as unset.
pub fn resolve_download_url(
    direct_url: Option<String>,
    drive_file_id: Option<String>,
) -> Option<String> {
    let non_blank = |value: Option<String>| value.filter(|text| !text.trim().is_empty());

    non_blank(direct_url)
        .or_else(|| non_blank(drive_file_id).map(|id| build_drive_download_url(id.trim())))
}

/// `~/.filmpath/movies.sqlite`
pub fn default_catalogue_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().context("Could not find home directory")?;
    Ok(home_dir.join(".filmpath").join(CATALOGUE_FILE_NAME))
}

/// Catalogue location from the command line, then `FILMPATH_CATALOGUE`,
/// then the default under the home directory.
pub fn resolve_catalogue_path(cli_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        return Ok(path);
    }
    match env::var(CATALOGUE_ENV) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => default_catalogue_path(),
    }
}

pub fn ensure_catalogue_downloaded(catalogue_path: &Path) -> Result<()> {
    if catalogue_path.exists() {
        return Ok(());
    }

    let direct_url = env::var(DOWNLOAD_URL_ENV).ok();
    let drive_file_id = env::var(DRIVE_FILE_ID_ENV).ok();
    let Some(url) = resolve_download_url(direct_url, drive_file_id) else {
        bail!(
            "The movie catalogue is missing at {}. Pass --catalogue, or set \
             {DOWNLOAD_URL_ENV} or {DRIVE_FILE_ID_ENV} to a publicly shared link.",
            catalogue_path.display()
        );
    };

    println!("📦 Catalogue not found, downloading movie database...");

    if let Some(parent) = catalogue_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }

    let partial_path = catalogue_path.with_extension("part");
    download_with_progress(&url, &partial_path).with_context(|| {
        format!(
            "Unable to download the catalogue. Check {DOWNLOAD_URL_ENV}/{DRIVE_FILE_ID_ENV} \
             and ensure the link is accessible"
        )
    })?;
    fs::rename(&partial_path, catalogue_path)?;

    tracing::info!(path = %catalogue_path.display(), "catalogue downloaded");
    println!("✅ Catalogue ready!");

    Ok(())
}

fn download_with_progress(url: &str, dest: &Path) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()?;
    let mut response = client.get(url).send()?.error_for_status()?;
    let total_size = response.content_length().unwrap_or(0);

    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")?
            .progress_chars("#>-")
    );

    let mut file = fs::File::create(dest)?;
    let mut downloaded: u64 = 0;
    let mut buffer = [0; 8192];

    loop {
        let bytes_read = response.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        file.write_all(&buffer[..bytes_read])?;
        downloaded += bytes_read as u64;
        pb.set_position(downloaded);
    }

    pb.finish_with_message("Download complete");
    Ok(())
}
